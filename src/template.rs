use std::path::PathBuf;

use crate::constants::{AUTH_TEMPLATE_DIR, MAIN_TEMPLATE_DIR, TEMPLATES_ROOT_DIR};
use crate::error::{Error, Result};

/// The template variants shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Express + MongoDB starter.
    Main,
    /// Same starter with JWT auth wired in.
    Auth,
}

impl TemplateKind {
    /// Selects the variant from the `--auth` flag.
    pub fn from_auth_flag(auth: bool) -> Self {
        if auth {
            TemplateKind::Auth
        } else {
            TemplateKind::Main
        }
    }

    /// Directory name of this variant under the templates root.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateKind::Main => MAIN_TEMPLATE_DIR,
            TemplateKind::Auth => AUTH_TEMPLATE_DIR,
        }
    }
}

/// Locates the `templates/` directory holding the payload trees.
///
/// Installed layouts keep it next to the executable (or one level up);
/// `cargo run` and the test suite find it via the manifest directory.
pub fn resolve_templates_root() -> Result<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        let mut dir = exe.parent().map(|p| p.to_path_buf());
        for _ in 0..3 {
            let Some(current) = dir else { break };
            let candidate = current.join(TEMPLATES_ROOT_DIR);
            if candidate.is_dir() {
                return Ok(candidate);
            }
            dir = current.parent().map(|p| p.to_path_buf());
        }
    }

    let fallback = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_ROOT_DIR);
    if fallback.is_dir() {
        return Ok(fallback);
    }

    Err(Error::TemplateDoesNotExistsError {
        template_dir: fallback.display().to_string(),
    })
}
