use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::git;
use crate::ioutils::{copy_tree, ensure_destination};
use crate::manifest::rewrite_manifest_name;
use crate::pipeline::Step;
use crate::pm::PackageManager;
use crate::template::TemplateKind;

/// Everything the pipeline needs, resolved once from the arguments.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub template: TemplateKind,
    /// Absolute destination directory, `<base_dir>/<project_name>`.
    pub destination: PathBuf,
}

impl ScaffoldRequest {
    /// Builds a request rooted at an explicit base directory.
    ///
    /// The destination is derived here once; every step receives it as a
    /// parameter instead of reading the process working directory.
    pub fn new<P: AsRef<Path>>(project_name: &str, template: TemplateKind, base_dir: P) -> Self {
        Self {
            project_name: project_name.to_string(),
            template,
            destination: base_dir.as_ref().join(project_name),
        }
    }
}

/// Executes the three scaffold steps against a resolved request.
pub struct Scaffolder {
    request: ScaffoldRequest,
    package_manager: PackageManager,
    templates_root: PathBuf,
}

impl Scaffolder {
    pub fn new(
        request: ScaffoldRequest,
        package_manager: PackageManager,
        templates_root: PathBuf,
    ) -> Self {
        Self { request, package_manager, templates_root }
    }

    /// The pipeline steps in execution order.
    pub fn steps(&self) -> Vec<Step<'_>> {
        vec![
            Step::new(
                format!("Copy {} template", self.request.template.dir_name()),
                || self.materialize(),
            ),
            Step::new(format!("Install dependencies with {}", self.package_manager), || {
                self.install()
            }),
            Step::new("Initialize git repository", || self.init_repository()),
        ]
    }

    /// Copies the template tree and rewrites the manifest name.
    pub fn materialize(&self) -> Result<()> {
        let template_dir = self.templates_root.join(self.request.template.dir_name());
        if !template_dir.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: template_dir.display().to_string(),
            });
        }

        let destination = ensure_destination(&self.request.destination)?;
        copy_tree(&template_dir, &destination)?;
        rewrite_manifest_name(&destination, &self.request.project_name)
    }

    /// Runs `<pm> install` in the destination with inherited streams, so
    /// the user sees live install output.
    pub fn install(&self) -> Result<()> {
        let binary = self.package_manager.binary();
        let status = Command::new(binary)
            .arg("install")
            .current_dir(&self.request.destination)
            .status()?;

        if !status.success() {
            return Err(Error::CommandFailedError {
                command: format!("{binary} install"),
                status,
            });
        }
        Ok(())
    }

    /// Initializes the repository and creates the single initial commit.
    pub fn init_repository(&self) -> Result<()> {
        git::init_and_commit(&self.request.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_template(root: &Path, dir_name: &str) {
        let template = root.join(dir_name);
        fs::create_dir_all(template.join("src")).unwrap();
        fs::write(
            template.join("package.json"),
            format!(r#"{{"name":"{dir_name}","version":"1.0.0"}}"#),
        )
        .unwrap();
        fs::write(template.join("src/index.ts"), format!("// {dir_name}\n")).unwrap();
    }

    fn scaffolder_for(tmp: &Path, project_name: &str, template: TemplateKind) -> Scaffolder {
        let templates_root = tmp.join("templates");
        fixture_template(&templates_root, "mongodb-main");
        fixture_template(&templates_root, "mongodb-auth");
        let request = ScaffoldRequest::new(project_name, template, tmp.join("work"));
        Scaffolder::new(request, PackageManager::Npm, templates_root)
    }

    #[test]
    fn destination_is_base_dir_joined_with_project_name() {
        let request = ScaffoldRequest::new("my-api", TemplateKind::Main, "/work");
        assert_eq!(request.destination, PathBuf::from("/work/my-api"));
    }

    #[test]
    fn materialize_copies_selected_template_and_renames_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let scaffolder = scaffolder_for(tmp.path(), "my-api", TemplateKind::Auth);

        scaffolder.materialize().unwrap();

        let dest = tmp.path().join("work/my-api");
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "my-api");
        assert_eq!(manifest["version"], "1.0.0");
        // Auth tree only, never mixed with the default one.
        assert_eq!(
            fs::read_to_string(dest.join("src/index.ts")).unwrap(),
            "// mongodb-auth\n"
        );
    }

    #[test]
    fn materialize_fails_on_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let scaffolder = scaffolder_for(tmp.path(), "taken", TemplateKind::Main);
        fs::create_dir_all(tmp.path().join("work/taken")).unwrap();

        let err = scaffolder.materialize().unwrap_err();
        assert!(matches!(err, Error::DestinationExistsError { .. }));
    }

    #[test]
    fn materialize_fails_for_missing_template_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let request = ScaffoldRequest::new("my-api", TemplateKind::Main, tmp.path());
        let scaffolder =
            Scaffolder::new(request, PackageManager::Npm, tmp.path().join("no-templates"));

        let err = scaffolder.materialize().unwrap_err();
        assert!(matches!(err, Error::TemplateDoesNotExistsError { .. }));
    }
}
