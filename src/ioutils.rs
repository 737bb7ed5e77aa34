use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Ensures the destination directory does not exist yet.
///
/// Re-running against an existing destination must fail deterministically
/// instead of merging into it.
pub fn ensure_destination<P: AsRef<Path>>(destination: P) -> Result<PathBuf> {
    let destination = destination.as_ref();
    if destination.exists() {
        return Err(Error::DestinationExistsError {
            destination: destination.display().to_string(),
        });
    }
    Ok(destination.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Recursively copies the template tree into the destination, verbatim.
pub fn copy_tree<P: AsRef<Path>>(source: P, destination: P) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: source.display().to_string(),
        });
    }

    for dir_entry in WalkDir::new(source) {
        let dir_entry = dir_entry.map_err(std::io::Error::from)?;
        let entry_path = dir_entry.path();
        let relative = entry_path.strip_prefix(source).map_err(|e| {
            Error::IoError(std::io::Error::other(format!(
                "entry '{}' escapes template root: {e}",
                entry_path.display()
            )))
        })?;
        let target = destination.join(relative);

        if dir_entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            std::fs::copy(entry_path, &target).map_err(Error::IoError)?;
        }
    }

    Ok(())
}
