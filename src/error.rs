use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: destination directory '{destination}' already exists.")]
    DestinationExistsError { destination: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Failed to parse '{manifest}'. Original error: {source}")]
    ManifestParseError { manifest: String, source: serde_json::Error },

    #[error("'{manifest}' does not contain a JSON object at the top level.")]
    ManifestFormatError { manifest: String },

    /// When a spawned command has run but exited with a non-zero status.
    #[error("'{command}' failed with status: {status}")]
    CommandFailedError { command: String, status: ExitStatus },

    #[error("Failed to initialize repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),
}

/// Convenience type alias for Results with this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
