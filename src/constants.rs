//! Constants used throughout create-tsex-app.

/// Directory name of the default template.
pub const MAIN_TEMPLATE_DIR: &str = "mongodb-main";

/// Directory name of the auth-enabled template.
pub const AUTH_TEMPLATE_DIR: &str = "mongodb-auth";

/// Name of the directory holding the template trees.
pub const TEMPLATES_ROOT_DIR: &str = "templates";

/// The manifest file rewritten after the template copy.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Indentation used when the manifest is written back.
pub const MANIFEST_INDENT: &[u8] = b"    ";

/// Message of the single commit created by the git step.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initialized project using Create TsEx App";

/// Committer identity used when none is configured on the host.
pub const FALLBACK_SIGNATURE_NAME: &str = "create-tsex-app";
pub const FALLBACK_SIGNATURE_EMAIL: &str = "create-tsex-app@localhost";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
