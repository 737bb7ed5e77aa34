use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use crate::constants::verbosity;

/// CLI arguments for create-tsex-app.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-tsex-app", author, version, about, long_about = None)]
pub struct Args {
    /// Name of the directory to create the project in.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Use the auth-enabled template.
    #[arg(short = 'a', long = "auth")]
    pub auth: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Prints the usage block shown when the project name is omitted.
///
/// An informational exit, not a failure: nothing has been created and no
/// subprocess has run.
pub fn print_missing_project_name_usage() {
    eprintln!("{}", "Please specify the project name:".red());
    println!("  {} {}", "create-tsex-app".cyan(), "[project-name]".green());
    println!();
    println!("For example:");
    println!("  {} {}", "create-tsex-app".cyan(), "my-express-api".green());
    println!();
    println!("Run {} --help to see all options.", "create-tsex-app".cyan());
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
