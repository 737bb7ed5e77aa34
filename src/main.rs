use create_tsex_app::{
    cli::{get_args, get_log_level_from_verbose, print_missing_project_name_usage, run},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = get_args();

    let level = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(level).init();

    // Omitting the project name is informational, not a failure.
    let Some(project_name) = args.project_name.clone() else {
        print_missing_project_name_usage();
        std::process::exit(exit_codes::SUCCESS);
    };

    if let Err(err) = run(project_name, args) {
        default_error_handler(err);
    }
}
