use crate::{
    cli::Args,
    error::Result,
    pipeline::run_steps,
    pm::PackageManager,
    report::print_summary,
    scaffold::{ScaffoldRequest, Scaffolder},
    template::{resolve_templates_root, TemplateKind},
};

/// Main CLI runner that orchestrates the whole scaffold workflow.
pub struct Runner {
    project_name: String,
    args: Args,
}

impl Runner {
    pub fn new(project_name: String, args: Args) -> Self {
        Self { project_name, args }
    }

    /// Resolves the request, detects the package manager, runs the
    /// pipeline and prints the summary.
    pub fn run(self) -> Result<()> {
        let template = TemplateKind::from_auth_flag(self.args.auth);
        let base_dir = std::env::current_dir()?;
        let request = ScaffoldRequest::new(&self.project_name, template, base_dir);

        let package_manager = PackageManager::detect();
        log::debug!("resolved package manager: {package_manager}");

        let templates_root = resolve_templates_root()?;
        log::debug!("templates root: {}", templates_root.display());

        let scaffolder = Scaffolder::new(request.clone(), package_manager, templates_root);
        run_steps(scaffolder.steps())?;

        print_summary(&request, package_manager);
        Ok(())
    }
}

/// Executes the complete scaffold workflow for a resolved project name.
pub fn run(project_name: String, args: Args) -> Result<()> {
    Runner::new(project_name, args).run()
}
