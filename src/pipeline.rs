use colored::Colorize;

use crate::error::Result;

/// A single titled unit of work in the scaffold pipeline.
pub struct Step<'a> {
    pub title: String,
    action: Box<dyn FnOnce() -> Result<()> + 'a>,
}

impl<'a> Step<'a> {
    pub fn new<T, F>(title: T, action: F) -> Self
    where
        T: Into<String>,
        F: FnOnce() -> Result<()> + 'a,
    {
        Self { title: title.into(), action: Box::new(action) }
    }

    fn run(self) -> Result<()> {
        (self.action)()
    }
}

/// Runs the steps strictly in order, stopping at the first failure.
///
/// Each title is printed before its action runs and checked off once it
/// succeeds. The failing step's error is returned as-is; later steps never
/// start.
pub fn run_steps(steps: Vec<Step<'_>>) -> Result<()> {
    let total = steps.len();
    for (position, step) in steps.into_iter().enumerate() {
        println!("{} [{}/{}] {}", "→".blue().bold(), position + 1, total, step.title);
        let title = step.title.clone();
        step.run()?;
        log::debug!("step '{title}' completed");
        println!("{} {}", "✔".green(), title);
    }
    Ok(())
}
