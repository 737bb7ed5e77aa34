use colored::Colorize;

use crate::pm::PackageManager;
use crate::scaffold::ScaffoldRequest;

/// The scripts shipped by every template, with their descriptions.
const SCRIPTS: &[(&str, &str)] = &[
    ("clean", "Deletes the build destination folder"),
    ("dev", "Starts the development server"),
    ("dev:test", "Runs development tests"),
    ("test", "Runs tests. for ci mode only"),
    ("test:watch", "Runs development tests in watch mode"),
    ("start", "Starts the production server"),
    ("build", "Compiles the typescript api into javascript for production"),
];

fn script_invocation(package_manager: PackageManager, script: &str) -> String {
    format!("{package_manager} {script}")
}

/// Prints the post-scaffold summary.
///
/// Runs only after the whole pipeline succeeded; pure formatting over
/// fixed strings, no failure mode.
pub fn print_summary(request: &ScaffoldRequest, package_manager: PackageManager) {
    println!(
        "{}",
        format!(
            "Success! Created {} at {}",
            request.project_name,
            request.destination.display()
        )
        .green()
    );
    println!("Inside that directory, you can run several commands:");
    println!();
    for (script, description) in SCRIPTS {
        println!(" {}", script_invocation(package_manager, script).cyan());
        println!("   {description}");
        println!();
    }
    println!("To start the development server:");
    println!();
    println!("   Type {} {}", "cd".cyan(), request.project_name);
    println!();
    println!("   Create .env and test.env files in the config folder");
    println!("   and add the properties you see in the .example.env");
    println!("   and test.example.env files respectively");
    println!();
    println!("   Type {}", script_invocation(package_manager, "dev").cyan());
    println!();
    println!("Happy hacking!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_examples_use_the_detected_manager() {
        assert_eq!(script_invocation(PackageManager::Npm, "dev"), "npm dev");
        assert_eq!(script_invocation(PackageManager::Yarn, "test:watch"), "yarn test:watch");
    }

    #[test]
    fn catalog_lists_every_shipped_script_once() {
        let names: Vec<&str> = SCRIPTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["clean", "dev", "dev:test", "test", "test:watch", "start", "build"]
        );
    }
}
