//! Human-readable validation output shared by commands.

use cellcube_spec::ValidationResult;
use colored::Colorize;

pub(super) fn print_validation_errors(result: &ValidationResult) {
    if result.errors.is_empty() {
        return;
    }
    println!("\n{}", "Validation Errors:".red().bold());
    for error in &result.errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

pub(super) fn print_validation_warnings(result: &ValidationResult) {
    if result.warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in &result.warnings {
        println!(
            "  {} [{}]: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            warning.message
        );
    }
}
