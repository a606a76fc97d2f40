//! Validate command implementation
//!
//! Checks run parameters without sampling anything.

use std::process::ExitCode;

use anyhow::Result;
use cellcube_spec::validate_params;
use colored::Colorize;

use super::json_output::{
    error_codes, print_json, validation_error_to_json, validation_warning_to_json, JsonError,
    ValidateOutput,
};
use super::reporting;
use crate::input::{load_run_params, ParamOverrides};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config: Option<&str>, overrides: &ParamOverrides, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config, overrides)
    } else {
        run_human(config, overrides)
    }
}

fn run_human(config: Option<&str>, overrides: &ParamOverrides) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        config.unwrap_or("command-line parameters")
    );

    let params = load_run_params(config, overrides)?.params;
    let validation = validate_params(&params);

    reporting::print_validation_errors(&validation);
    reporting::print_validation_warnings(&validation);

    if validation.is_ok() {
        println!("\n{} Parameters are valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Parameter validation failed with {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(config: Option<&str>, overrides: &ParamOverrides) -> Result<ExitCode> {
    let params = match load_run_params(config, overrides) {
        Ok(loaded) => loaded.params,
        Err(e) => {
            print_json(&ValidateOutput {
                success: false,
                errors: vec![JsonError::new(error_codes::CONFIG, format!("{:#}", e))],
                warnings: Vec::new(),
                params: None,
            })?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_params(&params);
    let success = validation.is_ok();
    print_json(&ValidateOutput {
        success,
        errors: validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect(),
        warnings: validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        params: Some(params),
    })?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_flags() {
        let overrides = ParamOverrides {
            noise: Some("transparent".into()),
            ..Default::default()
        };
        assert_eq!(run(None, &overrides, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(None, &overrides, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_source_is_invalid() {
        let overrides = ParamOverrides::default();
        assert_eq!(run(None, &overrides, false).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_unreadable_config() {
        let overrides = ParamOverrides::default();
        assert!(run(Some("/nonexistent/atlas.json"), &overrides, false).is_err());
        assert_eq!(
            run(Some("/nonexistent/atlas.json"), &overrides, true).unwrap(),
            ExitCode::from(1)
        );
    }
}
