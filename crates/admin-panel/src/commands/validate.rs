//! Validate commands - Check a single value against the input rules.

use colored::Colorize;

use common::{AppError, AppResult};
use domain::{validate_dni, validate_password, ValidationResult};

use crate::cli::args::ValueArgs;

/// Execute the validate-dni command
pub fn execute_dni(args: ValueArgs) -> AppResult<()> {
    report(validate_dni(&args.value))
}

/// Execute the validate-password command
pub fn execute_password(args: ValueArgs) -> AppResult<()> {
    report(validate_password(&args.value))
}

fn report(result: ValidationResult) -> AppResult<()> {
    if result.is_valid {
        println!("{}", result.message.green());
        Ok(())
    } else {
        println!("{}", result.message.red());
        Err(AppError::validation(result.message))
    }
}
