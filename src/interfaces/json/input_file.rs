use super::input_reader::InputReader;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::error::{OptimizerError, Result};
use std::fs::File;
use std::path::Path;

/// Checks that `path` names a readable, regular `.json` file.
///
/// `description` names the file in error messages, e.g. "Orders".
pub fn validate_input_file(path: &Path, description: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(OptimizerError::InvalidArgument(format!(
            "{description} file path cannot be empty"
        )));
    }
    if !path.exists() {
        return Err(OptimizerError::InvalidArgument(format!(
            "{description} file not found at: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(OptimizerError::InvalidArgument(format!(
            "{description} path does not point to a regular file: {}",
            path.display()
        )));
    }
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(OptimizerError::InvalidArgument(format!(
            "{description} file must have a .json extension: {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn read_orders(path: &Path) -> Result<Vec<Order>> {
    validate_input_file(path, "Orders")?;
    InputReader::new(File::open(path)?).orders()
}

pub fn read_payment_methods(path: &Path) -> Result<Vec<PaymentMethod>> {
    validate_input_file(path, "Payment methods")?;
    InputReader::new(File::open(path)?).payment_methods()
}
