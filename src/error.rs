use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("No possible payment option found for order {order_id}. All orders must be fully paid.")]
    UnpayableOrder { order_id: String },
    #[error(
        "Ledger inconsistency for payment method {method_id}: charge {requested} exceeds remaining {remaining}"
    )]
    LedgerInconsistency {
        method_id: String,
        requested: Money,
        remaining: Money,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Nothing to process: {0}")]
    EmptyInput(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
