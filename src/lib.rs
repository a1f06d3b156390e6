//! Allocates promotional cards and loyalty points across a batch of orders.
//!
//! The optimizer is a single greedy pass: orders are ranked by their
//! best-case discount, then each one is paid with the best option available
//! against the capacity that is left. Every order is paid in full and no
//! payment method is charged beyond its limit.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::optimizer::{PaymentOptimizer, optimize_payments};
pub use domain::ledger::TotalsLedger;
pub use domain::money::Money;
pub use domain::order::Order;
pub use domain::payment_method::{POINTS_METHOD_ID, PaymentMethod};
pub use error::{OptimizerError, Result};
