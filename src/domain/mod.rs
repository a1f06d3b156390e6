//! Domain layer: monetary values, orders, payment methods and the ledgers
//! that track capacity and charged totals during a run.

pub mod ledger;
pub mod money;
pub mod option;
pub mod order;
pub mod payment_method;
pub mod registry;
