//! Application layer containing the allocation algorithm.
//!
//! Orders are ranked once against the original limits (`ranking`), then each
//! order gets its candidates generated (`options`), the best one picked
//! (`selection`) and committed to the ledger. `optimizer` wires the steps
//! together in a single sequential pass.

pub mod optimizer;
pub mod options;
pub mod ranking;
pub mod selection;
