use super::money::Money;
use super::option::PaymentOption;
use super::registry::MethodRegistry;
use crate::error::{OptimizerError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Remaining capacity per payment method for one optimization run.
///
/// Seeded from each method's limit and only ever drained, through
/// [`Ledger::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    remaining: HashMap<String, Money>,
}

impl Ledger {
    pub fn seed(registry: &MethodRegistry) -> Self {
        Self {
            remaining: registry
                .iter()
                .map(|method| (method.id.clone(), method.limit))
                .collect(),
        }
    }

    /// Remaining capacity, zero for unknown methods.
    pub fn remaining(&self, method_id: &str) -> Money {
        self.remaining
            .get(method_id)
            .copied()
            .unwrap_or(Money::ZERO)
    }

    /// Commits a selected option: drains every charged method and adds the
    /// charges to `totals`.
    ///
    /// All charges are checked before anything is drained, so a failing
    /// commit leaves both ledgers untouched. Zero charges drain nothing and
    /// are not recorded in the totals.
    pub fn apply(&mut self, option: &PaymentOption, totals: &mut TotalsLedger) -> Result<()> {
        for charge in &option.charges {
            let remaining = self.remaining.get(&charge.method_id).copied();
            match remaining {
                Some(remaining) if remaining >= charge.amount => {}
                _ => {
                    return Err(OptimizerError::LedgerInconsistency {
                        method_id: charge.method_id.clone(),
                        requested: charge.amount,
                        remaining: remaining.unwrap_or(Money::ZERO),
                    });
                }
            }
        }

        for charge in option.charges.iter().filter(|c| !c.amount.is_zero()) {
            if let Some(remaining) = self.remaining.get_mut(&charge.method_id) {
                *remaining -= charge.amount;
            }
            totals.record(&charge.method_id, charge.amount);
        }
        Ok(())
    }
}

/// Cumulative amount charged per payment method, ordered by identifier.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TotalsLedger(BTreeMap<String, Money>);

impl TotalsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, method_id: &str, amount: Money) {
        *self.0.entry(method_id.to_string()).or_default() += amount;
    }

    pub fn get(&self, method_id: &str) -> Option<Money> {
        self.0.get(method_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(id, amount)| (id.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
