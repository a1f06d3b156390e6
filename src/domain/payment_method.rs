use super::money::{Money, percent_rate};
use crate::error::{OptimizerError, Result};
use rust_decimal::Decimal;

/// Identifier reserved for the loyalty-points method.
pub const POINTS_METHOD_ID: &str = "PUNKTY";

/// A payment method with a discount percent and a limit shared by the whole batch.
///
/// There are exactly two kinds: the points method (identified by
/// [`POINTS_METHOD_ID`]) and cards (everything else).
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentMethod {
    pub id: String,
    pub discount: u8,
    pub limit: Money,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, discount: u8, limit: Decimal) -> Result<Self> {
        let id = id.into();
        if discount > 100 {
            return Err(OptimizerError::InvalidInput(format!(
                "payment method {id} has discount {discount}%, expected 0-100"
            )));
        }
        let limit = Money::exact(limit).ok_or_else(|| {
            OptimizerError::InvalidInput(format!(
                "payment method {id} limit {limit} has more than 2 fractional digits"
            ))
        })?;
        if limit.is_negative() {
            return Err(OptimizerError::InvalidInput(format!(
                "payment method {id} has a negative limit {limit}"
            )));
        }
        Ok(Self {
            id,
            discount,
            limit,
        })
    }

    pub fn is_points(&self) -> bool {
        self.id == POINTS_METHOD_ID
    }

    pub fn is_card(&self) -> bool {
        !self.is_points()
    }

    /// Discount as a rate, e.g. `0.10` for 10%.
    pub fn discount_rate(&self) -> Decimal {
        percent_rate(self.discount)
    }
}
