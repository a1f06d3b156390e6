use super::money::Money;
use crate::error::{OptimizerError, Result};
use rust_decimal::Decimal;

/// A single order to be paid in full.
///
/// `promotions` lists the payment methods entitled to a card-specific
/// discount on this order, in the order they were given.
#[derive(Debug, PartialEq, Clone)]
pub struct Order {
    pub id: String,
    pub value: Money,
    pub promotions: Vec<String>,
}

impl Order {
    pub fn new(id: impl Into<String>, value: Decimal, promotions: Vec<String>) -> Result<Self> {
        let id = id.into();
        let value = Money::exact(value).ok_or_else(|| {
            OptimizerError::InvalidInput(format!(
                "order {id} value {value} has more than 2 fractional digits"
            ))
        })?;
        if value.is_negative() {
            return Err(OptimizerError::InvalidInput(format!(
                "order {id} has a negative value {value}"
            )));
        }
        Ok(Self {
            id,
            value,
            promotions,
        })
    }

    pub fn has_promotion(&self, method_id: &str) -> bool {
        self.promotions.iter().any(|p| p == method_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_value_is_normalised() {
        let order = Order::new("ORDER1", dec!(99.9), vec![]).unwrap();
        assert_eq!(order.value.to_string(), "99.90");
    }

    #[test]
    fn test_order_rejects_sub_cent_value() {
        let result = Order::new("ORDER1", dec!(99.999), vec![]);
        assert!(matches!(
            result,
            Err(OptimizerError::InvalidInput(ref msg)) if msg.contains("ORDER1")
        ));
    }

    #[test]
    fn test_order_rejects_negative_value() {
        assert!(matches!(
            Order::new("ORDER1", dec!(-1.00), vec![]),
            Err(OptimizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_has_promotion_is_case_sensitive() {
        let order = Order::new("ORDER1", dec!(10), vec!["mZysk".to_string()]).unwrap();
        assert!(order.has_promotion("mZysk"));
        assert!(!order.has_promotion("MZYSK"));
    }
}
