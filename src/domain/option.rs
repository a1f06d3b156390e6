use super::money::Money;
use super::payment_method::POINTS_METHOD_ID;

/// An amount to charge to one payment method.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Charge {
    pub method_id: String,
    pub amount: Money,
}

impl Charge {
    pub fn new(method_id: impl Into<String>, amount: Money) -> Self {
        Self {
            method_id: method_id.into(),
            amount,
        }
    }
}

/// One complete proposal to pay a single order.
///
/// Holds at most one card charge, optionally alongside a points charge.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaymentOption {
    pub discount: Money,
    pub points_used: Money,
    pub charges: Vec<Charge>,
}

impl PaymentOption {
    pub fn card_only(card_id: &str, discount: Money, amount: Money) -> Self {
        Self {
            discount,
            points_used: Money::ZERO,
            charges: vec![Charge::new(card_id, amount)],
        }
    }

    pub fn points_only(discount: Money, points: Money) -> Self {
        Self {
            discount,
            points_used: points,
            charges: vec![Charge::new(POINTS_METHOD_ID, points)],
        }
    }

    pub fn points_and_card(discount: Money, points: Money, card_id: &str, remainder: Money) -> Self {
        Self {
            discount,
            points_used: points,
            charges: vec![
                Charge::new(POINTS_METHOD_ID, points),
                Charge::new(card_id, remainder),
            ],
        }
    }

    /// Sum of all charges; together with the discount this equals the order value.
    pub fn charged_total(&self) -> Money {
        self.charges
            .iter()
            .fold(Money::ZERO, |total, charge| total + charge.amount)
    }
}
