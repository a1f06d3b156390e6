use crate::domain::option::PaymentOption;
use crate::domain::order::Order;
use crate::error::{OptimizerError, Result};

/// Picks the option with the largest discount, preferring more points on a
/// tie. Remaining ties go to the earliest generated option.
pub fn select_option(order: &Order, options: Vec<PaymentOption>) -> Result<PaymentOption> {
    options
        .into_iter()
        .reduce(|best, candidate| {
            if (candidate.discount, candidate.points_used) > (best.discount, best.points_used) {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| OptimizerError::UnpayableOrder {
            order_id: order.id.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::new("ORDER1", dec!(100), vec![]).unwrap()
    }

    #[test]
    fn test_empty_options_is_unpayable() {
        let result = select_option(&order(), vec![]);
        assert!(matches!(
            result,
            Err(OptimizerError::UnpayableOrder { ref order_id }) if order_id == "ORDER1"
        ));
    }

    #[test]
    fn test_highest_discount_wins() {
        let best = select_option(
            &order(),
            vec![
                PaymentOption::points_only(Money::new(dec!(10)), Money::new(dec!(90))),
                PaymentOption::card_only("CARD_C", Money::new(dec!(12)), Money::new(dec!(88))),
                PaymentOption::card_only("CARD_X", Money::ZERO, Money::new(dec!(100))),
            ],
        )
        .unwrap();
        assert_eq!(best.charges[0].method_id, "CARD_C");
    }

    #[test]
    fn test_equal_discount_prefers_more_points() {
        let best = select_option(
            &order(),
            vec![
                PaymentOption::card_only("CARD_A", Money::new(dec!(10)), Money::new(dec!(90))),
                PaymentOption::points_and_card(
                    Money::new(dec!(10)),
                    Money::new(dec!(40)),
                    "CARD_B",
                    Money::new(dec!(50)),
                ),
                PaymentOption::points_only(Money::new(dec!(10)), Money::new(dec!(90))),
            ],
        )
        .unwrap();
        assert_eq!(best.points_used, Money::new(dec!(90)));
    }

    #[test]
    fn test_full_tie_keeps_first_generated() {
        let best = select_option(
            &order(),
            vec![
                PaymentOption::card_only("FIRST", Money::ZERO, Money::new(dec!(100))),
                PaymentOption::card_only("SECOND", Money::ZERO, Money::new(dec!(100))),
            ],
        )
        .unwrap();
        assert_eq!(best.charges[0].method_id, "FIRST");
    }
}
