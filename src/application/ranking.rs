use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::registry::MethodRegistry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Share of the order value that unlocks the partial-points discount, and
/// the flat discount it grants.
pub const PARTIAL_POINTS_RATE: Decimal = dec!(0.10);

/// Best-case discount for an order against the original method limits.
///
/// Candidates are full payment with points, full payment with each
/// promotional card, and partial payment with points. A candidate only
/// counts when the original limit covers it. Used solely to decide the
/// processing order; the ledger is never consulted.
pub fn theoretical_discount(order: &Order, registry: &MethodRegistry) -> Money {
    let value = order.value.value();
    let mut best = Decimal::ZERO;

    if let Some(points) = registry.points() {
        let discount = value * points.discount_rate();
        if points.limit.value() >= value - discount {
            best = best.max(discount);
        }
    }

    for card in order
        .promotions
        .iter()
        .filter_map(|id| registry.promotional_card(id))
    {
        let discount = value * card.discount_rate();
        if card.limit.value() >= value - discount {
            best = best.max(discount);
        }
    }

    if let Some(points) = registry.points()
        && points.limit.value() >= value * PARTIAL_POINTS_RATE
    {
        best = best.max(value * PARTIAL_POINTS_RATE);
    }

    Money::new(best)
}

/// Orders sorted by descending theoretical discount; equal scores keep
/// their input order.
pub fn rank_orders<'a>(orders: &'a [Order], registry: &MethodRegistry) -> Vec<&'a Order> {
    let mut scored: Vec<(Money, &Order)> = orders
        .iter()
        .map(|order| (theoretical_discount(order, registry), order))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    scored
        .into_iter()
        .map(|(score, order)| {
            debug!(order = %order.id, %score, "ranked order");
            order
        })
        .collect()
}
