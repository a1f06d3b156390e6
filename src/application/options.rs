use super::ranking::PARTIAL_POINTS_RATE;
use crate::domain::ledger::Ledger;
use crate::domain::money::Money;
use crate::domain::option::PaymentOption;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::registry::MethodRegistry;

/// A strategy that proposes ways to pay one order against the current ledger.
///
/// Generators only read the ledger; running one twice on the same snapshot
/// yields the same candidates.
pub trait OptionGenerator {
    fn generate(
        &self,
        order: &Order,
        registry: &MethodRegistry,
        ledger: &Ledger,
        options: &mut Vec<PaymentOption>,
    );
}

/// Pays the whole order with one promotional card at that card's rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullCardPayment;

impl OptionGenerator for FullCardPayment {
    fn generate(
        &self,
        order: &Order,
        registry: &MethodRegistry,
        ledger: &Ledger,
        options: &mut Vec<PaymentOption>,
    ) {
        for card in order
            .promotions
            .iter()
            .filter_map(|id| registry.promotional_card(id))
        {
            let discount = order.value.share(card.discount_rate());
            let to_pay = order.value - discount;
            if ledger.remaining(&card.id) >= to_pay {
                options.push(PaymentOption::card_only(&card.id, discount, to_pay));
            }
        }
    }
}

/// Pays the whole order with points at the points method's rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullPointsPayment;

impl OptionGenerator for FullPointsPayment {
    fn generate(
        &self,
        order: &Order,
        registry: &MethodRegistry,
        ledger: &Ledger,
        options: &mut Vec<PaymentOption>,
    ) {
        let Some(points) = registry.points() else {
            return;
        };
        let discount = order.value.share(points.discount_rate());
        let to_pay = order.value - discount;
        if ledger.remaining(&points.id) >= to_pay {
            options.push(PaymentOption::points_only(discount, to_pay));
        }
    }
}

/// Pays at least 10% of the order with points for a flat 10% discount,
/// settling any remainder with a single card.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialPointsPayment;

impl PartialPointsPayment {
    /// Picks the card for the remainder: the non-promotional card with the
    /// smallest sufficient limit, otherwise the promotional card with the
    /// lowest discount (then smallest limit).
    fn remainder_card<'a>(
        order: &Order,
        registry: &'a MethodRegistry,
        ledger: &Ledger,
        remainder: Money,
    ) -> Option<&'a PaymentMethod> {
        let (promotional, regular): (Vec<&PaymentMethod>, Vec<&PaymentMethod>) = registry
            .cards()
            .filter(|card| ledger.remaining(&card.id) >= remainder)
            .partition(|card| order.has_promotion(&card.id));

        regular
            .into_iter()
            .min_by_key(|card| ledger.remaining(&card.id))
            .or_else(|| {
                promotional
                    .into_iter()
                    .min_by_key(|card| (card.discount, ledger.remaining(&card.id)))
            })
    }
}

impl OptionGenerator for PartialPointsPayment {
    fn generate(
        &self,
        order: &Order,
        registry: &MethodRegistry,
        ledger: &Ledger,
        options: &mut Vec<PaymentOption>,
    ) {
        let Some(points) = registry.points() else {
            return;
        };
        let available = ledger.remaining(&points.id);
        if available < order.value.share(PARTIAL_POINTS_RATE) {
            return;
        }

        let discount = order.value.share(PARTIAL_POINTS_RATE);
        let discounted = order.value - discount;
        let spend = available.min(discounted);
        let remainder = discounted - spend;

        if remainder.is_zero() {
            options.push(PaymentOption::points_only(discount, spend));
            return;
        }

        if let Some(card) = Self::remainder_card(order, registry, ledger, remainder) {
            options.push(PaymentOption::points_and_card(
                discount, spend, &card.id, remainder,
            ));
        }
    }
}

/// Pays the full order value with any card, without discount.
///
/// Cards are offered by ascending discount, then registry order, so the
/// undiscounted fallback lands on the least valuable card and leaves
/// promotional capacity for later orders.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainCardPayment;

impl OptionGenerator for PlainCardPayment {
    fn generate(
        &self,
        order: &Order,
        registry: &MethodRegistry,
        ledger: &Ledger,
        options: &mut Vec<PaymentOption>,
    ) {
        let mut cards: Vec<&PaymentMethod> = registry
            .cards()
            .filter(|card| ledger.remaining(&card.id) >= order.value)
            .collect();
        cards.sort_by_key(|card| card.discount);

        options.extend(
            cards
                .into_iter()
                .map(|card| PaymentOption::card_only(&card.id, Money::ZERO, order.value)),
        );
    }
}

/// Every candidate for `order`, in generation order: promotional cards,
/// full points, partial points, then plain cards.
pub fn generate_options(
    order: &Order,
    registry: &MethodRegistry,
    ledger: &Ledger,
) -> Vec<PaymentOption> {
    let generators: [&dyn OptionGenerator; 4] = [
        &FullCardPayment,
        &FullPointsPayment,
        &PartialPointsPayment,
        &PlainCardPayment,
    ];

    let mut options = Vec::new();
    for generator in generators {
        generator.generate(order, registry, ledger, &mut options);
    }
    options
}
