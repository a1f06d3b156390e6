use payment_optimizer::application::options::generate_options;
use payment_optimizer::application::selection::select_option;
use payment_optimizer::domain::ledger::{Ledger, TotalsLedger};
use payment_optimizer::domain::registry::MethodRegistry;
use payment_optimizer::{Money, OptimizerError, Order, PaymentMethod, optimize_payments};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashMap;

const CARD_IDS: [&str; 4] = ["mZysk", "BosBankrut", "CARD_A", "CARD_B"];

fn random_money(rng: &mut StdRng, max_cents: i64) -> Decimal {
    Decimal::new(rng.gen_range(0..=max_cents), 2)
}

fn random_batch(rng: &mut StdRng) -> (Vec<Order>, Vec<PaymentMethod>) {
    let mut methods: Vec<PaymentMethod> = CARD_IDS
        .iter()
        .map(|id| {
            PaymentMethod::new(*id, rng.gen_range(0..=30), random_money(rng, 50_000)).unwrap()
        })
        .collect();
    if rng.gen_bool(0.8) {
        methods.push(
            PaymentMethod::new("PUNKTY", rng.gen_range(0..=30), random_money(rng, 30_000))
                .unwrap(),
        );
    }

    let orders = (0..rng.gen_range(1..=8))
        .map(|i| {
            let promotions = CARD_IDS
                .iter()
                .filter(|_| rng.gen_bool(0.3))
                .map(|id| id.to_string())
                .collect();
            Order::new(format!("ORDER{i}"), random_money(rng, 20_000), promotions).unwrap()
        })
        .collect();

    (orders, methods)
}

#[test]
fn test_totals_never_exceed_limits() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut paid_batches = 0;

    for _ in 0..500 {
        let (orders, methods) = random_batch(&mut rng);
        let limits: HashMap<&str, Money> =
            methods.iter().map(|m| (m.id.as_str(), m.limit)).collect();

        match optimize_payments(&orders, &methods) {
            Ok(totals) => {
                paid_batches += 1;
                for (method_id, total) in totals.iter() {
                    assert!(total <= limits[method_id], "{method_id} overdrawn");
                    assert!(!total.is_negative());
                    assert_eq!(total.value().scale(), 2);
                }
            }
            Err(OptimizerError::UnpayableOrder { order_id }) => {
                assert!(orders.iter().any(|o| o.id == order_id));
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(paid_batches > 0, "at least some batches should be payable");
}

#[test]
fn test_selected_option_pays_order_exactly() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let (orders, methods) = random_batch(&mut rng);
        let registry = MethodRegistry::new(&methods);
        let mut ledger = Ledger::seed(&registry);
        let mut totals = TotalsLedger::new();

        for order in &orders {
            let options = generate_options(order, &registry, &ledger);
            assert_eq!(options, generate_options(order, &registry, &ledger));

            let Ok(selected) = select_option(order, options) else {
                break;
            };
            assert_eq!(selected.charged_total() + selected.discount, order.value);
            assert!(selected.charges.len() <= 2);
            for charge in &selected.charges {
                assert_eq!(charge.amount.value().scale(), 2);
            }
            ledger.apply(&selected, &mut totals).unwrap();
        }
    }
}

#[test]
fn test_selected_option_is_never_beaten() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..300 {
        let (orders, methods) = random_batch(&mut rng);
        let registry = MethodRegistry::new(&methods);
        let ledger = Ledger::seed(&registry);

        for order in &orders {
            let options = generate_options(order, &registry, &ledger);
            let Ok(selected) = select_option(order, options.clone()) else {
                continue;
            };
            for option in &options {
                assert!(
                    (option.discount, option.points_used)
                        <= (selected.discount, selected.points_used)
                );
            }
        }
    }
}
