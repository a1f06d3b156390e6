use super::options::generate_options;
use super::ranking::rank_orders;
use super::selection::select_option;
use crate::domain::ledger::{Ledger, TotalsLedger};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::registry::MethodRegistry;
use crate::error::Result;
use tracing::{debug, info};

/// Allocates payment methods across a batch of orders.
///
/// `PaymentOptimizer` ranks the orders by their best-case discount against
/// the original limits, then pays them one by one against a ledger that is
/// drained as it goes. Each call to [`PaymentOptimizer::optimize`] seeds its
/// own ledger, so runs never share state.
#[derive(Debug, Clone)]
pub struct PaymentOptimizer {
    registry: MethodRegistry,
}

impl PaymentOptimizer {
    /// Creates a new `PaymentOptimizer` for the given payment methods.
    ///
    /// A repeated identifier replaces the earlier definition.
    pub fn new(methods: &[PaymentMethod]) -> Self {
        Self {
            registry: MethodRegistry::new(methods),
        }
    }

    /// Pays every order and returns the total charged per method.
    ///
    /// The first order that cannot be paid aborts the run with
    /// [`OptimizerError::UnpayableOrder`](crate::error::OptimizerError::UnpayableOrder);
    /// no partial totals are returned.
    pub fn optimize(&self, orders: &[Order]) -> Result<TotalsLedger> {
        info!(
            orders = orders.len(),
            methods = self.registry.len(),
            "optimizing payments"
        );

        let mut ledger = Ledger::seed(&self.registry);
        let mut totals = TotalsLedger::new();

        for order in rank_orders(orders, &self.registry) {
            self.pay_order(order, &mut ledger, &mut totals)?;
        }

        info!(methods_charged = totals.len(), "all orders paid");
        Ok(totals)
    }

    fn pay_order(
        &self,
        order: &Order,
        ledger: &mut Ledger,
        totals: &mut TotalsLedger,
    ) -> Result<()> {
        let options = generate_options(order, &self.registry, ledger);
        debug!(order = %order.id, candidates = options.len(), "generated payment options");

        let selected = select_option(order, options)?;
        debug!(
            order = %order.id,
            discount = %selected.discount,
            points = %selected.points_used,
            "selected payment option"
        );

        ledger.apply(&selected, totals)
    }
}

/// Convenience wrapper running a single optimization.
pub fn optimize_payments(orders: &[Order], methods: &[PaymentMethod]) -> Result<TotalsLedger> {
    PaymentOptimizer::new(methods).optimize(orders)
}
