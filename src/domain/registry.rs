use super::payment_method::{POINTS_METHOD_ID, PaymentMethod};
use std::collections::HashMap;
use tracing::warn;

/// Identifier-keyed lookup of payment methods that keeps input order.
///
/// A repeated identifier replaces the earlier definition in its original
/// position (last write wins).
#[derive(Debug, Default, Clone)]
pub struct MethodRegistry {
    methods: Vec<PaymentMethod>,
    index: HashMap<String, usize>,
}

impl MethodRegistry {
    pub fn new(methods: &[PaymentMethod]) -> Self {
        let mut registry = Self::default();
        for method in methods {
            registry.insert(method.clone());
        }
        registry
    }

    pub fn insert(&mut self, method: PaymentMethod) {
        match self.index.get(&method.id) {
            Some(&position) => {
                warn!(method = %method.id, "duplicate payment method, keeping the last definition");
                self.methods[position] = method;
            }
            None => {
                self.index.insert(method.id.clone(), self.methods.len());
                self.methods.push(method);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.index.get(id).map(|&position| &self.methods[position])
    }

    pub fn points(&self) -> Option<&PaymentMethod> {
        self.get(POINTS_METHOD_ID)
    }

    /// The card behind a promotion identifier, if it names a known non-points method.
    pub fn promotional_card(&self, id: &str) -> Option<&PaymentMethod> {
        self.get(id).filter(|method| method.is_card())
    }

    /// All cards in registry order.
    pub fn cards(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter().filter(|method| method.is_card())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
