use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::error::{OptimizerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::Read;

/// An order as it appears in the input file. Every field may be absent;
/// conversion into [`Order`] rejects missing identifiers and values.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub id: Option<String>,
    pub value: Option<Decimal>,
    pub promotions: Option<Vec<String>>,
}

/// A payment method as it appears in the input file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentMethodRecord {
    pub id: Option<String>,
    pub discount: Option<i64>,
    pub limit: Option<Decimal>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = OptimizerError;

    fn try_from(record: OrderRecord) -> Result<Self> {
        let id = record
            .id
            .ok_or_else(|| OptimizerError::InvalidInput("order is missing `id`".to_string()))?;
        let value = record.value.ok_or_else(|| {
            OptimizerError::InvalidInput(format!("order {id} is missing `value`"))
        })?;
        Order::new(id, value, record.promotions.unwrap_or_default())
    }
}

impl TryFrom<PaymentMethodRecord> for PaymentMethod {
    type Error = OptimizerError;

    fn try_from(record: PaymentMethodRecord) -> Result<Self> {
        let id = record.id.ok_or_else(|| {
            OptimizerError::InvalidInput("payment method is missing `id`".to_string())
        })?;
        let discount = record.discount.ok_or_else(|| {
            OptimizerError::InvalidInput(format!("payment method {id} is missing `discount`"))
        })?;
        let discount = u8::try_from(discount).map_err(|_| {
            OptimizerError::InvalidInput(format!(
                "payment method {id} has discount {discount}%, expected 0-100"
            ))
        })?;
        let limit = record.limit.ok_or_else(|| {
            OptimizerError::InvalidInput(format!("payment method {id} is missing `limit`"))
        })?;
        PaymentMethod::new(id, discount, limit)
    }
}

/// Reads orders and payment methods from a JSON array source.
///
/// Unknown fields are ignored and decimals may be given as numbers or strings.
pub struct InputReader<R: Read> {
    source: R,
}

impl<R: Read> InputReader<R> {
    /// Creates a new `InputReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn orders(self) -> Result<Vec<Order>> {
        self.records::<OrderRecord>()?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }

    pub fn payment_methods(self) -> Result<Vec<PaymentMethod>> {
        self.records::<PaymentMethodRecord>()?
            .into_iter()
            .map(PaymentMethod::try_from)
            .collect()
    }

    fn records<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
