#![allow(dead_code)]

use payment_optimizer::{Order, PaymentMethod};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

pub fn order(id: &str, value: &str, promotions: &[&str]) -> Order {
    Order::new(
        id,
        Decimal::from_str(value).unwrap(),
        promotions.iter().map(|p| p.to_string()).collect(),
    )
    .unwrap()
}

pub fn method(id: &str, discount: u8, limit: &str) -> PaymentMethod {
    PaymentMethod::new(id, discount, Decimal::from_str(limit).unwrap()).unwrap()
}

/// Writes `contents` to a fresh temporary `.json` file.
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Writes `count` orders of value 1.00 without promotions.
pub fn generate_orders(path: &Path, count: usize) -> Result<(), Error> {
    let orders: Vec<serde_json::Value> = (1..=count)
        .map(|i| serde_json::json!({ "id": format!("ORDER{i}"), "value": "1.00" }))
        .collect();
    let file = File::create(path)?;
    serde_json::to_writer(file, &orders)?;
    Ok(())
}

pub const SAMPLE_ORDERS: &str = r#"[
    {"id": "ORDER1", "value": "100.00", "promotions": ["mZysk"]},
    {"id": "ORDER2", "value": "200.00", "promotions": ["BosBankrut"]},
    {"id": "ORDER3", "value": "150.00", "promotions": ["mZysk", "BosBankrut"]},
    {"id": "ORDER4", "value": "50.00"}
]"#;

pub const SAMPLE_METHODS: &str = r#"[
    {"id": "PUNKTY", "discount": 15, "limit": "100.00"},
    {"id": "mZysk", "discount": 10, "limit": "180.00"},
    {"id": "BosBankrut", "discount": 5, "limit": "200.00"}
]"#;
