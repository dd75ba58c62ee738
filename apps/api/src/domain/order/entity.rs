use crate::domain::delivery::value_objects::Pincode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

/// Contact details submitted with an order. None of these affect eligibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub name: Option<String>,
    pub qty: u32,
    pub price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    /// Read a cart entry as sent by the storefront. `qty` falls back to
    /// `quantity` and then to 1; a missing or unusable price counts as 0.
    fn from_json(item: &Value) -> Option<Self> {
        let item = item.as_object()?;
        let qty = item
            .get("qty")
            .or_else(|| item.get("quantity"))
            .and_then(number_like)
            .filter(|q| *q >= 0.0)
            .map(|q| q.min(f64::from(u32::MAX)) as u32)
            .unwrap_or(1);
        let price = item
            .get("price")
            .and_then(number_like)
            .filter(|p| *p >= 0.0)
            .unwrap_or(0.0);
        Some(Self {
            name: item.get("name").and_then(Value::as_str).map(str::to_owned),
            qty,
            price,
        })
    }
}

/// An order as received at the HTTP boundary.
///
/// `pincode` is `None` unless the payload carried a JSON string in that field;
/// numbers, booleans and nulls are not coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRequest {
    pub pincode: Option<String>,
    pub customer: Customer,
    pub products: Vec<OrderLine>,
}

impl OrderRequest {
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::default();
        };
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            pincode: text("pincode"),
            customer: Customer {
                name: text("name"),
                email: text("email"),
                phone: text("phone"),
                address: text("address"),
                city: text("city"),
            },
            products: fields
                .get("products")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(OrderLine::from_json).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

/// An order that passed delivery validation. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlacedOrder {
    pub id: Uuid,
    #[ts(type = "string")]
    pub pincode: Pincode,
    pub status: OrderStatus,
    pub customer: Customer,
    pub products: Vec<OrderLine>,
    pub item_count: u32,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    pub fn new(pincode: Pincode, customer: Customer, products: Vec<OrderLine>) -> Self {
        let item_count = products.iter().fold(0u32, |acc, p| acc.saturating_add(p.qty));
        // Keep the total a finite JSON number even for absurd prices.
        let total = products
            .iter()
            .map(OrderLine::line_total)
            .sum::<f64>()
            .min(f64::MAX);
        Self {
            id: Uuid::now_v7(),
            pincode,
            status: OrderStatus::Pending,
            customer,
            products,
            item_count,
            total,
            placed_at: Utc::now(),
        }
    }
}

fn number_like(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}
