use crate::model::Product;
use serde::{Deserialize, Serialize};

/// A cart line: the product as it was when added, plus a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: u64,
    pub shipping: u64,
    pub tax: u64,
    pub total: u64,
    pub item_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,
    pub placed_at: String, // ISO 8601 timestamp
}
