use crate::logic::summarize;
use crate::model::{CartItem, OrderConfirmation, OrderSummary, Product};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
}

/// Upper bound on a single line's quantity
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Shopping cart holding product snapshots with quantities
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit; a product already in the cart has its quantity bumped,
    /// up to `MAX_LINE_QUANTITY`
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
            }
            None => self.items.push(CartItem {
                product,
                quantity: 1,
            }),
        }
    }

    /// Setting a quantity of zero removes the line; larger values are capped at
    /// `MAX_LINE_QUANTITY`. Returns false for unknown ids.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self.items.iter_mut().find(|item| item.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity.min(MAX_LINE_QUANTITY);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn summary(&self) -> OrderSummary {
        summarize(&self.items)
    }

    /// Turns the cart into an order and empties it. No payment is taken.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let now = chrono::Utc::now();
        let millis = now.timestamp_millis().to_string();
        let suffix = &millis[millis.len().saturating_sub(6)..];

        let items = std::mem::take(&mut self.items);
        let summary = summarize(&items);
        Ok(OrderConfirmation {
            order_id: format!("CFT{}", suffix),
            items,
            summary,
            placed_at: now.to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_products;

    #[test]
    fn test_add_same_product_bumps_quantity() {
        let products = initial_products();
        let mut cart = Cart::new();
        cart.add(products[0].clone());
        cart.add(products[0].clone());
        cart.add(products[2].clone());

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 1299 * 2 + 899);
    }

    #[test]
    fn test_update_quantity() {
        let products = initial_products();
        let mut cart = Cart::new();
        cart.add(products[1].clone());

        assert!(cart.update_quantity("2", 4));
        assert_eq!(cart.subtotal(), 10_000);
        assert!(!cart.update_quantity("missing", 2));

        assert!(cart.update_quantity("2", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_is_capped() {
        let products = initial_products();
        let mut cart = Cart::new();
        cart.add(products[0].clone());
        cart.add(products[1].clone());

        assert!(cart.update_quantity("1", u32::MAX));
        assert!(cart.update_quantity("2", u32::MAX));
        assert_eq!(cart.items()[0].quantity, MAX_LINE_QUANTITY);

        cart.add(products[0].clone());
        assert_eq!(cart.items()[0].quantity, MAX_LINE_QUANTITY);

        let summary = cart.summary();
        assert_eq!(summary.item_count, 2 * u64::from(MAX_LINE_QUANTITY));
        assert_eq!(summary.subtotal, (1299 + 2500) * u64::from(MAX_LINE_QUANTITY));
        assert!(cart.items().iter().all(|item| item.quantity >= 1));
    }

    #[test]
    fn test_remove_and_clear() {
        let products = initial_products();
        let mut cart = Cart::new();
        cart.add(products[3].clone());
        cart.add(products[4].clone());

        assert!(cart.remove("4"));
        assert!(!cart.remove("4"));
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.summary().total, 0);
    }

    #[test]
    fn test_place_order_clears_cart() {
        let products = initial_products();
        let mut cart = Cart::new();
        cart.add(products[6].clone());

        let confirmation = cart.place_order().unwrap();
        assert!(confirmation.order_id.starts_with("CFT"));
        assert_eq!(confirmation.order_id.len(), 9);
        assert_eq!(confirmation.summary.subtotal, 799);
        assert_eq!(confirmation.summary.total, 943); // 942.82
        assert_eq!(confirmation.items.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(cart.place_order(), Err(CheckoutError::EmptyCart));
    }
}
