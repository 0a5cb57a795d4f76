use crate::model::{CartItem, OrderSummary, Product};

/// Tax surcharge applied when a summary is displayed; never stored
pub const TAX_RATE: f64 = 0.18;

pub fn tax(subtotal: u64) -> u64 {
    (subtotal as f64 * TAX_RATE).round() as u64
}

pub fn total_with_tax(subtotal: u64) -> u64 {
    (subtotal as f64 * (1.0 + TAX_RATE)).round() as u64
}

/// Percentage off the strike-through price, only when it is actually higher
pub fn discount_percent(product: &Product) -> Option<u32> {
    let original = product.original_price?;
    if original <= product.price {
        return None;
    }
    let off = f64::from(original - product.price) / f64::from(original) * 100.0;
    Some(off.round() as u32)
}

pub fn summarize(items: &[CartItem]) -> OrderSummary {
    let subtotal: u64 = items.iter().map(CartItem::line_total).sum();
    OrderSummary {
        subtotal,
        shipping: 0,
        tax: tax(subtotal),
        total: total_with_tax(subtotal),
        item_count: items.iter().map(|item| u64::from(item.quantity)).sum(),
    }
}
