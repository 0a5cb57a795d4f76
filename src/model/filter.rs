use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 5000;

/// Inclusive price bounds, `[min, max]` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

impl From<(u32, u32)> for PriceRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (u32, u32) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Empty set means no category restriction
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub sustainable_only: bool,
}

impl FilterCriteria {
    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, min: u32, max: u32) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn sustainable_only(mut self, sustainable_only: bool) -> Self {
        self.sustainable_only = sustainable_only;
        self
    }
}
