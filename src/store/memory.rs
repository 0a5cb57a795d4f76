use crate::logic::derive_view;
use crate::model::{FilterCriteria, Id, NewProduct, Product, ProductUpdate};
use crate::seed::initial_products;
use crate::store::traits::CatalogStore;

/// In-memory catalog with an eagerly derived filtered view
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    search_query: String,
    filters: FilterCriteria,
    /// Cached result of `derive_view(products, search_query, filters)`
    filtered: Vec<Product>,
    /// Last id issued by `next_id`, in milliseconds
    last_issued: i64,
}

impl MemoryCatalog {
    /// Catalog seeded with the canonical products
    pub fn new() -> Self {
        Self::with_products(initial_products())
    }

    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let mut catalog = Self {
            products,
            search_query: String::new(),
            filters: FilterCriteria::default(),
            filtered: Vec::new(),
            last_issued: 0,
        };
        catalog.rederive();
        catalog
    }

    fn rederive(&mut self) {
        self.filtered = derive_view(&self.products, &self.search_query, &self.filters);
        log::debug!(
            "Catalog view re-derived: {} of {} products",
            self.filtered.len(),
            self.products.len()
        );
    }

    fn contains_id(&self, id: &str) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Millisecond timestamp id, moved past the last issued one and past any
    /// id already in the catalog.
    fn next_id(&mut self) -> Id {
        let now = chrono::Utc::now().timestamp_millis();
        let mut candidate = now.max(self.last_issued + 1);
        while self.contains_id(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryCatalog {
    fn list_all(&self) -> &[Product] {
        &self.products
    }

    fn list_filtered(&self) -> &[Product] {
        &self.filtered
    }

    fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.rederive();
    }

    fn set_filters(&mut self, criteria: FilterCriteria) {
        self.filters = criteria;
        self.rederive();
    }

    fn add_product(&mut self, data: NewProduct) -> Product {
        let id = self.next_id();
        let product = data.into_product(id);
        log::debug!("Adding product {} ({})", product.id, product.title);
        self.products.insert(0, product.clone());
        self.rederive();
        product
    }

    fn update_product(&mut self, id: &str, update: ProductUpdate) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                update.apply_to(product);
                self.rederive();
                true
            }
            None => {
                log::debug!("Update ignored, no product {}", id);
                false
            }
        }
    }

    fn delete_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            log::debug!("Delete ignored, no product {}", id);
            return false;
        }
        self.rederive();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_product(title: &str, price: u32) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: format!("{} description", title),
            price,
            original_price: None,
            image: "https://example.com/item.jpg".to_string(),
            category: "Crafts".to_string(),
            seller: "Your Store".to_string(),
            rating: 5,
            reviews: 0,
            sustainable: false,
            featured: false,
        }
    }

    #[test]
    fn test_new_is_seeded() {
        let catalog = MemoryCatalog::new();
        assert_eq!(catalog.list_all().len(), 8);
        assert_eq!(catalog.list_filtered().len(), 8);
        assert_eq!(catalog.search_query(), "");
        assert_eq!(catalog.filters(), &FilterCriteria::default());
    }

    #[test]
    fn test_ids_unique_for_rapid_additions() {
        let mut catalog = MemoryCatalog::empty();
        for i in 0..200 {
            catalog.add_product(new_product(&format!("Item {}", i), 100));
        }
        let ids: HashSet<&str> = catalog.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_next_id_skips_existing() {
        let far_future = (chrono::Utc::now().timestamp_millis() + 60_000).to_string();
        let mut seeded = initial_products();
        seeded[0].id = far_future.clone();
        let mut catalog = MemoryCatalog::with_products(seeded);
        catalog.last_issued = far_future.parse::<i64>().unwrap() - 1;

        let added = catalog.add_product(new_product("Clash", 10));
        assert_ne!(added.id, far_future);
        assert_eq!(catalog.list_all().iter().filter(|p| p.id == added.id).count(), 1);
    }

    #[test]
    fn test_add_rederives_view() {
        let mut catalog = MemoryCatalog::new();
        catalog.set_search_query("lantern".to_string());
        assert!(catalog.list_filtered().is_empty());

        catalog.add_product(new_product("Paper Lantern", 300));
        assert_eq!(catalog.list_filtered().len(), 1);
        assert_eq!(catalog.list_filtered()[0].title, "Paper Lantern");
    }

    #[test]
    fn test_update_moves_product_out_of_view() {
        let mut catalog = MemoryCatalog::new();
        catalog.set_filters(FilterCriteria::default().with_price_range(0, 1000));
        assert_eq!(catalog.list_filtered().len(), 2);

        let matched = catalog.update_product(
            "3",
            ProductUpdate {
                price: Some(1500),
                ..Default::default()
            },
        );
        assert!(matched);
        let ids: Vec<&str> = catalog.list_filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["7"]);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut catalog = MemoryCatalog::new();
        let before = catalog.list_all().to_vec();

        assert!(!catalog.update_product(
            "missing",
            ProductUpdate {
                title: Some("Ghost".to_string()),
                ..Default::default()
            }
        ));
        assert!(!catalog.delete_product("missing"));
        assert_eq!(catalog.list_all(), before.as_slice());
    }

    #[test]
    fn test_delete_rederives_view() {
        let mut catalog = MemoryCatalog::new();
        catalog.set_filters(FilterCriteria::default().with_categories(["Jewelry"]));
        assert!(catalog.delete_product("1"));
        let ids: Vec<&str> = catalog.list_filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5"]);
        assert!(catalog.get_product("1").is_none());
    }

    #[test]
    fn test_clear_filters_keeps_search() {
        let mut catalog = MemoryCatalog::new();
        catalog.set_search_query("art".to_string());
        catalog.set_filters(FilterCriteria::default().sustainable_only(true));
        catalog.clear_filters();
        assert_eq!(catalog.filters(), &FilterCriteria::default());
        assert_eq!(catalog.search_query(), "art");
    }
}
