use crate::model::{FilterCriteria, NewProduct, Product, ProductUpdate};

/// Catalog state plus the view derived from the active search and filters.
///
/// Implementations re-derive the filtered view as part of every mutating call,
/// so `list_filtered` never observes stale inputs.
pub trait CatalogStore: Send + Sync {
    /// Full catalog, newest additions first
    fn list_all(&self) -> &[Product];
    /// Derived view for the current search query and filter criteria
    fn list_filtered(&self) -> &[Product];
    fn get_product(&self, id: &str) -> Option<&Product>;

    fn search_query(&self) -> &str;
    fn filters(&self) -> &FilterCriteria;

    fn set_search_query(&mut self, query: String);
    /// Replaces the criteria wholesale
    fn set_filters(&mut self, criteria: FilterCriteria);
    /// Resets the criteria to their defaults
    fn clear_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    /// Assigns a fresh id and prepends the product
    fn add_product(&mut self, data: NewProduct) -> Product;
    /// Returns false, leaving the catalog untouched, when no product has `id`
    fn update_product(&mut self, id: &str, update: ProductUpdate) -> bool;
    /// Returns false, leaving the catalog untouched, when no product has `id`
    fn delete_product(&mut self, id: &str) -> bool;
}
