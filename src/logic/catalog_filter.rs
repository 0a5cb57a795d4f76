use crate::model::{FilterCriteria, PriceRange, Product};

/// Single step of the derivation pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPredicate {
    /// Lower-cased substring match on title, description or category
    Search { needle: String },
    /// Category must be a member of the set
    Category { categories: Vec<String> },
    /// Inclusive price bounds
    PriceRange { range: PriceRange },
    /// Only eco-friendly products
    Sustainable,
}

impl CatalogPredicate {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CatalogPredicate::Search { needle } => {
                product.title.to_lowercase().contains(needle.as_str())
                    || product.description.to_lowercase().contains(needle.as_str())
                    || product.category.to_lowercase().contains(needle.as_str())
            }
            CatalogPredicate::Category { categories } => {
                categories.iter().any(|c| c == &product.category)
            }
            CatalogPredicate::PriceRange { range } => range.contains(product.price),
            CatalogPredicate::Sustainable => product.sustainable,
        }
    }
}

/// Build the active predicates in application order: search, category,
/// price range (always), sustainability.
pub fn build_predicates(query: &str, filters: &FilterCriteria) -> Vec<CatalogPredicate> {
    let mut predicates = Vec::with_capacity(4);

    if !query.is_empty() {
        predicates.push(CatalogPredicate::Search {
            needle: query.to_lowercase(),
        });
    }

    if !filters.categories.is_empty() {
        predicates.push(CatalogPredicate::Category {
            categories: filters.categories.iter().cloned().collect(),
        });
    }

    predicates.push(CatalogPredicate::PriceRange {
        range: filters.price_range,
    });

    if filters.sustainable_only {
        predicates.push(CatalogPredicate::Sustainable);
    }

    predicates
}

/// Derive the filtered view. Stable: survivors keep their catalog order.
pub fn derive_view(products: &[Product], query: &str, filters: &FilterCriteria) -> Vec<Product> {
    let predicates = build_predicates(query, filters);
    products
        .iter()
        .filter(|product| predicates.iter().all(|p| p.matches(product)))
        .cloned()
        .collect()
}

/// Products flagged for promotion, in catalog order
pub fn featured(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.featured).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_products;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything_in_range() {
        let products = initial_products();
        let view = derive_view(&products, "", &FilterCriteria::default());
        assert_eq!(view, products);
    }

    #[test]
    fn test_price_range_always_applies() {
        let products = initial_products();
        // 3200 is above the tightened bound even with no other filter active
        let filters = FilterCriteria::default().with_price_range(0, 3000);
        let view = derive_view(&products, "", &filters);
        assert!(!ids(&view).contains(&"6"));
        assert_eq!(view.len(), 7);
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let products = initial_products();

        // title
        assert_eq!(ids(&derive_view(&products, "MACRAME", &FilterCriteria::default())), vec!["7"]);
        // description only
        assert_eq!(
            ids(&derive_view(&products, "succulents", &FilterCriteria::default())),
            vec!["3"]
        );
        // category only
        assert_eq!(
            ids(&derive_view(&products, "décor", &FilterCriteria::default())),
            vec!["3", "7"]
        );
    }

    #[test]
    fn test_predicates_only_built_when_active() {
        let predicates = build_predicates("", &FilterCriteria::default());
        assert_eq!(
            predicates,
            vec![CatalogPredicate::PriceRange {
                range: PriceRange::new(0, 5000)
            }]
        );

        let filters = FilterCriteria::default()
            .with_categories(["Crafts"])
            .sustainable_only(true);
        let predicates = build_predicates("Wood", &filters);
        assert_eq!(predicates.len(), 4);
        assert_eq!(
            predicates[0],
            CatalogPredicate::Search {
                needle: "wood".to_string()
            }
        );
        assert_eq!(predicates[3], CatalogPredicate::Sustainable);
    }

    #[test]
    fn test_price_predicate_bounds_inclusive() {
        let products = initial_products();
        let predicate = CatalogPredicate::PriceRange {
            range: PriceRange::new(799, 899),
        };
        let matched: Vec<&str> = products
            .iter()
            .filter(|p| predicate.matches(p))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(matched, vec!["3", "7"]);
    }

    #[test]
    fn test_conjunction_of_filters() {
        let products = initial_products();
        let filters = FilterCriteria::default()
            .with_categories(["Crafts"])
            .sustainable_only(true);
        // "4" is Crafts but not sustainable
        assert_eq!(ids(&derive_view(&products, "", &filters)), vec!["8"]);
    }

    #[test]
    fn test_featured_preserves_order() {
        let products = initial_products();
        assert_eq!(ids(&featured(&products)), vec!["1", "2", "4", "6", "8"]);
    }
}
