use serde::{Deserialize, Deserializer};

pub type Id = String;

/// Categories offered by the seller dashboard and the filter sidebar
pub const CATEGORIES: [&str; 4] = ["Jewelry", "Paintings", "Home Décor", "Crafts"];

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Deserialize a field whose presence matters: a missing field stays `None`
/// (via `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("Home Décor"));
        assert!(is_known_category("Crafts"));
        assert!(!is_known_category("crafts"));
        assert!(!is_known_category("Furniture"));
    }
}
