use crate::model::{deserialize_present, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub image: String,
    pub category: String,
    pub seller: String,
    pub rating: u8,
    pub reviews: u32,
    pub sustainable: bool,
    pub featured: bool,
}

/// Product fields without an id, as submitted for creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub image: String,
    pub category: String,
    pub seller: String,
    pub rating: u8,
    pub reviews: u32,
    pub sustainable: bool,
    pub featured: bool,
}

impl NewProduct {
    pub fn into_product(self, id: Id) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            category: self.category,
            seller: self.seller,
            rating: self.rating,
            reviews: self.reviews,
            sustainable: self.sustainable,
            featured: self.featured,
        }
    }
}

/// Partial update of a product. Only fields that are present overwrite.
///
/// `original_price` distinguishes "absent" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow merge onto `product`; the id is never touched.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(seller) = self.seller {
            product.seller = seller;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(reviews) = self.reviews {
            product.reviews = reviews;
        }
        if let Some(sustainable) = self.sustainable {
            product.sustainable = sustainable;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}
