use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
    Json as RequestJson,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::state::AppState;
use crate::logic::{discount_percent, featured};
use crate::model::{
    is_known_category, FilterCriteria, Id, NewProduct, Product, ProductUpdate, CATEGORIES,
};
use crate::store::CatalogStore;

/// Image used when the seller leaves the image field blank
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.pexels.com/photos/1187765/pexels-photo-1187765.jpeg?auto=compress&cs=tinysrgb&w=300";
pub const DASHBOARD_SELLER: &str = "Your Store";

/// Canned artisan descriptions the dashboard offers when asked for a suggestion
pub const DESCRIPTION_SUGGESTIONS: [&str; 4] = [
    "Handcrafted with premium materials using traditional techniques passed down through generations.",
    "Unique artisan creation featuring intricate details and sustainable eco-friendly materials.",
    "Beautiful handmade piece that combines modern aesthetics with traditional craftsmanship.",
    "Carefully crafted using natural materials, perfect for those who appreciate authentic handmade quality.",
];

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

/// Product plus the values the details page derives from it
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
}

impl From<Product> for ProductDetails {
    fn from(product: Product) -> Self {
        Self {
            discount_percent: discount_percent(&product),
            product,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewResponse {
    pub items: Vec<Product>,
    /// Number of products in the view
    pub total: usize,
    /// Number of products in the whole catalog
    pub catalog_total: usize,
    pub search_query: String,
    pub filters: FilterCriteria,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Field '{0}' must not be empty")]
    Blank(&'static str),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Update contains no fields")]
    EmptyUpdate,
}

/// Seller dashboard form. Server-side defaults fill everything the form does not ask for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: u32,
    #[serde(default)]
    pub original_price: Option<u32>,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sustainable: bool,
}

impl ProductForm {
    fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Blank("title"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Blank("description"));
        }
        if !is_known_category(&self.category) {
            return Err(FormError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }

    fn image_or_default(&self) -> String {
        if self.image.trim().is_empty() {
            DEFAULT_PRODUCT_IMAGE.to_string()
        } else {
            self.image.clone()
        }
    }

    pub fn into_new_product(self) -> Result<NewProduct, FormError> {
        self.validate()?;
        Ok(NewProduct {
            image: self.image_or_default(),
            title: self.title,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            seller: DASHBOARD_SELLER.to_string(),
            rating: 5,
            reviews: 0,
            sustainable: self.sustainable,
            featured: false,
        })
    }

    /// Edit submission: overwrites only the fields the form shows. Seller, rating,
    /// reviews and featured keep their current values.
    pub fn into_update(self) -> Result<ProductUpdate, FormError> {
        self.validate()?;
        Ok(ProductUpdate {
            image: Some(self.image_or_default()),
            title: Some(self.title),
            description: Some(self.description),
            price: Some(self.price),
            original_price: Some(self.original_price),
            category: Some(self.category),
            sustainable: Some(self.sustainable),
            ..Default::default()
        })
    }
}

/// Checks a partial update the same way the form checks a full one
pub fn validate_update(update: &ProductUpdate) -> Result<(), FormError> {
    if update.is_empty() {
        return Err(FormError::EmptyUpdate);
    }
    if matches!(&update.title, Some(title) if title.trim().is_empty()) {
        return Err(FormError::Blank("title"));
    }
    if matches!(&update.description, Some(d) if d.trim().is_empty()) {
        return Err(FormError::Blank("description"));
    }
    if let Some(category) = &update.category {
        if !is_known_category(category) {
            return Err(FormError::UnknownCategory(category.clone()));
        }
    }
    Ok(())
}

fn bad_request(e: FormError) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, &e.to_string())
}

fn product_not_found(id: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, &format!("Product '{}' not found", id))
}

// Product catalog

pub async fn list_products<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Json<ListResponse<Product>> {
    let items = state.catalog.read().list_all().to_vec();
    let total = items.len();
    Json(ListResponse { items, total })
}

pub async fn list_featured_products<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Json<ListResponse<Product>> {
    let items = featured(state.catalog.read().list_all());
    let total = items.len();
    Json(ListResponse { items, total })
}

pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescriptionSuggestion {
    pub description: String,
}

pub async fn suggest_description() -> Json<DescriptionSuggestion> {
    let index = rand::thread_rng().gen_range(0..DESCRIPTION_SUGGESTIONS.len());
    Json(DescriptionSuggestion {
        description: DESCRIPTION_SUGGESTIONS[index].to_string(),
    })
}

pub async fn get_product<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ProductDetails>, ApiError> {
    let product = state.catalog.read().get_product(&id).cloned();
    match product {
        Some(product) => Ok(Json(product.into())),
        None => Err(product_not_found(&id)),
    }
}

pub async fn create_product<S: CatalogStore>(
    State(state): State<AppState<S>>,
    RequestJson(form): RequestJson<ProductForm>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let data = form.into_new_product().map_err(bad_request)?;
    let product = state.catalog.write().add_product(data);
    log::info!("Created product {} ({})", product.id, product.title);
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn edit_product<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(form): RequestJson<ProductForm>,
) -> Result<Json<Product>, ApiError> {
    let update = form.into_update().map_err(bad_request)?;
    apply_update(&state, &id, update)
}

pub async fn update_product<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(update): RequestJson<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    validate_update(&update).map_err(bad_request)?;
    apply_update(&state, &id, update)
}

fn apply_update<S: CatalogStore>(
    state: &AppState<S>,
    id: &str,
    update: ProductUpdate,
) -> Result<Json<Product>, ApiError> {
    let mut catalog = state.catalog.write();
    if !catalog.update_product(id, update) {
        return Err(product_not_found(id));
    }
    log::info!("Updated product {}", id);
    catalog
        .get_product(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| product_not_found(id))
}

pub async fn delete_product<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<StatusCode, ApiError> {
    if state.catalog.write().delete_product(&id) {
        log::info!("Deleted product {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(product_not_found(&id))
    }
}

// Search and filters

fn catalog_view<S: CatalogStore>(catalog: &S) -> CatalogViewResponse {
    let items = catalog.list_filtered().to_vec();
    CatalogViewResponse {
        total: items.len(),
        items,
        catalog_total: catalog.list_all().len(),
        search_query: catalog.search_query().to_string(),
        filters: catalog.filters().clone(),
    }
}

pub async fn get_catalog_view<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Json<CatalogViewResponse> {
    Json(catalog_view(&*state.catalog.read()))
}

pub async fn set_search_query<S: CatalogStore>(
    State(state): State<AppState<S>>,
    RequestJson(request): RequestJson<SearchRequest>,
) -> Json<CatalogViewResponse> {
    let mut catalog = state.catalog.write();
    catalog.set_search_query(request.query);
    Json(catalog_view(&*catalog))
}

pub async fn set_filters<S: CatalogStore>(
    State(state): State<AppState<S>>,
    RequestJson(criteria): RequestJson<FilterCriteria>,
) -> Json<CatalogViewResponse> {
    let mut catalog = state.catalog.write();
    catalog.set_filters(criteria);
    Json(catalog_view(&*catalog))
}

pub async fn clear_filters<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Json<CatalogViewResponse> {
    let mut catalog = state.catalog.write();
    catalog.clear_filters();
    Json(catalog_view(&*catalog))
}

// API Documentation handlers

pub async fn get_api_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Craft Storefront API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({ url: '/docs/openapi.json', dom_id: '#swagger-ui', deepLinking: true });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn get_openapi_spec() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Craft Storefront API",
            "version": "0.1.0",
            "description": "Product catalog with search and filters, cart and checkout, and a chat proxy."
        },
        "tags": [
            { "name": "Products", "description": "Catalog entries and seller management" },
            { "name": "Catalog View", "description": "Search query, filter criteria and the derived view" },
            { "name": "Cart", "description": "Cart lines, totals and checkout" },
            { "name": "Chat", "description": "Prompt pass-through to the generative-language API" }
        ],
        "paths": {
            "/health": { "get": { "summary": "Liveness check" } },
            "/categories": { "get": { "tags": ["Products"], "summary": "Known product categories" } },
            "/products": {
                "get": { "tags": ["Products"], "summary": "Full catalog, newest first" },
                "post": { "tags": ["Products"], "summary": "Create a product from the dashboard form" }
            },
            "/products/featured": { "get": { "tags": ["Products"], "summary": "Featured products" } },
            "/products/description-suggestion": {
                "get": { "tags": ["Products"], "summary": "Random canned description for the dashboard form" }
            },
            "/products/{id}": {
                "get": { "tags": ["Products"], "summary": "Product details with discount percentage" },
                "put": { "tags": ["Products"], "summary": "Edit a product from the dashboard form" },
                "patch": { "tags": ["Products"], "summary": "Partial update; only present fields change" },
                "delete": { "tags": ["Products"], "summary": "Remove a product" }
            },
            "/catalog/view": { "get": { "tags": ["Catalog View"], "summary": "Filtered view with counts" } },
            "/catalog/search": { "put": { "tags": ["Catalog View"], "summary": "Replace the search query" } },
            "/catalog/filters": {
                "put": { "tags": ["Catalog View"], "summary": "Replace the filter criteria" },
                "delete": { "tags": ["Catalog View"], "summary": "Reset filters to defaults" }
            },
            "/cart": {
                "get": { "tags": ["Cart"], "summary": "Cart lines and order summary" },
                "delete": { "tags": ["Cart"], "summary": "Empty the cart" }
            },
            "/cart/items": { "post": { "tags": ["Cart"], "summary": "Add one unit of a product" } },
            "/cart/items/{id}": {
                "patch": { "tags": ["Cart"], "summary": "Set a line's quantity (0 removes it)" },
                "delete": { "tags": ["Cart"], "summary": "Remove a line" }
            },
            "/cart/checkout": { "post": { "tags": ["Cart"], "summary": "Place the order and clear the cart" } },
            "/api/chat": { "post": { "tags": ["Chat"], "summary": "Forward a prompt, return the first candidate" } }
        }
    }))
}
