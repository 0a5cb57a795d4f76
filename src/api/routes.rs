use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::state::AppState;
use crate::api::{cart_handlers, chat_handlers, handlers};
use crate::store::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API Documentation
        .route("/docs", get(handlers::get_api_docs))
        .route("/docs/openapi.json", get(handlers::get_openapi_spec))
        // Products
        .route("/categories", get(handlers::list_categories))
        .route(
            "/products",
            get(handlers::list_products::<S>).post(handlers::create_product::<S>),
        )
        .route("/products/featured", get(handlers::list_featured_products::<S>))
        .route(
            "/products/description-suggestion",
            get(handlers::suggest_description),
        )
        .route(
            "/products/:id",
            get(handlers::get_product::<S>)
                .put(handlers::edit_product::<S>)
                .patch(handlers::update_product::<S>)
                .delete(handlers::delete_product::<S>),
        )
        // Search and filters
        .route("/catalog/view", get(handlers::get_catalog_view::<S>))
        .route("/catalog/search", put(handlers::set_search_query::<S>))
        .route(
            "/catalog/filters",
            put(handlers::set_filters::<S>).delete(handlers::clear_filters::<S>),
        )
        // Cart and checkout
        .route(
            "/cart",
            get(cart_handlers::get_cart::<S>).delete(cart_handlers::clear_cart::<S>),
        )
        .route("/cart/items", post(cart_handlers::add_to_cart::<S>))
        .route(
            "/cart/items/:id",
            patch(cart_handlers::update_cart_quantity::<S>)
                .delete(cart_handlers::remove_from_cart::<S>),
        )
        .route("/cart/checkout", post(cart_handlers::checkout::<S>))
        // Chat proxy
        .route("/api/chat", post(chat_handlers::chat::<S>))
        .layer(CorsLayer::permissive())
}
