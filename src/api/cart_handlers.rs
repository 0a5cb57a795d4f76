use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};

use crate::api::handlers::{api_error, ApiError};
use crate::api::state::AppState;
use crate::model::{CartItem, Id, OrderConfirmation, OrderSummary};
use crate::store::{Cart, CatalogStore, CheckoutError};

#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            summary: cart.summary(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Id,
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

fn line_not_found(id: &str) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        &format!("Product '{}' is not in the cart", id),
    )
}

pub async fn get_cart<S: CatalogStore>(State(state): State<AppState<S>>) -> Json<CartResponse> {
    Json(CartResponse::from(&*state.cart.lock()))
}

pub async fn add_to_cart<S: CatalogStore>(
    State(state): State<AppState<S>>,
    RequestJson(request): RequestJson<AddToCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let product = state.catalog.read().get_product(&request.product_id).cloned();
    let Some(product) = product else {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            &format!("Product '{}' not found", request.product_id),
        ));
    };

    let mut cart = state.cart.lock();
    cart.add(product);
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn update_cart_quantity<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(request): RequestJson<QuantityRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let mut cart = state.cart.lock();
    if !cart.update_quantity(&id, request.quantity) {
        return Err(line_not_found(&id));
    }
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn remove_from_cart<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<CartResponse>, ApiError> {
    let mut cart = state.cart.lock();
    if !cart.remove(&id) {
        return Err(line_not_found(&id));
    }
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn clear_cart<S: CatalogStore>(State(state): State<AppState<S>>) -> Json<CartResponse> {
    let mut cart = state.cart.lock();
    cart.clear();
    Json(CartResponse::from(&*cart))
}

pub async fn checkout<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<(StatusCode, Json<OrderConfirmation>), ApiError> {
    match state.cart.lock().place_order() {
        Ok(confirmation) => {
            log::info!(
                "Order {} placed: {} items, total {}",
                confirmation.order_id,
                confirmation.summary.item_count,
                confirmation.summary.total
            );
            Ok((StatusCode::CREATED, Json(confirmation)))
        }
        Err(e @ CheckoutError::EmptyCart) => Err(api_error(StatusCode::CONFLICT, &e.to_string())),
    }
}
