use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::chat::ChatClient;
use crate::store::{Cart, CatalogStore};

pub type AppState<S> = Arc<Storefront<S>>;

/// Everything the handlers share. Locks are held for a single store call and
/// never across an await.
pub struct Storefront<S: CatalogStore> {
    pub catalog: RwLock<S>,
    pub cart: Mutex<Cart>,
    pub chat: ChatClient,
}

impl<S: CatalogStore> Storefront<S> {
    pub fn new(catalog: S, chat: ChatClient) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            cart: Mutex::new(Cart::new()),
            chat,
        }
    }

    pub fn into_state(self) -> AppState<S> {
        Arc::new(self)
    }
}
