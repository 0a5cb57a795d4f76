pub mod api;
pub mod chat;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::routes::create_router;
pub use api::state::{AppState, Storefront};

// Export logic types
pub use logic::{derive_view, discount_percent, featured, CatalogPredicate};

// Export all model types
pub use model::*;

// Export store types
pub use store::{Cart, CatalogStore, CheckoutError, MemoryCatalog};

use crate::chat::ChatClient;
use crate::config::AppConfig;

/// Build the shared application state from configuration
pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState<MemoryCatalog>> {
    let catalog = if config.catalog.load_seed_data {
        MemoryCatalog::new()
    } else {
        MemoryCatalog::empty()
    };
    log::info!("Catalog ready with {} products", catalog.list_all().len());

    if config.chat.api_key().is_none() {
        log::warn!(
            "{} is not set; chat requests will return the fallback error",
            config.chat.api_key_env
        );
    }
    let chat = ChatClient::new(config.chat.clone())?;

    Ok(Storefront::new(catalog, chat).into_state())
}

/// Load configuration, build the state and serve until shutdown
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level unless RUST_LOG says otherwise
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let state = build_state(&config)?;
    let app = create_router::<MemoryCatalog>().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Storefront server running on http://{}", bind_address);
    log::info!("API documentation available at http://{}/docs", bind_address);

    serve(listener, app).await?;

    Ok(())
}
