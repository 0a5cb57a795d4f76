pub mod cart_handlers;
pub mod chat_handlers;
pub mod handlers;
pub mod routes;
pub mod state;

pub use cart_handlers::*;
pub use chat_handlers::*;
pub use handlers::*;
pub use routes::*;
pub use state::*;
