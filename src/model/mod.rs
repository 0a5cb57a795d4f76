pub mod cart;
pub mod common;
pub mod filter;
pub mod product;

pub use cart::*;
pub use common::*;
pub use filter::*;
pub use product::*;
