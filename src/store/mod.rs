pub mod cart;
pub mod memory;
pub mod traits;

pub use cart::*;
pub use memory::*;
pub use traits::*;
