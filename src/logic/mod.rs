pub mod catalog_filter;
pub mod pricing;

pub use catalog_filter::*;
pub use pricing::*;
