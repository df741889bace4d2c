/// Constant value sets for availability and condition
pub mod enums;

/// The product record written to the feed
pub mod product;

pub use enums::{ProductAvailability, ProductCondition};
pub use product::ProductData;
