use std::fmt;

/// Your product's availability.
///
/// See [`ProductData::availability`](super::ProductData::availability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAvailability {
    InStock,
    OutOfStock,
    Preorder,
    Backorder,
}

impl ProductAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductAvailability::InStock => "In Stock",
            ProductAvailability::OutOfStock => "Out of Stock",
            ProductAvailability::Preorder => "Preorder",
            ProductAvailability::Backorder => "Backorder",
        }
    }
}

/// The condition of your product at time of sale.
///
/// See [`ProductData::condition`](super::ProductData::condition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCondition {
    /// Brand new, original, unopened packaging
    New,
    /// Professionally restored to working order, comes with a warranty, may or
    /// may not have the original packaging
    Refurbished,
    /// Previously used, original packaging opened or missing
    Used,
}

impl ProductCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCondition::New => "New",
            ProductCondition::Refurbished => "Refurbished",
            ProductCondition::Used => "Used",
        }
    }
}

impl fmt::Display for ProductAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProductAvailability> for String {
    fn from(value: ProductAvailability) -> Self {
        value.as_str().to_string()
    }
}

impl From<ProductCondition> for String {
    fn from(value: ProductCondition) -> Self {
        value.as_str().to_string()
    }
}
