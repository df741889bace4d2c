use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::core::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::core::record::{CatalogRecord, RecordInput};
use crate::error::CatalogError;

use super::enums::{ProductAvailability, ProductCondition};

/// One product of a shopping catalog feed.
///
/// Requirements noted on each field (required, max length) describe what the
/// ingestion service expects. They are not enforced here: whatever is set is
/// written, and empty values are left out of the feed.
///
/// # Examples
///
/// ```
/// use catalog_feed::model::{ProductAvailability, ProductData};
///
/// let mut product = ProductData::default();
/// product.id = "DS0294-L".to_string();
/// product.availability = ProductAvailability::Backorder.into();
///
/// assert_eq!(product.condition, "New");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    // Basic product data
    /// Unique ID for the product, ideally its SKU. Keep it stable across
    /// updates, countries and languages.
    ///
    /// Required, max 127 characters. Example: `DS0294-L`.
    pub id: String,

    /// Product name matching the landing page. Avoid promotional text and
    /// all-caps. Variants should include their distinguishing feature.
    ///
    /// Required, max 150 characters.
    pub title: String,

    /// Product description matching the landing page, about the product only.
    ///
    /// Required, max 5000 characters.
    pub description: String,

    /// Landing page on your verified domain, starting with http or https and
    /// URL-encoded (RFC 2396 / RFC 1738).
    ///
    /// Required.
    pub link: String,

    /// URL of the main product image. Accepted formats are JPEG, WebP, PNG,
    /// non-animated GIF, BMP and TIFF, at least 100x100 pixels (250x250 for
    /// apparel), at most 64 megapixels and 16MB.
    ///
    /// Required.
    pub image_link: String,

    /// URLs of additional product images, one element each.
    ///
    /// Optional, max 2000 characters.
    pub additional_image_link: Vec<String>,

    /// Mobile-optimized landing page, when it differs from [`Self::link`].
    ///
    /// Optional, max 2000 characters.
    pub mobile_link: Option<String>,

    // Price & availability
    /// Availability matching the landing and checkout pages. See
    /// [`ProductAvailability`]. Preorder and backorder items should also set
    /// [`Self::availability_date`].
    ///
    /// Required, defaults to `In Stock`.
    pub availability: String,

    /// Date a preordered or backordered product becomes available, up to one
    /// year ahead. Written in UTC.
    ///
    /// Optional.
    pub availability_date: Option<DateTime<FixedOffset>>,

    /// Price with ISO 4217 currency. Include VAT/GST outside the US and
    /// Canada. Do not submit a price of 0.
    ///
    /// Required. Example: `15.00 USD`.
    pub price: String,

    /// Sale price with ISO 4217 currency, submitted next to the regular
    /// [`Self::price`].
    ///
    /// Optional. Example: `14.99 USD`.
    pub sale_price: Option<String>,

    // Product category
    /// Google product taxonomy category, either the full path or the numeric
    /// ID (preferred). Only one category.
    ///
    /// Optional. Example: `Apparel & Accessories > Clothing > Outerwear > Coats & Jackets`.
    pub google_product_category: Option<String>,

    /// Your own full category path. Only the first product type is used for
    /// bidding and reporting.
    ///
    /// Optional, max 750 characters. Example: `Tools > Mirrors`.
    pub product_type: Option<String>,

    // Product identifiers
    /// Brand recognized by consumers. Leave empty for products without a
    /// brand rather than "N/A" or "Generic".
    ///
    /// Max 70 characters.
    pub brand: String,

    // Detailed product description
    /// Condition at time of sale. See [`ProductCondition`]. Required for used
    /// and refurbished products.
    ///
    /// Defaults to `New`.
    pub condition: String,
}

impl Default for ProductData {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            link: String::new(),
            image_link: String::new(),
            additional_image_link: Vec::new(),
            mobile_link: None,
            availability: ProductAvailability::InStock.into(),
            availability_date: None,
            price: String::new(),
            sale_price: None,
            google_product_category: None,
            product_type: None,
            brand: String::new(),
            condition: ProductCondition::New.into(),
        }
    }
}

impl CatalogRecord for ProductData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id").element("g:id"),
        FieldDescriptor::new("title"),
        FieldDescriptor::new("description"),
        FieldDescriptor::new("link"),
        FieldDescriptor::new("image_link")
            .alias("imageLink")
            .element("g:image_link"),
        FieldDescriptor::new("additional_image_link")
            .alias("additionalImageLink")
            .element("g:additional_image_link")
            .kind(FieldKind::List),
        FieldDescriptor::new("mobile_link")
            .alias("mobileLink")
            .element("g:mobile_link"),
        FieldDescriptor::new("availability").element("g:availability"),
        FieldDescriptor::new("availability_date")
            .element("g:availability_date")
            .kind(FieldKind::DateTime),
        FieldDescriptor::new("price").element("g:price"),
        FieldDescriptor::new("sale_price").alias("salePrice"),
        FieldDescriptor::new("google_product_category")
            .alias("googleProductCategory")
            .element("g:google_product_category"),
        FieldDescriptor::new("product_type")
            .alias("productType")
            .element("g:product_type"),
        FieldDescriptor::new("brand"),
        FieldDescriptor::new("condition").element("g:condition"),
    ];

    fn field_value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => (&self.id).into(),
            "title" => (&self.title).into(),
            "description" => (&self.description).into(),
            "link" => (&self.link).into(),
            "image_link" => (&self.image_link).into(),
            "additional_image_link" => (&self.additional_image_link).into(),
            "mobile_link" => (&self.mobile_link).into(),
            "availability" => (&self.availability).into(),
            "availability_date" => self.availability_date.into(),
            "price" => (&self.price).into(),
            "sale_price" => (&self.sale_price).into(),
            "google_product_category" => (&self.google_product_category).into(),
            "product_type" => (&self.product_type).into(),
            "brand" => (&self.brand).into(),
            "condition" => (&self.condition).into(),
            _ => FieldValue::Absent,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue<'_>) -> Result<(), CatalogError> {
        match name {
            "id" => self.id = value.into_text(),
            "title" => self.title = value.into_text(),
            "description" => self.description = value.into_text(),
            "link" => self.link = value.into_text(),
            "image_link" => self.image_link = value.into_text(),
            "additional_image_link" => self.additional_image_link = value.into_list(),
            "mobile_link" => self.mobile_link = optional_text(value),
            "availability" => self.availability = value.into_text(),
            "availability_date" => self.availability_date = optional_date(name, value)?,
            "price" => self.price = value.into_text(),
            "sale_price" => self.sale_price = optional_text(value),
            "google_product_category" => self.google_product_category = optional_text(value),
            "product_type" => self.product_type = optional_text(value),
            "brand" => self.brand = value.into_text(),
            "condition" => self.condition = value.into_text(),
            _ => return Err(CatalogError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

fn optional_text(value: FieldValue<'_>) -> Option<String> {
    match value {
        FieldValue::Absent => None,
        other => Some(other.into_text()),
    }
}

fn optional_date(
    name: &str,
    value: FieldValue<'_>,
) -> Result<Option<DateTime<FixedOffset>>, CatalogError> {
    if let FieldValue::Absent = value {
        return Ok(None);
    }
    let shown = format!("{:?}", value);
    value
        .into_date_time()
        .map(Some)
        .ok_or_else(|| CatalogError::InvalidFieldValue {
            field: name.to_string(),
            reason: format!("{} is not an RFC 3339 date", shown),
        })
}

impl From<ProductData> for RecordInput<ProductData> {
    fn from(product: ProductData) -> Self {
        RecordInput::Record(product)
    }
}

impl From<Option<ProductData>> for RecordInput<ProductData> {
    fn from(product: Option<ProductData>) -> Self {
        match product {
            Some(product) => RecordInput::Record(product),
            None => RecordInput::Value(serde_json::Value::Null),
        }
    }
}
