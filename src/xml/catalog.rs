use std::io::Write;

use log::{debug, info};

use crate::core::field::{FieldValue, format_timestamp};
use crate::core::record::{CatalogRecord, RecordInput};
use crate::error::CatalogError;
use crate::model::ProductData;

use super::document::{Element, RenderOptions, RenderedDocument};

pub const RSS_TAG: &str = "rss";
pub const RSS_VERSION: &str = "2.0";
pub const CHANNEL_TAG: &str = "channel";
pub const ITEM_TAG: &str = "item";
pub const GOOGLE_NAMESPACE_PREFIX: &str = "g";
pub const GOOGLE_NAMESPACE: &str = "http://base.google.com/ns/1.0";

/// An ordered collection of products rendered as an RSS 2.0 shopping feed.
///
/// Products are appended with [`XmlCatalog::add_product`] and written in
/// insertion order, one `<item>` each, inside a single `<channel>`.
///
/// # Examples
///
/// ```
/// use catalog_feed::model::{ProductAvailability, ProductData};
/// use catalog_feed::xml::XmlCatalog;
/// use serde_json::json;
///
/// let mut product = ProductData::default();
/// product.id = "4000086".to_string();
/// product.availability = ProductAvailability::Preorder.into();
/// product.product_type = Some("Tools > Mirrors".to_string());
///
/// let mut catalog = XmlCatalog::new();
/// catalog.add_product(product).unwrap();
/// catalog.add_product(json!({"g:id": "4000087", "price": "9.99 GBP"})).unwrap();
///
/// let xml = catalog.to_xml_string().unwrap();
/// assert!(xml.contains("<g:id>4000086</g:id>"));
/// assert!(xml.contains("<g:product_type>Tools &gt; Mirrors</g:product_type>"));
/// assert!(xml.contains("<g:price>9.99 GBP</g:price>"));
/// ```
#[derive(Debug, Clone)]
pub struct XmlCatalog<R = ProductData> {
    products: Vec<R>,
    options: RenderOptions,
}

impl<R> Default for XmlCatalog<R> {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            options: RenderOptions::default(),
        }
    }
}

impl XmlCatalog<ProductData> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CatalogRecord + Default> XmlCatalog<R> {
    /// Adds a product to the catalog.
    ///
    /// Accepts a typed record, a key/value mapping or a JSON object. Keys of a
    /// mapping may be field names, field aliases or element names, with or
    /// without the namespace prefix.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidInput`] for an absent product (`None` or JSON `null`)
    /// - [`CatalogError::UnsupportedInputShape`] for a value that is not a mapping
    /// - [`CatalogError::InvalidFieldValue`] when a mapped value does not fit its field
    pub fn add_product(&mut self, product: impl Into<RecordInput<R>>) -> Result<(), CatalogError> {
        let record = product.into().into_record()?;
        self.add_record(record);
        Ok(())
    }
}

impl<R: CatalogRecord> XmlCatalog<R> {
    /// Appends an already typed record.
    pub fn add_record(&mut self, record: R) {
        self.products.push(record);
        debug!("Added product #{} to catalog", self.products.len());
    }

    pub fn products(&self) -> &[R] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Builds the feed document. The catalog is left untouched.
    pub fn render(&self) -> RenderedDocument {
        debug!("Rendering catalog with {} products", self.products.len());

        let mut channel = Element::new(CHANNEL_TAG);
        for product in &self.products {
            channel.push_element(render_item(product));
        }

        let mut root = Element::new(RSS_TAG)
            .with_attribute("version", RSS_VERSION)
            .with_attribute(
                format!("xmlns:{}", GOOGLE_NAMESPACE_PREFIX),
                GOOGLE_NAMESPACE,
            );
        root.push_element(channel);

        RenderedDocument::new(root)
    }

    /// Renders the feed with the catalog's configured options.
    ///
    /// The document is serialized into an in-memory buffer, which never
    /// fails: this always returns `Ok`. Only [`XmlCatalog::write_to`] can
    /// report a [`CatalogError::Render`] from its sink.
    pub fn to_xml_string(&self) -> Result<String, CatalogError> {
        self.render().to_xml_string(&self.options)
    }

    /// Renders the feed, overriding the whitespace and pretty print settings.
    ///
    /// Like [`XmlCatalog::to_xml_string`], this writes to memory and always
    /// returns `Ok`.
    pub fn render_to_string(
        &self,
        preserve_whitespace: bool,
        pretty_print: bool,
    ) -> Result<String, CatalogError> {
        let options = RenderOptions {
            preserve_whitespace,
            pretty_print,
            ..self.options
        };
        self.render().to_xml_string(&options)
    }

    /// Streams the feed into `sink` with the catalog's configured options.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Render`] when the sink rejects a write.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<W, CatalogError> {
        let sink = self.render().write_to(sink, &self.options)?;
        info!("Wrote catalog feed with {} items", self.products.len());
        Ok(sink)
    }
}

/// Builds one `<item>`, walking the record's fields in declaration order.
fn render_item<R: CatalogRecord>(record: &R) -> Element {
    let mut item = Element::new(ITEM_TAG);

    for field in R::FIELDS {
        let value = record.field_value(field.name);
        if value.is_empty() {
            continue;
        }

        let name = field.element_name();
        match value {
            FieldValue::List(values) => {
                for value in values.iter() {
                    item.push_element(Element::with_text(name, value.as_str()));
                }
            }
            FieldValue::DateTime(date) => {
                item.push_element(Element::with_text(name, format_timestamp(&date)));
            }
            FieldValue::Text(text) => {
                item.push_element(Element::with_text(name, text.into_owned()));
            }
            FieldValue::Absent => {}
        }
    }

    item
}

/// Builder for [`XmlCatalog`].
///
/// # Examples
///
/// ```
/// use catalog_feed::model::ProductData;
/// use catalog_feed::xml::XmlCatalogBuilder;
///
/// let catalog = XmlCatalogBuilder::new()
///     .pretty_print(false)
///     .build::<ProductData>();
///
/// assert_eq!(
///     catalog.to_xml_string().unwrap(),
///     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
///      <rss version=\"2.0\" xmlns:g=\"http://base.google.com/ns/1.0\"><channel/></rss>\n"
/// );
/// ```
#[derive(Default)]
pub struct XmlCatalogBuilder {
    options: RenderOptions,
}

impl XmlCatalogBuilder {
    /// Creates a builder with pretty printing on, whitespace preservation off
    /// and a 2-space indent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.options.pretty_print = pretty_print;
        self
    }

    pub fn preserve_whitespace(mut self, preserve_whitespace: bool) -> Self {
        self.options.preserve_whitespace = preserve_whitespace;
        self
    }

    pub fn indent_size(mut self, indent_size: usize) -> Self {
        self.options.indent_size = indent_size;
        self
    }

    pub fn build<R>(self) -> XmlCatalog<R> {
        XmlCatalog {
            products: Vec::new(),
            options: self.options,
        }
    }
}
