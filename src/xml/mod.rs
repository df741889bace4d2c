/// XML rendering of a catalog into an RSS 2.0 shopping feed.
///
/// The renderer builds an in-memory [`RenderedDocument`] and serializes it
/// with `quick-xml`. Element names come verbatim from each record's field
/// table, `g:` prefix included, and text content is escaped.
///
/// # Examples
///
/// ```
/// use catalog_feed::model::ProductData;
/// use catalog_feed::xml::XmlCatalog;
///
/// let mut product = ProductData::default();
/// product.id = "4000086".to_string();
/// product.additional_image_link = vec![
///     "https://www.example.com/side_a.jpg".to_string(),
///     "https://www.example.com/side_b.jpg".to_string(),
/// ];
///
/// let mut catalog = XmlCatalog::new();
/// catalog.add_product(product).unwrap();
///
/// let xml = catalog.to_xml_string().unwrap();
///
/// // The resulting XML looks like:
/// // <?xml version="1.0" encoding="utf-8"?>
/// // <rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
/// //   <channel>
/// //     <item>
/// //       <g:id>4000086</g:id>
/// //       <g:additional_image_link>https://www.example.com/side_a.jpg</g:additional_image_link>
/// //       <g:additional_image_link>https://www.example.com/side_b.jpg</g:additional_image_link>
/// //       <g:availability>In Stock</g:availability>
/// //       <g:condition>New</g:condition>
/// //     </item>
/// //   </channel>
/// // </rss>
/// assert_eq!(xml.matches("<g:additional_image_link>").count(), 2);
/// ```
pub mod catalog;
pub mod document;

pub use catalog::{XmlCatalog, XmlCatalogBuilder};
pub use document::{Element, Node, RenderOptions, RenderedDocument};
