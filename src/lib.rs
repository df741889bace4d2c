#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 # Catalog Feed for Rust

 Turns product records into the XML feed a shopping catalog ingestion service
 consumes: an RSS 2.0 document whose items carry elements in the
 `g` (`http://base.google.com/ns/1.0`) namespace.

 ## Core Concepts

- **FieldDescriptor:** Binds one record field to the element it is written as, with an optional namespace prefix, and tells whether the field is plain text, a repeatable list or a date.
- **CatalogRecord:** A record type with a static, ordered table of field descriptors. Elements are always written in that order.
- **RecordInput:** What a catalog accepts as a product: a typed record, a key/value mapping or a JSON object, matched by field name, element name or element name without its prefix.
- **XmlCatalog:** Owns the products, renders them into a `RenderedDocument` and serializes it.

 ## Emission rules

| **Value**                  | **Output**                                         |
|----------------------------|----------------------------------------------------|
| absent, `""`, empty list   | nothing                                            |
| list of n strings          | n sibling elements with the same name, in order   |
| date/time                  | one element, `YYYY-MM-DDTHH:MM:SSZ` in UTC         |
| anything else              | one element with the escaped text                  |

 ## Getting Started

```rust
use catalog_feed::{
    error::CatalogError,
    model::{ProductAvailability, ProductData},
    xml::XmlCatalog,
};

fn main() -> Result<(), CatalogError> {
    let mut product = ProductData::default();
    product.id = "4000086".to_string();
    product.title = "Illuminating Makeup Mirror".to_string();
    product.availability = ProductAvailability::Preorder.into();
    product.price = "14.99 GBP".to_string();

    let mut catalog = XmlCatalog::new();
    catalog.add_product(product)?;

    let xml = catalog.to_xml_string()?;
    assert!(xml.contains("<g:availability>Preorder</g:availability>"));

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Record abstraction and field mapping
pub mod core;

/// Error types for catalog operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Product record and its constant value sets
pub mod model;

/// Feed rendering and XML serialization
pub mod xml;
