use anyhow::Result;
use catalog_feed::{
    core::record::RecordInput,
    model::{ProductAvailability, ProductCondition, ProductData},
    xml::{XmlCatalog, XmlCatalogBuilder},
};
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;
use serde_json::json;

fn normalize_line_endings(text: &str) -> String {
    text.replace('\r', "").trim().to_string()
}

fn assert_same_xml(expected: &str, actual: &str) {
    assert_eq!(
        normalize_line_endings(expected),
        normalize_line_endings(actual),
        "Output XML should match expectation"
    );
}

fn mirror() -> ProductData {
    let mut product = ProductData::default();
    product.id = "4000086".to_string();
    product.title = "Illuminating Makeup Mirror".to_string();
    product.description = "A ring light mirror with 23 LED strip lights.".to_string();
    product.link = "https://www.example.com/cat/illuminating-makeup-mirror".to_string();
    product.image_link = "https://www.example.com/media/catalog/product/image.jpg".to_string();
    product
}

#[test]
fn empty_catalog_renders_empty_channel() -> Result<()> {
    let catalog = XmlCatalog::new();

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
  <channel/>
</rss>
"#;

    assert_eq!(catalog.to_xml_string()?, expected);
    Ok(())
}

#[test]
fn product_with_required_and_optional_fields() -> Result<()> {
    let mut product = mirror();
    product.availability = ProductAvailability::Preorder.into();
    product.price = "14.99 GBP".to_string();

    product.product_type = Some("Tools > Mirrors".to_string());
    product.google_product_category = Some(
        "Health & Beauty > Personal Care > Cosmetics > Cosmetic Tools > Makeup Tools > Face Mirrors"
            .to_string(),
    );
    product.additional_image_link =
        vec!["https://www.example.com/media/catalog/product/image_side.jpg".to_string()];
    product.sale_price = Some("10.99 GBP".to_string());
    product.brand = String::new();

    let mut catalog = XmlCatalog::new();
    catalog.add_product(product)?;

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
  <channel>
    <item>
      <g:id>4000086</g:id>
      <title>Illuminating Makeup Mirror</title>
      <description>A ring light mirror with 23 LED strip lights.</description>
      <link>https://www.example.com/cat/illuminating-makeup-mirror</link>
      <g:image_link>https://www.example.com/media/catalog/product/image.jpg</g:image_link>
      <g:additional_image_link>https://www.example.com/media/catalog/product/image_side.jpg</g:additional_image_link>
      <g:availability>Preorder</g:availability>
      <g:price>14.99 GBP</g:price>
      <sale_price>10.99 GBP</sale_price>
      <g:google_product_category>Health &amp; Beauty &gt; Personal Care &gt; Cosmetics &gt; Cosmetic Tools &gt; Makeup Tools &gt; Face Mirrors</g:google_product_category>
      <g:product_type>Tools &gt; Mirrors</g:product_type>
      <g:condition>New</g:condition>
    </item>
  </channel>
</rss>"#;

    assert_same_xml(expected, &catalog.to_xml_string()?);
    Ok(())
}

#[test]
fn product_with_multiple_additional_images() -> Result<()> {
    let mut product = mirror();
    product
        .additional_image_link
        .push("https://www.example.com/media/catalog/product/image_side_a.jpg".to_string());
    product
        .additional_image_link
        .push("https://www.example.com/media/catalog/product/image_side_b.jpg".to_string());
    product
        .additional_image_link
        .push("https://www.example.com/media/catalog/product/image_side_c.jpg".to_string());

    let mut catalog = XmlCatalog::new();
    catalog.add_product(product)?;

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">
  <channel>
    <item>
      <g:id>4000086</g:id>
      <title>Illuminating Makeup Mirror</title>
      <description>A ring light mirror with 23 LED strip lights.</description>
      <link>https://www.example.com/cat/illuminating-makeup-mirror</link>
      <g:image_link>https://www.example.com/media/catalog/product/image.jpg</g:image_link>
      <g:additional_image_link>https://www.example.com/media/catalog/product/image_side_a.jpg</g:additional_image_link>
      <g:additional_image_link>https://www.example.com/media/catalog/product/image_side_b.jpg</g:additional_image_link>
      <g:additional_image_link>https://www.example.com/media/catalog/product/image_side_c.jpg</g:additional_image_link>
      <g:availability>In Stock</g:availability>
      <g:condition>New</g:condition>
    </item>
  </channel>
</rss>"#;

    assert_same_xml(expected, &catalog.to_xml_string()?);
    Ok(())
}

#[test]
fn availability_date_is_written_in_utc() -> Result<()> {
    let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
    let mut product = mirror();
    product.availability = ProductAvailability::Backorder.into();
    product.availability_date = offset.with_ymd_and_hms(2024, 9, 1, 10, 30, 0).single();

    let mut catalog = XmlCatalog::new();
    catalog.add_product(product)?;
    let xml = catalog.to_xml_string()?;

    assert!(xml.contains(
        "      <g:availability>Backorder</g:availability>\n      <g:availability_date>2024-09-01T08:30:00Z</g:availability_date>\n"
    ));
    Ok(())
}

#[test]
fn compact_output_has_no_indentation() -> Result<()> {
    let mut catalog = XmlCatalogBuilder::new()
        .pretty_print(false)
        .build::<ProductData>();
    catalog.add_product(json!({"id": "1", "condition": ProductCondition::Used.as_str()}))?;

    assert_eq!(
        catalog.to_xml_string()?,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <rss version=\"2.0\" xmlns:g=\"http://base.google.com/ns/1.0\"><channel><item>\
         <g:id>1</g:id><g:availability>In Stock</g:availability><g:condition>Used</g:condition>\
         </item></channel></rss>\n"
    );
    Ok(())
}

#[test]
fn mapping_keys_with_and_without_prefix_build_the_same_product() -> Result<()> {
    let by_field = json!({
        "id": "42",
        "image_link": "https://www.example.com/a.jpg",
        "additional_image_link": ["https://www.example.com/b.jpg"],
        "price": "5.00 EUR",
    });
    let by_element = json!({
        "g:id": "42",
        "g:image_link": "https://www.example.com/a.jpg",
        "g:additional_image_link": ["https://www.example.com/b.jpg"],
        "g:price": "5.00 EUR",
    });

    let mut catalog = XmlCatalog::new();
    catalog.add_product(by_field)?;
    catalog.add_product(by_element)?;

    assert_eq!(catalog.products()[0], catalog.products()[1]);
    assert_eq!(catalog.products()[0].price, "5.00 EUR");
    Ok(())
}

#[test]
fn other_serializable_records_are_accepted() -> Result<()> {
    #[derive(Serialize)]
    struct ShopItem {
        id: u32,
        title: &'static str,
        #[serde(rename = "g:product_type")]
        category: &'static str,
        stock_level: u32,
    }

    let item = ShopItem {
        id: 7,
        title: "Hand Mirror",
        category: "Tools > Mirrors",
        stock_level: 3,
    };

    let mut catalog = XmlCatalog::new();
    catalog.add_product(RecordInput::<ProductData>::from_serialize(&item)?)?;

    let product = &catalog.products()[0];
    assert_eq!(product.id, "7");
    assert_eq!(product.title, "Hand Mirror");
    assert_eq!(product.product_type.as_deref(), Some("Tools > Mirrors"));
    Ok(())
}

#[test]
fn catalog_can_be_rendered_repeatedly() -> Result<()> {
    let mut catalog = XmlCatalog::new();
    catalog.add_product(mirror())?;

    let first = catalog.to_xml_string()?;
    let second = catalog.to_xml_string()?;

    assert_eq!(first, second);
    assert_eq!(catalog.render(), catalog.render());

    let date: DateTime<FixedOffset> = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")?;
    let mut later = mirror();
    later.availability_date = Some(date);
    catalog.add_product(later)?;

    assert_eq!(catalog.to_xml_string()?.matches("<item>").count(), 2);
    Ok(())
}
