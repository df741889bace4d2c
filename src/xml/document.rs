use std::io::Write;

use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::CatalogError;

/// Serialization settings for a [`RenderedDocument`].
///
/// # Examples
///
/// ```
/// use catalog_feed::xml::RenderOptions;
///
/// let options = RenderOptions {
///     pretty_print: false,
///     ..RenderOptions::default()
/// };
/// assert_eq!(options.indent_size, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Keep whitespace-only text nodes that sit between elements.
    pub preserve_whitespace: bool,
    /// Put every element on its own line, indented by nesting depth.
    pub pretty_print: bool,
    /// Spaces per nesting level when pretty printing.
    pub indent_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preserve_whitespace: false,
            pretty_print: true,
            indent_size: 2,
        }
    }
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A named XML element. Names are written verbatim, prefix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf element holding a single text node.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.push_text(text);
        element
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Children that will be written with the given whitespace policy.
    fn written_children(&self, preserve_whitespace: bool) -> Vec<&Node> {
        let has_elements = self.elements().next().is_some();
        self.children
            .iter()
            .filter(|node| match node {
                Node::Element(_) => true,
                Node::Text(text) if text.is_empty() => false,
                Node::Text(text) => {
                    preserve_whitespace || !has_elements || !text.trim().is_empty()
                }
            })
            .collect()
    }

    fn write<W: Write>(
        &self,
        writer: &mut Writer<W>,
        options: &RenderOptions,
    ) -> Result<(), CatalogError> {
        let start = BytesStart::new(self.name.as_str()).with_attributes(
            self.attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );

        let children = self.written_children(options.preserve_whitespace);
        if children.is_empty() {
            return writer
                .write_event(Event::Empty(start))
                .map_err(|e| write_error(&self.name, e));
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| write_error(&self.name, e))?;

        for child in children {
            match child {
                Node::Element(element) => element.write(writer, options)?,
                Node::Text(text) => writer
                    .write_event(Event::Text(BytesText::from_escaped(partial_escape(
                        text.as_str(),
                    ))))
                    .map_err(|e| write_error(&self.name, e))?,
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(|e| write_error(&self.name, e))
    }
}

fn write_error(element: &str, error: impl std::fmt::Display) -> CatalogError {
    CatalogError::Render(format!("Failed to write XML element <{}>: {}", element, error))
}

/// An XML document: a declaration and a single root element.
///
/// Rendering is a pure transformation; the document is rebuilt on every
/// call to [`XmlCatalog::render`](super::XmlCatalog::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    root: Element,
}

impl RenderedDocument {
    pub const VERSION: &'static str = "1.0";
    pub const ENCODING: &'static str = "utf-8";

    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Writes the document into `sink` and hands the sink back.
    pub fn write_to<W: Write>(&self, sink: W, options: &RenderOptions) -> Result<W, CatalogError> {
        let mut writer = if options.pretty_print {
            Writer::new_with_indent(sink, b' ', options.indent_size)
        } else {
            Writer::new(sink)
        };

        writer
            .write_event(Event::Decl(BytesDecl::new(
                Self::VERSION,
                Some(Self::ENCODING),
                None,
            )))
            .map_err(|e| CatalogError::Render(format!("Failed to write XML declaration: {}", e)))?;

        // The indenting writer breaks the line itself before the root.
        if !options.pretty_print {
            write_newline(&mut writer)?;
        }

        self.root.write(&mut writer, options)?;
        write_newline(&mut writer)?;

        Ok(writer.into_inner())
    }

    /// Serializes the document into a UTF-8 string.
    pub fn to_xml_string(&self, options: &RenderOptions) -> Result<String, CatalogError> {
        let buffer = self.write_to(Vec::new(), options)?;
        String::from_utf8(buffer).map_err(|e| CatalogError::Render(e.to_string()))
    }
}

fn write_newline<W: Write>(writer: &mut Writer<W>) -> Result<(), CatalogError> {
    writer
        .get_mut()
        .write_all(b"\n")
        .map_err(|e| CatalogError::Render(format!("Failed to write XML: {}", e)))
}
