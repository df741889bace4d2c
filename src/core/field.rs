use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// How a field's value is shaped and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string, emitted as one element.
    Text,
    /// A sequence of strings, emitted as repeated sibling elements.
    List,
    /// A calendar date/time, emitted as an ISO-8601 UTC timestamp.
    DateTime,
}

/// Binds one record field to the XML element it is written as.
///
/// When no element name is given, the field name is used verbatim.
///
/// # Examples
///
/// ```
/// use catalog_feed::core::field::{FieldDescriptor, FieldKind};
///
/// const ID: FieldDescriptor = FieldDescriptor::new("id").element("g:id");
/// const TITLE: FieldDescriptor = FieldDescriptor::new("title");
///
/// assert_eq!(ID.element_name(), "g:id");
/// assert_eq!(TITLE.element_name(), "title");
/// assert_eq!(TITLE.kind, FieldKind::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub element: Option<&'static str>,
    /// Alternate field name accepted from loose input, e.g. a camelCase key.
    pub alias: Option<&'static str>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            element: None,
            alias: None,
            kind: FieldKind::Text,
        }
    }

    /// Sets an explicit element name, which may carry a namespace prefix.
    pub const fn element(mut self, element: &'static str) -> Self {
        self.element = Some(element);
        self
    }

    /// Sets an alternate key matched right after the field name when
    /// building a record from a key/value mapping.
    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the resolved output element name.
    pub fn element_name(&self) -> &'static str {
        self.element.unwrap_or(self.name)
    }
}

/// Runtime value of a record field.
///
/// Borrowed when read from a record, owned when built from loose input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(Cow<'a, str>),
    List(Cow<'a, [String]>),
    DateTime(DateTime<FixedOffset>),
}

impl<'a> FieldValue<'a> {
    /// A value is empty when it is absent, an empty string or an empty list.
    ///
    /// Dates are never empty, and neither is the string `"0"`.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::DateTime(_) => false,
        }
    }

    pub fn into_owned(self) -> FieldValue<'static> {
        match self {
            FieldValue::Absent => FieldValue::Absent,
            FieldValue::Text(text) => FieldValue::Text(Cow::Owned(text.into_owned())),
            FieldValue::List(items) => FieldValue::List(Cow::Owned(items.into_owned())),
            FieldValue::DateTime(date) => FieldValue::DateTime(date),
        }
    }

    /// Coerces the value into a single string.
    ///
    /// Lists are joined with commas and dates use the feed timestamp format.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Text(text) => text.into_owned(),
            FieldValue::List(items) => items.join(","),
            FieldValue::DateTime(date) => format_timestamp(&date),
        }
    }

    /// Coerces the value into a list. A non-empty string becomes a single item.
    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::Absent => Vec::new(),
            FieldValue::Text(text) if text.is_empty() => Vec::new(),
            FieldValue::Text(text) => vec![text.into_owned()],
            FieldValue::List(items) => items.into_owned(),
            FieldValue::DateTime(date) => vec![format_timestamp(&date)],
        }
    }

    /// Coerces the value into a date. Strings are parsed as RFC 3339.
    pub fn into_date_time(self) -> Option<DateTime<FixedOffset>> {
        match self {
            FieldValue::DateTime(date) => Some(date),
            FieldValue::Text(text) => DateTime::parse_from_rfc3339(&text).ok(),
            FieldValue::Absent | FieldValue::List(_) => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for FieldValue<'static> {
    fn from(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            Some(text) => text.into(),
            None => FieldValue::Absent,
        }
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        FieldValue::List(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a Vec<String>> for FieldValue<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        FieldValue::List(Cow::Borrowed(value.as_slice()))
    }
}

impl From<Vec<String>> for FieldValue<'static> {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(Cow::Owned(value))
    }
}

impl<'a, Tz: chrono::TimeZone> From<DateTime<Tz>> for FieldValue<'a> {
    fn from(value: DateTime<Tz>) -> Self {
        FieldValue::DateTime(value.fixed_offset())
    }
}

impl<'a> From<Option<DateTime<FixedOffset>>> for FieldValue<'a> {
    fn from(value: Option<DateTime<FixedOffset>>) -> Self {
        match value {
            Some(date) => FieldValue::DateTime(date),
            None => FieldValue::Absent,
        }
    }
}

/// Formats a date as an ISO-8601 timestamp with seconds precision in UTC,
/// using the literal `Z` designator.
///
/// ```
/// use catalog_feed::core::field::format_timestamp;
/// use chrono::DateTime;
///
/// let date = DateTime::parse_from_rfc3339("2024-03-01T09:30:00+02:00").unwrap();
/// assert_eq!(format_timestamp(&date), "2024-03-01T07:30:00Z");
/// ```
pub fn format_timestamp(date: &DateTime<FixedOffset>) -> String {
    date.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
        .replace("+00:00", "Z")
}
