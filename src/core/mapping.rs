//! Field mapping resolution.
//!
//! The forward direction turns a record type's field table into ordered
//! `(field, element)` pairs. The reverse direction finds, for each field, the
//! key of a loose key/value mapping that should populate it.

use std::borrow::Cow;

use chrono::DateTime;
use log::debug;
use serde_json::{Map, Value};

use crate::error::CatalogError;

use super::field::{FieldDescriptor, FieldKind, FieldValue};
use super::record::{CatalogRecord, json_kind};

/// Ordered `(field name, element name)` pairs for a record type.
///
/// The order is the declaration order of `R::FIELDS`, and depends only on
/// the type.
///
/// ```
/// use catalog_feed::core::mapping::field_mapping;
/// use catalog_feed::model::ProductData;
///
/// let mapping: Vec<_> = field_mapping::<ProductData>().collect();
/// assert_eq!(mapping[0], ("id", "g:id"));
/// assert_eq!(mapping[1], ("title", "title"));
/// ```
pub fn field_mapping<R: CatalogRecord>() -> impl Iterator<Item = (&'static str, &'static str)> {
    R::FIELDS
        .iter()
        .map(|field| (field.name, field.element_name()))
}

/// Removes the namespace prefix (up to and including the first `:`).
pub fn strip_namespace(element: &str) -> &str {
    match element.split_once(':') {
        Some((_, local)) => local,
        None => element,
    }
}

/// Finds the value that should populate `field`.
///
/// Candidate keys are tried in order: field name, alias (if any), element
/// name, element name without namespace. A `null` value is skipped so that
/// it never overrides a default.
pub fn lookup<'m>(field: &FieldDescriptor, map: &'m Map<String, Value>) -> Option<&'m Value> {
    let element = field.element_name();
    [Some(field.name), field.alias, Some(element), Some(strip_namespace(element))]
        .into_iter()
        .flatten()
        .filter_map(|key| map.get(key))
        .find(|value| !value.is_null())
}

/// Copies every matching entry of `map` into `record`.
pub fn populate<R: CatalogRecord>(
    record: &mut R,
    map: &Map<String, Value>,
) -> Result<(), CatalogError> {
    for field in R::FIELDS {
        if let Some(value) = lookup(field, map) {
            let value = convert(field, value)?;
            record.set_field(field.name, value)?;
        }
    }
    debug!("Populated record from mapping with {} keys", map.len());
    Ok(())
}

/// Converts a loose JSON value into the shape the field declares.
pub fn convert(field: &FieldDescriptor, value: &Value) -> Result<FieldValue<'static>, CatalogError> {
    match field.kind {
        FieldKind::Text => scalar_text(field, value).map(FieldValue::from),
        FieldKind::List => match value {
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items.iter().filter(|item| !item.is_null()) {
                    list.push(scalar_text(field, item)?);
                }
                Ok(FieldValue::List(Cow::Owned(list)))
            }
            other => scalar_text(field, other).map(|text| FieldValue::from(vec![text])),
        },
        FieldKind::DateTime => match value {
            Value::String(text) => DateTime::parse_from_rfc3339(text)
                .map(FieldValue::DateTime)
                .map_err(|e| invalid(field, format!("'{}' is not an RFC 3339 date: {}", text, e))),
            other => Err(invalid(
                field,
                format!("expected a date string, got {}", json_kind(other)),
            )),
        },
    }
}

fn scalar_text(field: &FieldDescriptor, value: &Value) -> Result<String, CatalogError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(invalid(
            field,
            format!("expected a scalar, got {}", json_kind(other)),
        )),
    }
}

fn invalid(field: &FieldDescriptor, reason: String) -> CatalogError {
    CatalogError::InvalidFieldValue {
        field: field.name.to_string(),
        reason,
    }
}
