use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CatalogError;

use super::field::{FieldDescriptor, FieldValue};
use super::mapping;

/// A record type that can be written to a catalog feed.
///
/// Implementors declare their fields once, in declaration order, through
/// [`CatalogRecord::FIELDS`]. The renderer walks that table and reads each
/// value back with [`CatalogRecord::field_value`].
pub trait CatalogRecord {
    /// Field table, in the order elements are emitted.
    const FIELDS: &'static [FieldDescriptor];

    /// Reads the current value of the field called `name`.
    ///
    /// Unknown names yield [`FieldValue::Absent`].
    fn field_value(&self, name: &str) -> FieldValue<'_>;

    /// Assigns the field called `name`, coercing the value to the field's shape.
    fn set_field(&mut self, name: &str, value: FieldValue<'_>) -> Result<(), CatalogError>;

    /// Builds a record from a loosely-typed key/value mapping.
    ///
    /// Keys are matched against the field name, then the element name, then
    /// the element name without its namespace prefix. Fields with no match
    /// keep their default value.
    fn from_map(map: &Map<String, Value>) -> Result<Self, CatalogError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        mapping::populate(&mut record, map)?;
        Ok(record)
    }
}

/// Everything a catalog accepts as a product.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput<R> {
    /// A fully typed record, taken as is.
    Record(R),
    /// A generic key/value mapping.
    Map(Map<String, Value>),
    /// Any JSON value; only objects are accepted.
    Value(Value),
}

impl<R> RecordInput<R> {
    /// Accepts any serializable value shaped like a mapping, such as another
    /// record type with matching field names.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, CatalogError> {
        serde_json::to_value(value)
            .map(RecordInput::Value)
            .map_err(|e| CatalogError::UnsupportedInputShape(e.to_string()))
    }
}

impl<R: CatalogRecord + Default> RecordInput<R> {
    /// Normalizes the input into a typed record.
    pub fn into_record(self) -> Result<R, CatalogError> {
        match self {
            RecordInput::Record(record) => Ok(record),
            RecordInput::Map(map) => R::from_map(&map),
            RecordInput::Value(Value::Object(map)) => R::from_map(&map),
            RecordInput::Value(Value::Null) => Err(CatalogError::InvalidInput),
            RecordInput::Value(other) => Err(CatalogError::UnsupportedInputShape(
                json_kind(&other).to_string(),
            )),
        }
    }
}

impl<R> From<Map<String, Value>> for RecordInput<R> {
    fn from(map: Map<String, Value>) -> Self {
        RecordInput::Map(map)
    }
}

impl<R> From<Value> for RecordInput<R> {
    fn from(value: Value) -> Self {
        RecordInput::Value(value)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKind;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Note {
        subject: String,
        tags: Vec<String>,
    }

    impl CatalogRecord for Note {
        const FIELDS: &'static [FieldDescriptor] = &[
            FieldDescriptor::new("subject").element("n:subject"),
            FieldDescriptor::new("tags").kind(FieldKind::List),
        ];

        fn field_value(&self, name: &str) -> FieldValue<'_> {
            match name {
                "subject" => (&self.subject).into(),
                "tags" => (&self.tags).into(),
                _ => FieldValue::Absent,
            }
        }

        fn set_field(&mut self, name: &str, value: FieldValue<'_>) -> Result<(), CatalogError> {
            match name {
                "subject" => self.subject = value.into_text(),
                "tags" => self.tags = value.into_list(),
                _ => return Err(CatalogError::UnknownField(name.to_string())),
            }
            Ok(())
        }
    }

    #[test]
    fn typed_record_passes_through() {
        let note = Note {
            subject: "hello".to_string(),
            tags: vec![],
        };

        let record = RecordInput::Record(note).into_record().unwrap();
        assert_eq!(record.subject, "hello");
    }

    #[test]
    fn object_value_is_mapped() {
        let input: RecordInput<Note> = json!({"subject": "hi", "tags": ["a", "b"]}).into();

        let record = input.into_record().unwrap();
        assert_eq!(record.subject, "hi");
        assert_eq!(record.tags, vec!["a", "b"]);
    }

    #[test]
    fn null_value_is_invalid_input() {
        let input: RecordInput<Note> = Value::Null.into();

        assert_eq!(input.into_record(), Err(CatalogError::InvalidInput));
    }

    #[test]
    fn scalar_values_are_unsupported() {
        for value in [json!("text"), json!(42), json!(true), json!(["a"])] {
            let kind = json_kind(&value);
            let input: RecordInput<Note> = value.into();

            assert_eq!(
                input.into_record(),
                Err(CatalogError::UnsupportedInputShape(kind.to_string()))
            );
        }
    }

    #[test]
    fn serializable_struct_is_accepted() {
        #[derive(Serialize)]
        struct Draft {
            subject: &'static str,
        }

        let input = RecordInput::<Note>::from_serialize(&Draft { subject: "draft" }).unwrap();
        let record = input.into_record().unwrap();

        assert_eq!(record.subject, "draft");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut note = Note::default();

        assert_eq!(
            note.set_field("missing", "x".into()),
            Err(CatalogError::UnknownField("missing".to_string()))
        );
    }
}
