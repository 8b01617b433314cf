//! Field descriptors and ordered field sequences.

use std::ops::Deref;

use serde::Deserialize;

use crate::{FieldLength, FieldType, SchemaType, serde_helpers::deserialize_null_as_false};

/// Length used for string columns that do not declare one.
pub const DEFAULT_STRING_LENGTH: i64 = 100;

/// One schema entry describing a single generated property.
///
/// Extra keys in the host's field table are ignored; `name` and `type` are
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// Logical field name, usually snake_case.
    pub name: String,
    /// Schema type, possibly unsupported.
    #[serde(rename = "type")]
    pub ty: SchemaType,
    /// Whether the generated property accepts null.
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub nullable: bool,
    /// Column length, only meaningful for strings.
    #[serde(default)]
    pub length: Option<FieldLength>,
}

impl FieldDescriptor {
    /// Create a non-nullable field without an explicit length.
    pub fn new(name: impl Into<String>, ty: impl Into<SchemaType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            length: None,
        }
    }

    /// Create a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Create an integer field.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    /// Create a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    /// Mark the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the column length.
    pub fn with_length(mut self, length: impl Into<FieldLength>) -> Self {
        self.length = Some(length.into());
        self
    }

    /// Length to render for string columns, falling back to
    /// [`DEFAULT_STRING_LENGTH`].
    pub fn effective_length(&self) -> FieldLength {
        self.length
            .clone()
            .unwrap_or(FieldLength::Number(DEFAULT_STRING_LENGTH))
    }
}

/// Ordered list of fields. Order decides declaration order in the
/// generated code and which field is last.
///
/// Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldSequence(Vec<FieldDescriptor>);

impl FieldSequence {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }
}

impl Deref for FieldSequence {
    type Target = [FieldDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<FieldDescriptor>> for FieldSequence {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }
}

impl FromIterator<FieldDescriptor> for FieldSequence {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldSequence {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let field = FieldDescriptor::string("title");
        assert_eq!(field.ty, SchemaType::Known(FieldType::String));
        assert!(!field.nullable);
        assert_eq!(field.length, None);
        assert_eq!(field.effective_length(), FieldLength::Number(100));
    }

    #[test]
    fn test_builder_length_and_nullable() {
        let field = FieldDescriptor::string("title").with_length(50).nullable();
        assert!(field.nullable);
        assert_eq!(field.effective_length(), FieldLength::Number(50));
    }

    #[test]
    fn test_deserialize_from_json() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{ "name": "title", "type": "string", "length": 50, "nullable": true, "comment": "ignored" }"#,
        )
        .unwrap();

        assert_eq!(field, FieldDescriptor::string("title").with_length(50).nullable());
    }

    #[test]
    fn test_deserialize_null_nullable() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{ "name": "age", "type": "integer", "nullable": null }"#)
                .unwrap();
        assert!(!field.nullable);
    }

    #[test]
    fn test_deserialize_requires_name_and_type() {
        assert!(serde_json::from_str::<FieldDescriptor>(r#"{ "type": "string" }"#).is_err());
        assert!(serde_json::from_str::<FieldDescriptor>(r#"{ "name": "title" }"#).is_err());
    }

    #[test]
    fn test_deserialize_sequence_from_toml() {
        #[derive(Deserialize)]
        struct Feature {
            fields: FieldSequence,
        }

        let feature: Feature = toml::from_str(
            r#"
            [[fields]]
            name = "email"
            type = "string"

            [[fields]]
            name = "born_at"
            type = "date"
            nullable = true
            "#,
        )
        .unwrap();

        assert_eq!(feature.fields.len(), 2);
        assert_eq!(feature.fields[0].name, "email");
        assert_eq!(
            feature.fields[1].ty,
            SchemaType::Unsupported("date".to_string())
        );
        assert!(feature.fields[1].nullable);
    }

    #[test]
    fn test_sequence_preserves_order_and_duplicates() {
        let fields: FieldSequence = ["a", "b", "a"]
            .into_iter()
            .map(FieldDescriptor::boolean)
            .collect();

        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }
}
