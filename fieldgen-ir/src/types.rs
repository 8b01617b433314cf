//! Core type definitions.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};

/// Primitive field types understood by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
}

impl FieldType {
    /// All supported field types, in schema documentation order.
    pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Integer, FieldType::Boolean];

    /// Get the schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        }
    }

    /// Look up a field type by its schema name.
    pub fn from_schema_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` attribute of a field as written in the schema.
///
/// Unknown names are kept verbatim so generators can report them or fall
/// back to degraded output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SchemaType {
    Known(FieldType),
    Unsupported(String),
}

impl SchemaType {
    /// Returns the supported field type, if any.
    pub fn known(&self) -> Option<FieldType> {
        match self {
            SchemaType::Known(ty) => Some(*ty),
            SchemaType::Unsupported(_) => None,
        }
    }

    /// Get the name as it appeared in the schema.
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Known(ty) => ty.as_str(),
            SchemaType::Unsupported(name) => name,
        }
    }
}

impl From<String> for SchemaType {
    fn from(name: String) -> Self {
        match FieldType::from_schema_name(&name) {
            Some(ty) => SchemaType::Known(ty),
            None => SchemaType::Unsupported(name),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        SchemaType::from(name.to_string())
    }
}

impl From<FieldType> for SchemaType {
    fn from(ty: FieldType) -> Self {
        SchemaType::Known(ty)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `length` attribute of a string field.
///
/// Lengths are not validated. Any scalar the host passes is kept as text and
/// rendered verbatim, so `12.5` or `"MAX"` reach the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldLength {
    Number(i64),
    Raw(String),
}

impl From<i64> for FieldLength {
    fn from(n: i64) -> Self {
        FieldLength::Number(n)
    }
}

impl From<&str> for FieldLength {
    fn from(raw: &str) -> Self {
        FieldLength::Raw(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LengthVisitor;

        impl<'de> Visitor<'de> for LengthVisitor {
            type Value = FieldLength;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, string or boolean length")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(FieldLength::Number(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(match i64::try_from(v) {
                    Ok(n) => FieldLength::Number(n),
                    Err(_) => FieldLength::Raw(v.to_string()),
                })
            }

            // Debug keeps the fractional part (`50.0`, `12.5`) as JSON writes it.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(FieldLength::Raw(format!("{:?}", v)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(FieldLength::Raw(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(FieldLength::Raw(v.to_string()))
            }
        }

        deserializer.deserialize_any(LengthVisitor)
    }
}

impl fmt::Display for FieldLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLength::Number(n) => write!(f, "{}", n),
            FieldLength::Raw(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_as_str() {
        assert_eq!(FieldType::String.as_str(), "string");
        assert_eq!(FieldType::Integer.as_str(), "integer");
        assert_eq!(FieldType::Boolean.as_str(), "boolean");
    }

    #[test]
    fn test_field_type_from_schema_name() {
        assert_eq!(FieldType::from_schema_name("integer"), Some(FieldType::Integer));
        assert_eq!(FieldType::from_schema_name("Integer"), None);
        assert_eq!(FieldType::from_schema_name("int"), None);
    }

    #[test]
    fn test_schema_type_keeps_unknown_name() {
        let ty = SchemaType::from("date");
        assert_eq!(ty, SchemaType::Unsupported("date".to_string()));
        assert_eq!(ty.known(), None);
        assert_eq!(ty.to_string(), "date");

        assert_eq!(SchemaType::from("boolean").known(), Some(FieldType::Boolean));
    }

    #[test]
    fn test_field_length_display() {
        assert_eq!(FieldLength::Number(50).to_string(), "50");
        assert_eq!(FieldLength::from("fifty").to_string(), "fifty");
    }

    #[test]
    fn test_field_length_deserialize() {
        let n: FieldLength = serde_json::from_str("255").unwrap();
        assert_eq!(n, FieldLength::Number(255));

        let raw: FieldLength = serde_json::from_str("\"MAX\"").unwrap();
        assert_eq!(raw, FieldLength::Raw("MAX".to_string()));
    }

    #[test]
    fn test_field_length_deserialize_any_scalar() {
        let length = |json: &str| serde_json::from_str::<FieldLength>(json).unwrap().to_string();

        assert_eq!(length("12.5"), "12.5");
        assert_eq!(length("50.0"), "50.0");
        assert_eq!(length("-3"), "-3");
        assert_eq!(length("18446744073709551615"), "18446744073709551615");
        assert_eq!(length("true"), "true");
    }

    #[test]
    fn test_field_length_rejects_containers() {
        assert!(serde_json::from_str::<FieldLength>("[50]").is_err());
        assert!(serde_json::from_str::<FieldLength>("{}").is_err());
    }
}
