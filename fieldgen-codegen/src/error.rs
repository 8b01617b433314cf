//! Errors raised while generating fragments.

use fieldgen_ir::FieldDescriptor;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for fragment generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported type '{ty}' for field '{field}'")]
    #[diagnostic(
        code(fieldgen::unsupported_type),
        help(
            "supported types are: string, integer, boolean. Pass unsupportedTypes = \"degrade\" to render `null` instead"
        )
    )]
    UnsupportedType { field: String, ty: String },

    #[error("missing feature name")]
    #[diagnostic(
        code(fieldgen::missing_feature_name),
        help("pass a non-empty `featureName` option")
    )]
    MissingFeatureName,

    #[error("field name must not be empty")]
    #[diagnostic(code(fieldgen::empty_field_name))]
    EmptyFieldName,

    #[error("unknown generator '{name}'")]
    #[diagnostic(
        code(fieldgen::unknown_generator),
        help("available generators: {available}")
    )]
    UnknownGenerator { name: String, available: String },

    #[error("invalid generation options: {message}")]
    #[diagnostic(code(fieldgen::invalid_options))]
    InvalidOptions { message: String },

    #[error("generator '{generator}' expects {expected}")]
    #[diagnostic(code(fieldgen::invalid_input))]
    InvalidInput {
        generator: &'static str,
        expected: &'static str,
    },

    #[error("malformed fragment context: {message}")]
    #[diagnostic(
        code(fieldgen::malformed_input),
        help("pass a string, a field object with `name` and `type`, or an array of fields")
    )]
    MalformedInput { message: String },
}

impl Error {
    /// Create an unsupported type error for a field.
    pub fn unsupported_type(field: &FieldDescriptor) -> Self {
        Error::UnsupportedType {
            field: field.name.clone(),
            ty: field.ty.to_string(),
        }
    }
}
