//! Intermediate representation types for the fieldgen fragment generator.
//!
//! This crate holds the in-memory shape of a feature schema as it is handed
//! over by the template host: one [`FieldDescriptor`] per schema entry, an
//! ordered [`FieldSequence`], and the [`GenerationContext`] built from the
//! host's named options.
//!
//! # Architecture
//!
//! ```text
//! host options + field table → fieldgen-ir (typed values) → codegen (fragments)
//! ```
//!
//! The IR types are designed to be:
//! - Immutable for the duration of a generation pass
//! - Target-language agnostic (no Kotlin/Exposed concerns)
//! - Deserializable from any serde format the host speaks

mod context;
mod field;
mod serde_helpers;
mod types;

pub use context::{DEFAULT_BASE_PACKAGE, GenerationContext, UnsupportedTypePolicy};
pub use field::{DEFAULT_STRING_LENGTH, FieldDescriptor, FieldSequence};
pub use types::{FieldLength, FieldType, SchemaType};
