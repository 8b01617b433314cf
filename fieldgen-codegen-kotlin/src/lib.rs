//! Kotlin fragment generator for fieldgen.
//!
//! Renders Exposed table columns, Ktor DTO/request/response properties,
//! filter query extraction and migration columns from field descriptors.
//!
//! # Example
//!
//! ```
//! use fieldgen_codegen_kotlin::{Options, invoke};
//! use serde_json::json;
//!
//! let options: Options = serde_json::from_value(json!({ "featureName": "news" })).unwrap();
//! let column = invoke(
//!     "modelColumn",
//!     &json!({ "name": "title", "type": "string", "length": 50, "nullable": true }),
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(column, r#"val title: Column<String?> = varchar("title", 50).nullable()"#);
//! ```

mod generator;
mod type_mapper;

pub mod fragments;

pub use fieldgen_codegen::{Error, FragmentGenerator, FragmentRequest, GeneratorKind, Options, Result};
pub use generator::Generator;
pub use type_mapper::KotlinTypeMapper;

/// Run one fragment-generation call with the Kotlin generator.
pub fn invoke(name: &str, context: &serde_json::Value, options: &Options) -> Result<String> {
    fieldgen_codegen::invoke(&Generator, name, context, options)
}
