//! Core utilities and types for the fieldgen fragment generator.
//!
//! This crate provides the naming conventions and the type-mapping seam
//! shared by every target language.

mod naming;
mod type_mapper;

// Naming conventions
pub use naming::{
    camel_to_snake, capitalize, decapitalize, snake_to_lower_camel, snake_to_upper_camel,
};
// Type mapping
pub use type_mapper::TypeMapper;
