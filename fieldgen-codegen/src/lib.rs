//! Shared fragment generation plumbing for the fieldgen fragment generator.
//!
//! This crate provides the language-agnostic pieces used by target-language
//! generators (e.g., `fieldgen-codegen-kotlin`).
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by every generator
//! - [`list`] - Separator-aware joining of per-field fragments
//! - [`generator`] - Generator kinds, fragment inputs and the [`FragmentGenerator`] trait
//! - [`resolve`] - Type and context resolution helpers for generators
//! - [`request`] - The fragment-generation call boundary used by template hosts

pub mod error;
pub mod generator;
pub mod list;
pub mod request;
pub mod resolve;

pub use error::{Error, Result};
pub use generator::{FragmentGenerator, FragmentInput, GeneratorKind, InputShape};
pub use list::{ListFormatter, Separator};
pub use request::{FragmentRequest, Options, decode_input, decode_options, invoke};
pub use resolve::{require_feature_name, resolve_type};
