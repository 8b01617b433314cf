//! Kotlin fragment renderers, one function per artifact kind.
//!
//! Fragments are spliced verbatim into the host's template output, so the
//! leading newlines, tabs and commas are part of each fragment's contract.

mod dto;
mod migration;
mod package;
mod request;
mod response;
mod table;

pub use dto::{create_dto_fields, create_filter_dto_fields, dto_field, filter_dto_fields, to_feature_dto};
pub use migration::model_migration_column;
pub use package::{package, package_path_feature};
pub use request::request_fields;
pub use response::response_fields;
pub use table::{apply_data, column_by_field_name, model_column};

use fieldgen_core::TypeMapper;
use fieldgen_ir::FieldType;

use crate::KotlinTypeMapper;

/// Placeholder rendered for unsupported types in degraded mode.
const NULL: &str = "null";

/// Kotlin value type, or `null` (plus the nullable marker) when the type
/// could not be resolved.
fn value_type(ty: Option<FieldType>, nullable: bool) -> String {
    match ty {
        Some(ty) => KotlinTypeMapper.map_value_type(ty, nullable),
        None if nullable => format!("{}?", NULL),
        None => NULL.to_string(),
    }
}
