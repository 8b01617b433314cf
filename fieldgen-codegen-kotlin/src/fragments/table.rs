//! Exposed table fragments.

use fieldgen_codegen::{Result, require_feature_name, resolve_type};
use fieldgen_core::{TypeMapper, camel_to_snake};
use fieldgen_ir::{FieldDescriptor, GenerationContext};

use super::{NULL, value_type};
use crate::KotlinTypeMapper;

/// `val title: Column<String?> = varchar("title", 50).nullable()`
pub fn model_column(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<String> {
    let Some(ty) = resolve_type(field, ctx)? else {
        return Ok(format!("val {}: {}", field.name, NULL));
    };
    let call = KotlinTypeMapper.map_storage_column(
        ty,
        &camel_to_snake(&field.name),
        &field.effective_length(),
        field.nullable,
    );
    Ok(format!(
        "val {}: Column<{}> = {}",
        field.name,
        value_type(Some(ty), field.nullable),
        call
    ))
}

/// `"title" -> title`, an arm of a field lookup by external key.
pub fn column_by_field_name(field: &FieldDescriptor) -> String {
    format!("\"{}\" -> {}", field.name, field.name)
}

/// `it[title] = newsDto.title`
pub fn apply_data(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<String> {
    let feature = require_feature_name(ctx)?;
    Ok(format!("it[{}] = {}Dto.{}", field.name, feature, field.name))
}
