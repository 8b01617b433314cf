//! Response fragments.

use fieldgen_codegen::{ListFormatter, Result, Separator, require_feature_name, resolve_type};
use fieldgen_ir::{FieldDescriptor, GenerationContext};

use super::value_type;

/// Response properties initialised from the feature DTO.
pub fn response_fields(fields: &[FieldDescriptor], ctx: &GenerationContext) -> Result<String> {
    let feature = require_feature_name(ctx)?;
    let body = ListFormatter::new(Separator::Newline).try_join(fields, |field| -> Result<String> {
        let ty = resolve_type(field, ctx)?;
        Ok(format!(
            "\tval {}: {} = {}Dto.{}",
            field.name,
            value_type(ty, field.nullable),
            feature,
            field.name
        ))
    })?;
    Ok(format!("\n{}", body))
}
