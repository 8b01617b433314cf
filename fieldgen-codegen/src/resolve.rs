//! Resolution helpers shared by generator implementations.

use fieldgen_ir::{FieldDescriptor, FieldType, GenerationContext, UnsupportedTypePolicy};

use crate::{Error, Result};

/// Get the feature name, failing when it is blank.
///
/// A blank qualifier would make the generated code reference an undefined
/// symbol, so this is always an error.
pub fn require_feature_name(ctx: &GenerationContext) -> Result<&str> {
    let name = ctx.feature_name();
    if name.trim().is_empty() {
        return Err(Error::MissingFeatureName);
    }
    Ok(name)
}

/// Resolve a field's type under the context's unsupported-type policy.
///
/// Returns `Ok(None)` only when the policy allows degraded output; the
/// caller then renders `null` in place of the mapped type.
pub fn resolve_type(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<Option<FieldType>> {
    match field.ty.known() {
        Some(ty) => Ok(Some(ty)),
        None => match ctx.unsupported_types() {
            UnsupportedTypePolicy::Reject => Err(Error::unsupported_type(field)),
            UnsupportedTypePolicy::Degrade => {
                tracing::warn!(
                    field = %field.name,
                    ty = %field.ty,
                    "unsupported field type, rendering null"
                );
                Ok(None)
            }
        },
    }
}
