//! Schema-migration column fragments.

use fieldgen_codegen::{Result, resolve_type};
use fieldgen_core::{TypeMapper, camel_to_snake};
use fieldgen_ir::{FieldDescriptor, GenerationContext};

use crate::KotlinTypeMapper;

/// `varchar("title", size = 50, nullable = false)`
///
/// Nullability is always spelled out. In degraded mode the schema type name
/// takes the place of the call name, e.g. `date(nullable = false)`.
pub fn model_migration_column(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<String> {
    let Some(ty) = resolve_type(field, ctx)? else {
        return Ok(format!("{}(nullable = {})", field.ty, field.nullable));
    };
    Ok(KotlinTypeMapper.map_migration_column(
        ty,
        &camel_to_snake(&field.name),
        &field.effective_length(),
        field.nullable,
    ))
}

#[cfg(test)]
mod tests {
    use fieldgen_ir::UnsupportedTypePolicy;

    use super::*;

    #[test]
    fn test_migration_columns() {
        let ctx = GenerationContext::new("news");

        assert_eq!(
            model_migration_column(&FieldDescriptor::string("authorName").with_length(64), &ctx)
                .unwrap(),
            "varchar(\"author_name\", size = 64, nullable = false)"
        );
        assert_eq!(
            model_migration_column(&FieldDescriptor::string("subtitle").nullable(), &ctx).unwrap(),
            "varchar(\"subtitle\", size = 100, nullable = true)"
        );
        assert_eq!(
            model_migration_column(&FieldDescriptor::integer("views"), &ctx).unwrap(),
            "integer(\"views\", nullable = false)"
        );
        assert_eq!(
            model_migration_column(&FieldDescriptor::boolean("pinned").nullable(), &ctx).unwrap(),
            "boolean(\"pinned\", nullable = true)"
        );
    }

    #[test]
    fn test_migration_unsupported_degraded() {
        let ctx = GenerationContext::new("news").with_unsupported_types(UnsupportedTypePolicy::Degrade);
        assert_eq!(
            model_migration_column(&FieldDescriptor::new("created", "date"), &ctx).unwrap(),
            "date(nullable = false)"
        );
        assert_eq!(
            model_migration_column(&FieldDescriptor::new("amount", "decimal").nullable(), &ctx)
                .unwrap(),
            "decimal(nullable = true)"
        );
    }
}
