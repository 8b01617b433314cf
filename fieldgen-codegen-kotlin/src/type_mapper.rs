//! Kotlin type mapper for Exposed tables and migrations.

use fieldgen_core::TypeMapper;
use fieldgen_ir::{FieldLength, FieldType};

/// Kotlin type mapper implementation.
///
/// Storage columns use the Exposed table DSL; migration columns use the
/// named-argument migration DSL.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_field_type(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::String => "String",
            FieldType::Integer => "Int",
            FieldType::Boolean => "Boolean",
        }
    }

    fn map_nullable_field_type(&self, ty: FieldType) -> String {
        format!("{}?", self.map_field_type(ty))
    }

    fn map_storage_column(
        &self,
        ty: FieldType,
        column: &str,
        length: &FieldLength,
        nullable: bool,
    ) -> String {
        let call = match ty {
            FieldType::String => format!("varchar(\"{}\", {})", column, length),
            FieldType::Integer => format!("integer(\"{}\")", column),
            FieldType::Boolean => format!("bool(\"{}\")", column),
        };
        if nullable {
            format!("{}.nullable()", call)
        } else {
            call
        }
    }

    fn map_migration_column(
        &self,
        ty: FieldType,
        column: &str,
        length: &FieldLength,
        nullable: bool,
    ) -> String {
        match ty {
            FieldType::String => format!(
                "varchar(\"{}\", size = {}, nullable = {})",
                column, length, nullable
            ),
            FieldType::Integer => format!("integer(\"{}\", nullable = {})", column, nullable),
            FieldType::Boolean => format!("boolean(\"{}\", nullable = {})", column, nullable),
        }
    }
}
