//! Type mapping between schema field types and target-language code.

use fieldgen_ir::{FieldLength, FieldType};

/// Trait for mapping schema field types to target-language fragments.
///
/// Implement this trait for each target language/persistence library. All
/// methods are pure functions of their arguments.
pub trait TypeMapper {
    /// Map a field type to the value type used by storage columns, DTOs,
    /// requests and responses.
    fn map_field_type(&self, ty: FieldType) -> &'static str;

    /// Map a field type to its nullable value type.
    fn map_nullable_field_type(&self, ty: FieldType) -> String;

    /// Map a field type to a value type with the given nullability.
    fn map_value_type(&self, ty: FieldType, nullable: bool) -> String {
        if nullable {
            self.map_nullable_field_type(ty)
        } else {
            self.map_field_type(ty).to_string()
        }
    }

    /// Render the storage-column builder call, including any nullability
    /// modifier.
    fn map_storage_column(
        &self,
        ty: FieldType,
        column: &str,
        length: &FieldLength,
        nullable: bool,
    ) -> String;

    /// Render the schema-migration column call. Nullability is always
    /// spelled out.
    fn map_migration_column(
        &self,
        ty: FieldType,
        column: &str,
        length: &FieldLength,
        nullable: bool,
    ) -> String;
}
