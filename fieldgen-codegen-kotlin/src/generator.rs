//! Kotlin implementation of the fragment generator seam.

use fieldgen_codegen::{Error, FragmentGenerator, GeneratorKind, Result, Separator};
use fieldgen_core::{camel_to_snake, decapitalize, snake_to_lower_camel, snake_to_upper_camel};
use fieldgen_ir::{FieldDescriptor, GenerationContext};

use crate::fragments;

/// Error for a renderer called with the wrong kind of input.
fn wrong_shape(kind: GeneratorKind) -> Error {
    Error::InvalidInput {
        generator: kind.as_str(),
        expected: kind.shape().describe(),
    }
}

/// Kotlin generator producing Exposed tables, Ktor DTOs and migrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl FragmentGenerator for Generator {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn separator(&self, kind: GeneratorKind) -> Separator {
        match kind {
            GeneratorKind::ToFeatureDto
            | GeneratorKind::CreateDtoFields
            | GeneratorKind::DtoFields => Separator::None,
            GeneratorKind::ModelColumn
            | GeneratorKind::ColumnByFieldName
            | GeneratorKind::ApplyData
            | GeneratorKind::ModelMigrationColumns
            | GeneratorKind::ResponseFields => Separator::Newline,
            GeneratorKind::CreateFilterDtoFields => Separator::Comma,
            GeneratorKind::FilterDtoFields | GeneratorKind::RequestFields => {
                Separator::CommaNewline
            }
            GeneratorKind::Package
            | GeneratorKind::PackagePathFeature
            | GeneratorKind::CamelToSnake
            | GeneratorKind::SnakeToLowerCamel
            | GeneratorKind::SnakeToUpperCamel => Separator::None,
        }
    }

    fn field_fragment(
        &self,
        kind: GeneratorKind,
        field: &FieldDescriptor,
        ctx: &GenerationContext,
    ) -> Result<String> {
        match kind {
            GeneratorKind::ModelColumn => fragments::model_column(field, ctx),
            GeneratorKind::ColumnByFieldName => Ok(fragments::column_by_field_name(field)),
            GeneratorKind::ToFeatureDto => fragments::to_feature_dto(field, ctx),
            GeneratorKind::CreateDtoFields => Ok(fragments::create_dto_fields(field)),
            GeneratorKind::ApplyData => fragments::apply_data(field, ctx),
            GeneratorKind::DtoFields => fragments::dto_field(field, ctx),
            GeneratorKind::ModelMigrationColumns => fragments::model_migration_column(field, ctx),
            _ => Err(wrong_shape(kind)),
        }
    }

    fn sequence_fragment(
        &self,
        kind: GeneratorKind,
        fields: &[FieldDescriptor],
        ctx: &GenerationContext,
    ) -> Result<String> {
        match kind {
            GeneratorKind::CreateFilterDtoFields => fragments::create_filter_dto_fields(fields, ctx),
            GeneratorKind::FilterDtoFields => fragments::filter_dto_fields(fields, ctx),
            GeneratorKind::RequestFields => fragments::request_fields(fields, ctx),
            GeneratorKind::ResponseFields => fragments::response_fields(fields, ctx),
            _ => Err(wrong_shape(kind)),
        }
    }

    fn name_fragment(
        &self,
        kind: GeneratorKind,
        name: &str,
        ctx: &GenerationContext,
    ) -> Result<String> {
        match kind {
            GeneratorKind::Package => fragments::package(ctx),
            GeneratorKind::PackagePathFeature => fragments::package_path_feature(ctx),
            GeneratorKind::CamelToSnake => Ok(camel_to_snake(name)),
            GeneratorKind::SnakeToLowerCamel => Ok(decapitalize(&snake_to_lower_camel(name))),
            GeneratorKind::SnakeToUpperCamel => Ok(snake_to_upper_camel(name)),
            _ => Err(wrong_shape(kind)),
        }
    }
}
