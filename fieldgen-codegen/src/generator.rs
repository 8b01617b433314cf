//! Generator kinds and the language-specific generator seam.

use std::str::FromStr;

use fieldgen_ir::{FieldDescriptor, FieldSequence, GenerationContext};
use serde::Deserialize;

use crate::{Error, ListFormatter, Result, Separator};

/// Every artifact kind a template host can ask for, by host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Storage column declaration.
    ModelColumn,
    /// `"name" -> name` lookup arm.
    ColumnByFieldName,
    /// Storage row to DTO read.
    ToFeatureDto,
    /// Entity to DTO copy.
    CreateDtoFields,
    /// Query-parameter extraction for the filter DTO.
    CreateFilterDtoFields,
    /// DTO value assigned onto a storage row.
    ApplyData,
    /// DTO property declaration.
    DtoFields,
    /// Filter DTO property declarations.
    FilterDtoFields,
    /// Schema-migration column definition.
    ModelMigrationColumns,
    /// Validated request property declarations.
    RequestFields,
    /// Response property declarations.
    ResponseFields,
    /// Feature package name.
    Package,
    /// Feature package as a directory path.
    PackagePathFeature,
    /// camelCase to snake_case.
    CamelToSnake,
    /// snake_case to lowerCamelCase.
    SnakeToLowerCamel,
    /// snake_case to UpperCamelCase.
    SnakeToUpperCamel,
}

/// The input a generator is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// One field; a sequence renders every field and joins them.
    Field,
    /// A whole sequence; a single field is a sequence of one.
    Sequence,
    /// A plain name; a field contributes its `name`.
    Name,
}

impl InputShape {
    pub fn describe(&self) -> &'static str {
        match self {
            InputShape::Field => "a field or a sequence of fields",
            InputShape::Sequence => "a field or a sequence of fields",
            InputShape::Name => "a string or a field",
        }
    }
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 16] = [
        GeneratorKind::ModelColumn,
        GeneratorKind::ColumnByFieldName,
        GeneratorKind::ToFeatureDto,
        GeneratorKind::CreateDtoFields,
        GeneratorKind::CreateFilterDtoFields,
        GeneratorKind::ApplyData,
        GeneratorKind::DtoFields,
        GeneratorKind::FilterDtoFields,
        GeneratorKind::ModelMigrationColumns,
        GeneratorKind::RequestFields,
        GeneratorKind::ResponseFields,
        GeneratorKind::Package,
        GeneratorKind::PackagePathFeature,
        GeneratorKind::CamelToSnake,
        GeneratorKind::SnakeToLowerCamel,
        GeneratorKind::SnakeToUpperCamel,
    ];

    /// Get the name templates use to call this generator.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::ModelColumn => "modelColumn",
            GeneratorKind::ColumnByFieldName => "columnByFieldName",
            GeneratorKind::ToFeatureDto => "toFeatureDto",
            GeneratorKind::CreateDtoFields => "createDtoFields",
            GeneratorKind::CreateFilterDtoFields => "createFilterDtoFields",
            GeneratorKind::ApplyData => "applyData",
            GeneratorKind::DtoFields => "dtoFields",
            GeneratorKind::FilterDtoFields => "filterDtoFields",
            GeneratorKind::ModelMigrationColumns => "modelMigrationColumns",
            GeneratorKind::RequestFields => "requestFields",
            GeneratorKind::ResponseFields => "responseFields",
            GeneratorKind::Package => "package",
            GeneratorKind::PackagePathFeature => "packagePathFeature",
            GeneratorKind::CamelToSnake => "cts",
            GeneratorKind::SnakeToLowerCamel => "stl",
            GeneratorKind::SnakeToUpperCamel => "stu",
        }
    }

    pub fn shape(&self) -> InputShape {
        match self {
            GeneratorKind::ModelColumn
            | GeneratorKind::ColumnByFieldName
            | GeneratorKind::ToFeatureDto
            | GeneratorKind::CreateDtoFields
            | GeneratorKind::ApplyData
            | GeneratorKind::DtoFields
            | GeneratorKind::ModelMigrationColumns => InputShape::Field,
            GeneratorKind::CreateFilterDtoFields
            | GeneratorKind::FilterDtoFields
            | GeneratorKind::RequestFields
            | GeneratorKind::ResponseFields => InputShape::Sequence,
            GeneratorKind::Package
            | GeneratorKind::PackagePathFeature
            | GeneratorKind::CamelToSnake
            | GeneratorKind::SnakeToLowerCamel
            | GeneratorKind::SnakeToUpperCamel => InputShape::Name,
        }
    }

    /// Comma-separated list of every host name.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| Error::UnknownGenerator {
                name: name.to_string(),
                available: Self::available(),
            })
    }
}

/// The context value a template host passes to a generator.
///
/// Deserializes from a string, a field object or an array of fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FragmentInput {
    Name(String),
    Field(FieldDescriptor),
    Sequence(FieldSequence),
}

impl From<FieldDescriptor> for FragmentInput {
    fn from(field: FieldDescriptor) -> Self {
        FragmentInput::Field(field)
    }
}

impl From<FieldSequence> for FragmentInput {
    fn from(fields: FieldSequence) -> Self {
        FragmentInput::Sequence(fields)
    }
}

impl From<&str> for FragmentInput {
    fn from(name: &str) -> Self {
        FragmentInput::Name(name.to_string())
    }
}

/// Trait for target-language fragment generators.
///
/// Implementors render one artifact kind at a time. Implementations must be
/// stateless so a host can call them from several threads at once.
pub trait FragmentGenerator {
    /// Target language identifier (e.g., "kotlin")
    fn language(&self) -> &'static str;

    /// Separator placed between per-field fragments of `kind`.
    fn separator(&self, kind: GeneratorKind) -> Separator;

    /// Render a [`InputShape::Field`] generator for one field.
    fn field_fragment(
        &self,
        kind: GeneratorKind,
        field: &FieldDescriptor,
        ctx: &GenerationContext,
    ) -> Result<String>;

    /// Render a [`InputShape::Sequence`] generator for an ordered sequence.
    fn sequence_fragment(
        &self,
        kind: GeneratorKind,
        fields: &[FieldDescriptor],
        ctx: &GenerationContext,
    ) -> Result<String>;

    /// Render a [`InputShape::Name`] generator.
    fn name_fragment(&self, kind: GeneratorKind, name: &str, ctx: &GenerationContext)
    -> Result<String>;

    /// Render `kind` for whatever input the host supplied.
    fn generate(
        &self,
        kind: GeneratorKind,
        input: &FragmentInput,
        ctx: &GenerationContext,
    ) -> Result<String> {
        match (kind.shape(), input) {
            (InputShape::Field, FragmentInput::Field(field)) => {
                self.field_fragment(kind, field, ctx)
            }
            (InputShape::Field, FragmentInput::Sequence(fields)) => {
                ListFormatter::new(self.separator(kind))
                    .try_join(fields.iter(), |field| self.field_fragment(kind, field, ctx))
            }
            (InputShape::Sequence, FragmentInput::Field(field)) => {
                self.sequence_fragment(kind, std::slice::from_ref(field), ctx)
            }
            (InputShape::Sequence, FragmentInput::Sequence(fields)) => {
                self.sequence_fragment(kind, fields, ctx)
            }
            (InputShape::Name, FragmentInput::Name(name)) => self.name_fragment(kind, name, ctx),
            (InputShape::Name, FragmentInput::Field(field)) => {
                self.name_fragment(kind, &field.name, ctx)
            }
            (shape, _) => Err(Error::InvalidInput {
                generator: kind.as_str(),
                expected: shape.describe(),
            }),
        }
    }
}
