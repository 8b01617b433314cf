//! DTO and filter-DTO fragments.

use fieldgen_codegen::{ListFormatter, Result, Separator, require_feature_name, resolve_type};
use fieldgen_core::{capitalize, snake_to_lower_camel};
use fieldgen_ir::{FieldDescriptor, FieldType, GenerationContext};

use super::{NULL, value_type};

/// `,\n\ttitle = this[News.title]`, reading a column off a result row.
pub fn to_feature_dto(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<String> {
    let feature = capitalize(require_feature_name(ctx)?);
    Ok(format!(",\n\t{} = this[{}.{}]", field.name, feature, field.name))
}

/// `,\n\t\ttitle = this.title`, copying an entity property into a DTO.
pub fn create_dto_fields(field: &FieldDescriptor) -> String {
    format!(",\n\t\t{} = this.{}", field.name, field.name)
}

/// `,\n    val title: String? = null`
pub fn dto_field(field: &FieldDescriptor, ctx: &GenerationContext) -> Result<String> {
    let ty = match resolve_type(field, ctx)? {
        Some(ty) => value_type(Some(ty), field.nullable),
        None => NULL.to_string(),
    };
    let default = if field.nullable { " = null" } else { "" };
    Ok(format!(",\n    val {}: {}{}", field.name, ty, default))
}

/// Query-parameter extraction for every field, comma separated.
///
/// Integers are parsed with `toInt()`; booleans are true when the
/// parameter is present at all.
pub fn create_filter_dto_fields(fields: &[FieldDescriptor], ctx: &GenerationContext) -> Result<String> {
    ListFormatter::new(Separator::Comma).try_join(fields, |field| -> Result<String> {
        let Some(ty) = resolve_type(field, ctx)? else {
            return Ok(NULL.to_string());
        };
        let param = snake_to_lower_camel(&field.name);
        let suffix = match ty {
            FieldType::String => "",
            FieldType::Integer => "?.toInt()",
            FieldType::Boolean => " != null",
        };
        Ok(format!(
            "\n\t\t\t\t\t\t{} = call.parameters[\"{}\"]{}",
            param, param, suffix
        ))
    })
}

/// Filter DTO properties; every property is optional.
pub fn filter_dto_fields(fields: &[FieldDescriptor], ctx: &GenerationContext) -> Result<String> {
    let body = ListFormatter::new(Separator::CommaNewline).try_join(fields, |field| -> Result<String> {
        let ty = resolve_type(field, ctx)?;
        Ok(format!("\tval {}: {} = null", field.name, value_type(ty, true)))
    })?;
    Ok(format!("\n{}", body))
}

#[cfg(test)]
mod tests {
    use fieldgen_codegen::Error;
    use fieldgen_ir::UnsupportedTypePolicy;

    use super::*;

    fn ctx() -> GenerationContext {
        GenerationContext::new("news")
    }

    fn degraded() -> GenerationContext {
        ctx().with_unsupported_types(UnsupportedTypePolicy::Degrade)
    }

    #[test]
    fn test_to_feature_dto_capitalizes_feature() {
        assert_eq!(
            to_feature_dto(&FieldDescriptor::string("title"), &ctx()).unwrap(),
            ",\n\ttitle = this[News.title]"
        );
        assert!(matches!(
            to_feature_dto(&FieldDescriptor::string("title"), &GenerationContext::new("")),
            Err(Error::MissingFeatureName)
        ));
    }

    #[test]
    fn test_create_dto_fields() {
        assert_eq!(
            create_dto_fields(&FieldDescriptor::integer("views")),
            ",\n\t\tviews = this.views"
        );
    }

    #[test]
    fn test_dto_field() {
        assert_eq!(
            dto_field(&FieldDescriptor::string("title"), &ctx()).unwrap(),
            ",\n    val title: String"
        );
        assert_eq!(
            dto_field(&FieldDescriptor::integer("views").nullable(), &ctx()).unwrap(),
            ",\n    val views: Int? = null"
        );
    }

    #[test]
    fn test_dto_field_degraded() {
        assert_eq!(
            dto_field(&FieldDescriptor::new("created", "date").nullable(), &degraded()).unwrap(),
            ",\n    val created: null = null"
        );
    }

    #[test]
    fn test_create_filter_dto_fields() {
        let fields = [
            FieldDescriptor::string("title"),
            FieldDescriptor::integer("view_count"),
            FieldDescriptor::boolean("is_pinned"),
        ];

        assert_eq!(
            create_filter_dto_fields(&fields, &ctx()).unwrap(),
            "\n\t\t\t\t\t\ttitle = call.parameters[\"title\"],\
             \n\t\t\t\t\t\tviewCount = call.parameters[\"viewCount\"]?.toInt(),\
             \n\t\t\t\t\t\tisPinned = call.parameters[\"isPinned\"] != null"
        );
    }

    #[test]
    fn test_create_filter_dto_fields_separator_with_snake_names() {
        let fields = [
            FieldDescriptor::string("first_name"),
            FieldDescriptor::string("last_name"),
        ];

        let out = create_filter_dto_fields(&fields, &ctx()).unwrap();
        assert_eq!(out.matches(',').count(), 1);
        assert!(!out.ends_with(','));
    }

    #[test]
    fn test_create_filter_dto_fields_degraded() {
        let fields = [FieldDescriptor::new("created", "date"), FieldDescriptor::string("title")];
        assert_eq!(
            create_filter_dto_fields(&fields, &degraded()).unwrap(),
            "null,\n\t\t\t\t\t\ttitle = call.parameters[\"title\"]"
        );
    }

    #[test]
    fn test_filter_dto_fields() {
        let fields = [FieldDescriptor::string("title"), FieldDescriptor::integer("views")];
        assert_eq!(
            filter_dto_fields(&fields, &ctx()).unwrap(),
            "\n\tval title: String? = null,\n\tval views: Int? = null"
        );
    }

    #[test]
    fn test_filter_dto_fields_empty() {
        assert_eq!(filter_dto_fields(&[], &ctx()).unwrap(), "\n");
    }

    #[test]
    fn test_filter_dto_fields_unsupported() {
        let fields = [FieldDescriptor::new("created", "date")];

        assert!(matches!(
            filter_dto_fields(&fields, &ctx()),
            Err(Error::UnsupportedType { .. })
        ));
        assert_eq!(
            filter_dto_fields(&fields, &degraded()).unwrap(),
            "\n\tval created: null? = null"
        );
    }
}
