//! Validated request fragments.

use fieldgen_codegen::{ListFormatter, Result, Separator, resolve_type};
use fieldgen_core::capitalize;
use fieldgen_ir::{FieldDescriptor, GenerationContext};

use super::value_type;

/// Request properties, each required one preceded by a `@NotNull`
/// validation annotation.
pub fn request_fields(fields: &[FieldDescriptor], ctx: &GenerationContext) -> Result<String> {
    ListFormatter::new(Separator::CommaNewline).try_join(fields, |field| -> Result<String> {
        let ty = resolve_type(field, ctx)?;
        let mut out = String::new();
        if !field.nullable {
            out.push_str(&format!(
                "\n\t@field:NotNull(message = \"{} is required\")",
                capitalize(&field.name)
            ));
        }
        out.push_str(&format!("\n\tval {}: {}", field.name, value_type(ty, field.nullable)));
        Ok(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields() {
        let fields = [
            FieldDescriptor::string("email"),
            FieldDescriptor::integer("age").nullable(),
        ];
        let out = request_fields(&fields, &GenerationContext::new("user")).unwrap();

        assert_eq!(
            out,
            "\n\t@field:NotNull(message = \"Email is required\")\n\tval email: String,\n\
             \n\tval age: Int?"
        );
        assert_eq!(out.matches("@field:NotNull").count(), 1);
        assert!(!out.ends_with(','));
    }

    #[test]
    fn test_request_fields_duplicate_names_keep_separator() {
        let fields = [
            FieldDescriptor::boolean("flag").nullable(),
            FieldDescriptor::boolean("flag").nullable(),
        ];
        assert_eq!(
            request_fields(&fields, &GenerationContext::new("user")).unwrap(),
            "\n\tval flag: Boolean?,\n\n\tval flag: Boolean?"
        );
    }
}
