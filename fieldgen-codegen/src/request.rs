//! The fragment-generation call boundary.
//!
//! A template host calls [`invoke`] with a generator name, the value at the
//! placeholder and its named options. Everything is decoded and checked
//! here, before any generator runs.

use fieldgen_ir::{FieldDescriptor, FieldSequence, GenerationContext};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, FragmentGenerator, FragmentInput, GeneratorKind, Result, require_feature_name};

/// Named options passed by the host, in the host's order.
pub type Options = IndexMap<String, Value>;

/// Run one fragment-generation call.
pub fn invoke<G>(generator: &G, name: &str, context: &Value, options: &Options) -> Result<String>
where
    G: FragmentGenerator + ?Sized,
{
    let kind: GeneratorKind = name.parse()?;
    let ctx = decode_options(options)?;
    let input = decode_input(context)?;

    tracing::debug!(
        generator = kind.as_str(),
        language = generator.language(),
        feature = ctx.feature_name(),
        "rendering fragment"
    );
    generator.generate(kind, &input, &ctx)
}

/// Decode the host's named options into a [`GenerationContext`].
///
/// Unknown keys, wrongly typed values and a missing or blank `featureName`
/// are all rejected.
pub fn decode_options(options: &Options) -> Result<GenerationContext> {
    let object = options
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let ctx: GenerationContext =
        serde_json::from_value(Value::Object(object)).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })?;
    require_feature_name(&ctx)?;
    Ok(ctx)
}

/// Decode the placeholder value into a [`FragmentInput`].
///
/// The JSON kind picks the shape (string, object or array) before decoding,
/// so a bad key is reported by name instead of as an untagged mismatch.
pub fn decode_input(context: &Value) -> Result<FragmentInput> {
    let malformed = |e: serde_json::Error| Error::MalformedInput {
        message: e.to_string(),
    };
    let input = match context {
        Value::String(name) => FragmentInput::Name(name.clone()),
        Value::Object(_) => {
            FragmentInput::Field(FieldDescriptor::deserialize(context).map_err(malformed)?)
        }
        Value::Array(_) => {
            FragmentInput::Sequence(FieldSequence::deserialize(context).map_err(malformed)?)
        }
        other => {
            return Err(Error::MalformedInput {
                message: format!("expected a name, a field or a list of fields, found {}", other),
            });
        }
    };

    let fields: &[FieldDescriptor] = match &input {
        FragmentInput::Name(_) => &[],
        FragmentInput::Field(field) => std::slice::from_ref(field),
        FragmentInput::Sequence(fields) => &**fields,
    };
    if fields.iter().any(|field| field.name.is_empty()) {
        return Err(Error::EmptyFieldName);
    }
    Ok(input)
}

/// A whole fragment-generation call as one document.
///
/// ```json
/// { "generator": "modelColumn", "context": { "name": "title", "type": "string" }, "options": { "featureName": "news" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentRequest {
    pub generator: String,
    pub context: Value,
    #[serde(default)]
    pub options: Options,
}

impl FragmentRequest {
    /// Run this call against `generator`.
    pub fn invoke<G>(&self, generator: &G) -> Result<String>
    where
        G: FragmentGenerator + ?Sized,
    {
        invoke(generator, &self.generator, &self.context, &self.options)
    }
}
