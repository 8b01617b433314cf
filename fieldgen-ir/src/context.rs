//! Generation context built from the host's named options.

use serde::Deserialize;

/// Package prefix used by `package` and `packagePathFeature`.
pub const DEFAULT_BASE_PACKAGE: &str = "com.icerockdev.feature";

/// What a generator does when a field's type is not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedTypePolicy {
    /// Fail the fragment with an error.
    #[default]
    Reject,
    /// Render the literal `null` in place of the mapped type.
    Degrade,
}

/// Named options for one fragment-generation call.
///
/// Unknown keys are rejected when deserializing, so a misspelled option
/// fails at the call boundary instead of silently being ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationContext {
    feature_name: String,
    #[serde(default = "default_base_package")]
    base_package: String,
    #[serde(default)]
    unsupported_types: UnsupportedTypePolicy,
}

fn default_base_package() -> String {
    DEFAULT_BASE_PACKAGE.to_string()
}

impl GenerationContext {
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            base_package: default_base_package(),
            unsupported_types: UnsupportedTypePolicy::default(),
        }
    }

    /// Override the package prefix.
    pub fn with_base_package(mut self, base_package: impl Into<String>) -> Self {
        self.base_package = base_package.into();
        self
    }

    /// Override the unsupported-type policy.
    pub fn with_unsupported_types(mut self, policy: UnsupportedTypePolicy) -> Self {
        self.unsupported_types = policy;
        self
    }

    /// The enclosing feature's name, exactly as the host passed it.
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn unsupported_types(&self) -> UnsupportedTypePolicy {
        self.unsupported_types
    }
}
