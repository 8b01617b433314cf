//! Package name fragments.

use fieldgen_codegen::{Result, require_feature_name};
use fieldgen_core::{decapitalize, snake_to_lower_camel};
use fieldgen_ir::GenerationContext;

/// `com.icerockdev.feature.userProfile`
pub fn package(ctx: &GenerationContext) -> Result<String> {
    let feature = require_feature_name(ctx)?;
    Ok(format!("{}.{}", ctx.base_package(), snake_to_lower_camel(feature)))
}

/// `com/icerockdev/feature/userProfile`
pub fn package_path_feature(ctx: &GenerationContext) -> Result<String> {
    let feature = require_feature_name(ctx)?;
    let package = format!(
        "{}.{}",
        ctx.base_package(),
        decapitalize(&snake_to_lower_camel(feature))
    );
    Ok(package.replace('.', "/"))
}
