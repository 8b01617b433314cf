//! Naming convention converters.
//!
//! Every function here is a pure `&str -> String` transform over ASCII
//! letter boundaries. There is no cached matcher state, so the converters
//! can be called from any number of threads at once.

/// Convert camelCase to snake_case (e.g., "featureName" -> "feature_name").
///
/// An underscore is inserted before every ASCII upper-case letter that
/// directly follows an ASCII letter, then the whole string is lower-cased.
/// Runs of capitals split on every letter ("HTTPServer" -> "h_t_t_p_server").
pub fn camel_to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_alphabetic()) {
            result.push('_');
        }
        result.push(c);
        prev = Some(c);
    }
    result.to_lowercase()
}

/// Convert snake_case to lowerCamelCase (e.g., "feature_name" -> "featureName").
///
/// Each `_` followed by an ASCII letter is dropped and the letter is
/// upper-cased. Other characters, including the first one, are kept as is.
pub fn snake_to_lower_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && next.is_ascii_alphabetic() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Convert snake_case to UpperCamelCase (e.g., "feature_name" -> "FeatureName").
pub fn snake_to_upper_camel(s: &str) -> String {
    capitalize(&snake_to_lower_camel(s))
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
