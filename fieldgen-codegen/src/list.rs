//! Joining of repeated per-field fragments.
//!
//! The last element is found by position, never by comparing names, so a
//! sequence with duplicate field names is still separated correctly.

/// Separator inserted between two consecutive fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// Fragments are self-delimited.
    #[default]
    None,
    /// `,`
    Comma,
    /// `,\n`
    CommaNewline,
    /// `\n`
    Newline,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Comma => ",",
            Separator::CommaNewline => ",\n",
            Separator::Newline => "\n",
        }
    }
}

/// Stateless joiner for per-field fragments.
///
/// # Example
///
/// ```
/// use fieldgen_codegen::{ListFormatter, Separator};
///
/// let joined = ListFormatter::new(Separator::CommaNewline).join(["a", "b", "c"]);
/// assert_eq!(joined, "a,\nb,\nc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFormatter {
    separator: Separator,
}

impl ListFormatter {
    pub const fn new(separator: Separator) -> Self {
        Self { separator }
    }

    /// Join fragments, with no separator after the final one.
    pub fn join<I, S>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = String::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                result.push_str(self.separator.as_str());
            }
            result.push_str(fragment.as_ref());
        }
        result
    }

    /// Render every item and join the results, stopping at the first error.
    pub fn try_join<T, I, F, E>(&self, items: I, render: F) -> Result<String, E>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Result<String, E>,
    {
        let fragments = items
            .into_iter()
            .map(render)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(self.join(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_count() {
        let joined = ListFormatter::new(Separator::CommaNewline).join(["a", "b", "c"]);
        assert_eq!(joined.matches(",\n").count(), 2);
        assert!(!joined.ends_with(",\n"));

        let single = ListFormatter::new(Separator::CommaNewline).join(["a"]);
        assert_eq!(single, "a");
    }

    #[test]
    fn test_empty_input() {
        let joined = ListFormatter::new(Separator::Comma).join(Vec::<String>::new());
        assert_eq!(joined, "");
    }

    #[test]
    fn test_no_separator() {
        let joined = ListFormatter::default().join([",\n\ta", ",\n\tb"]);
        assert_eq!(joined, ",\n\ta,\n\tb");
    }

    #[test]
    fn test_duplicate_fragments_are_all_separated() {
        let joined = ListFormatter::new(Separator::Comma).join(["x", "x", "x"]);
        assert_eq!(joined, "x,x,x");
    }

    #[test]
    fn test_try_join_propagates_error() {
        let formatter = ListFormatter::new(Separator::Newline);

        let ok: Result<String, String> = formatter.try_join([1, 2], |n| Ok(n.to_string()));
        assert_eq!(ok.unwrap(), "1\n2");

        let err: Result<String, String> = formatter.try_join([1, 2, 3], |n| {
            if n == 2 {
                Err(format!("bad {}", n))
            } else {
                Ok(n.to_string())
            }
        });
        assert_eq!(err.unwrap_err(), "bad 2");
    }
}
