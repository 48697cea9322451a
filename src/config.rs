//! Loader configuration
//!
//! This module provides the options that decide how forgiving the adjacency list loader is
//! with irregular input. The permissive default accepts anything that can be split into
//! tokens; the strict preset turns every irregularity into an error.

/// Configuration for parsing adjacency lists
///
/// Whatever the configuration, a line always consists of a subject name followed by zero
/// or more destination names. The options only control what happens with input that does
/// not follow the canonical form of single-space separated tokens on non-empty lines.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Graph, LoaderConfig};
///
/// let input = "A  B\r\n";
///
/// assert!(Graph::from_adjacency_with(input, &LoaderConfig::permissive()).is_ok());
/// assert!(Graph::from_adjacency_with(input, &LoaderConfig::strict()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoaderConfig {
    /// Skip lines that are empty or contain only whitespace
    /// When disabled, such lines are rejected as malformed
    pub skip_blank_lines: bool,

    /// Tolerate leading, trailing and repeated whitespace, including tabs
    /// When disabled, tokens must be separated by exactly one space
    pub allow_repeated_separators: bool,

    /// Maximum length of a node name in bytes (0 = unlimited)
    pub max_name_len: usize,

    /// Reject input that does not contain a single node
    pub reject_empty: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            allow_repeated_separators: true,
            max_name_len: 0,
            reject_empty: false,
        }
    }
}

impl LoaderConfig {
    /// Creates the permissive configuration, identical to [`LoaderConfig::default`]
    ///
    /// Blank lines are skipped, any run of whitespace separates tokens, names have no
    /// length limit and empty input yields an empty graph.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects every irregularity
    ///
    /// Blank lines, irregular whitespace and names longer than 64 bytes are reported as
    /// [`Error::Malformed`](crate::Error::Malformed), empty input as
    /// [`Error::Empty`](crate::Error::Empty).
    #[must_use]
    pub fn strict() -> Self {
        Self {
            skip_blank_lines: false,
            allow_repeated_separators: false,
            max_name_len: 64,
            reject_empty: true,
        }
    }

    /// Returns `true` if `name` fits into the configured length limit
    #[must_use]
    pub fn name_fits(&self, name: &str) -> bool {
        self.max_name_len == 0 || name.len() <= self.max_name_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_presets() {
        let permissive = LoaderConfig::permissive();
        assert!(permissive.skip_blank_lines);
        assert!(permissive.allow_repeated_separators);
        assert_eq!(permissive.max_name_len, 0);
        assert!(!permissive.reject_empty);

        let strict = LoaderConfig::strict();
        assert!(!strict.skip_blank_lines);
        assert!(!strict.allow_repeated_separators);
        assert_eq!(strict.max_name_len, 64);
        assert!(strict.reject_empty);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(LoaderConfig::default(), LoaderConfig::permissive());
    }

    #[test]
    fn test_name_fits() {
        let long = "x".repeat(65);

        assert!(LoaderConfig::permissive().name_fits(&long));
        assert!(!LoaderConfig::strict().name_fits(&long));
        assert!(LoaderConfig::strict().name_fits(&long[..64]));
    }
}
