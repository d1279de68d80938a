//! Separator configuration

use serde::{Deserialize, Serialize};

/// Field separator used when none is configured
pub const DEFAULT_FIELD_SEPARATOR: &str = ", ";

/// Key-value separator used when none is configured
pub const DEFAULT_KV_SEPARATOR: &str = " = ";

/// Separators used when rendering a dump
///
/// Missing fields fall back to the defaults when deserialized, so a host
/// logging config can override just one of them:
///
/// ```rust
/// # use dump::Separators;
/// let seps: Separators = serde_json::from_str(r#"{ "field": "\n" }"#).unwrap();
/// assert_eq!(seps.kv, " = ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Inserted between successive `name = value` pairs
    pub field: String,

    /// Inserted between a name and its value
    pub kv: String,
}

impl Separators {
    /// Create a separator pair
    #[must_use]
    pub fn new(field: impl Into<String>, kv: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kv: kv.into(),
        }
    }

    /// One field per line, for large internal-state dumps
    #[must_use]
    pub fn multiline() -> Self {
        Self::new("\n", DEFAULT_KV_SEPARATOR)
    }

    /// `key=value` pairs separated by spaces
    #[must_use]
    pub fn logfmt() -> Self {
        Self::new(" ", "=")
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_SEPARATOR, DEFAULT_KV_SEPARATOR)
    }
}
