//! Size variant discriminator.

use serde::{Deserialize, Serialize};

/// Selected size for a product line.
///
/// Sizes are free-form labels taken from the page's size selector
/// ("S", "M", "L", ...). When no selector is active the page falls
/// back to [`Size::default`], which is `"M"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Create a size from a selector label.
    #[must_use]
    pub const fn new(label: String) -> Self {
        Self(label)
    }

    /// Get the underlying label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self("M".to_string())
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Size {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Size {
    fn from(label: String) -> Self {
        Self(label)
    }
}
