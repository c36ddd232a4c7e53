//! Shared, immutable views into the parsed source text.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// A byte range of the original source, backed by a shared buffer.
///
/// Descriptors keep one of these instead of a pointer back into the syntax
/// tree, so they stay valid (and `Send + Sync`) after the tree is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Snippet {
    source: Arc<str>,
    range: Range<usize>,
}

impl Snippet {
    /// Build a snippet over `range` of `source`.
    ///
    /// A range that falls outside `source` or off a char boundary is
    /// clamped to an empty snippet rather than panicking later.
    #[must_use]
    pub fn new(source: &Arc<str>, range: Range<usize>) -> Self {
        let range = if source.get(range.clone()).is_some() {
            range
        } else {
            0..0
        };
        Self {
            source: Arc::clone(source),
            range,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source[self.range.clone()]
    }
}

impl AsRef<str> for Snippet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snippet")
            .field("range", &self.range)
            .field("text", &self.as_str())
            .finish()
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
