use alloc::sync::Arc;

use crate::types::ErrorLocationProvider;

/// A byte span inside one source string.
///
/// The `input` is shared between every token lexed from the same source. Two
/// locations describe positions in the same text only when their `input`
/// points at the same allocation: macro bodies are lexed from their own
/// strings, so a token coming out of an expansion never merges with a token
/// from the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// The source text the offsets refer to. Its identity is the source id.
    pub input: Arc<str>,
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl SourceLocation {
    /// Creates a location inside `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use katex_parser::types::SourceLocation;
    /// use std::sync::Arc;
    ///
    /// let loc = SourceLocation::new(Arc::from("x^2"), 1, 2);
    /// assert_eq!(loc.text(), "^");
    /// ```
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// Creates a location over a freshly allocated copy of `input`.
    #[must_use]
    pub fn from_str(input: &str, start: usize, end: usize) -> Self {
        Self::new(Arc::from(input), start, end)
    }

    /// Inclusive start byte offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end byte offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The whole source text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The slice of the source covered by this span.
    #[must_use]
    pub fn text(&self) -> &str {
        self.input.get(self.start..self.end).unwrap_or_default()
    }

    /// Whether both locations were produced from the same source string.
    #[must_use]
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.input, &other.input)
    }

    /// Merges two locations into one spanning from the start of `first` to the
    /// end of `second`.
    ///
    /// A missing side yields the other one. Locations from different sources
    /// cannot be merged and yield `None`.
    #[must_use]
    pub fn range(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        match (first, second) {
            (Some(first), None) => Some(first),
            (None, Some(second)) => Some(second),
            (Some(first), Some(second)) => {
                if !first.same_source(&second) {
                    return None;
                }
                Some(Self {
                    input: first.input,
                    start: first.start,
                    end: second.end,
                })
            }
            (None, None) => None,
        }
    }
}

/// Merging spans through references, used when the caller still needs the
/// nodes the spans belong to.
pub trait SourceRangeRef {
    /// Merge `self` and `second` without consuming either.
    #[must_use]
    fn range_ref(self, second: Self) -> Option<SourceLocation>;
}

impl SourceRangeRef for Option<&SourceLocation> {
    fn range_ref(self, second: Self) -> Option<SourceLocation> {
        SourceLocation::range(self.cloned(), second.cloned())
    }
}

impl ErrorLocationProvider for SourceLocation {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(self)
    }
}

// Only the offsets are serialized; the source is the caller's own input.
#[cfg(feature = "serde")]
impl serde::Serialize for SourceLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct as _;

        let mut state = serializer.serialize_struct("SourceLocation", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_accessors() {
        let loc = SourceLocation::from_str(r"\frac12", 0, 5);

        assert_eq!(loc.start(), 0);
        assert_eq!(loc.end(), 5);
        assert_eq!(loc.input(), r"\frac12");
        assert_eq!(loc.text(), r"\frac");
    }

    #[test]
    fn test_range_same_source() {
        let input: Arc<str> = Arc::from("a+b+c");
        let first = SourceLocation::new(Arc::clone(&input), 0, 1);
        let second = SourceLocation::new(Arc::clone(&input), 4, 5);

        let merged = SourceLocation::range(Some(first.clone()), Some(second)).unwrap();
        assert_eq!((merged.start(), merged.end()), (0, 5));

        let only_first = SourceLocation::range(Some(first), None).unwrap();
        assert_eq!(only_first.end(), 1);
        assert!(SourceLocation::range(None, None).is_none());
    }

    #[test]
    fn test_range_different_sources_do_not_merge() {
        // Same text, different allocations: these are different sources.
        let first = SourceLocation::from_str("a+b", 0, 1);
        let second = SourceLocation::from_str("a+b", 2, 3);

        assert!(!first.same_source(&second));
        assert!(SourceLocation::range(Some(first.clone()), Some(second.clone())).is_none());
        assert!(Some(&first).range_ref(Some(&second)).is_none());
    }
}
