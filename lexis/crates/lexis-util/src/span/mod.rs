//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into a source buffer.
//! Spans carry no line or column information; use [`LineIndex`] to turn a
//! byte offset into a human-readable position when one is needed.
//!
//! # Examples
//!
//! ```
//! use lexis_util::span::Span;
//!
//! let span = Span::new(10, 20);
//! assert_eq!(span.len(), 10);
//!
//! // `+` is shorthand for `merge`
//! let whole = Span::new(10, 20) + Span::new(25, 35);
//! assert_eq!(whole, Span::new(10, 35));
//! ```

mod line_index;

pub use line_index::LineIndex;

use std::ops::Add;

/// Source location span
///
/// Byte offsets always fall on UTF-8 character boundaries when produced by
/// the lexer.
///
/// # Examples
///
/// ```
/// use lexis_util::span::Span;
///
/// let span = Span::new(4, 7);
/// assert_eq!(span.slice("let foo"), Some("foo"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// let point = Span::point(5);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if this span contains another span
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The resulting span starts at the minimum of both starts
    /// and ends at the maximum of both ends. Merging is associative and
    /// commutative, so tokens may be folded in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// let span1 = Span::new(10, 20);
    /// let span2 = Span::new(25, 35);
    /// let merged = span1.merge(span2);
    /// assert_eq!(merged.start, 10);
    /// assert_eq!(merged.end, 35);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Join two adjacent spans into a single span
    ///
    /// Returns `None` if the spans are not adjacent (self.end != other.start).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// let joined = Span::new(10, 20).join(Span::new(20, 30));
    /// assert_eq!(joined, Some(Span::new(10, 30)));
    /// assert!(Span::new(10, 20).join(Span::new(25, 30)).is_none());
    /// ```
    #[inline]
    pub fn join(self, other: Span) -> Option<Span> {
        if self.end == other.start {
            Some(Span::new(self.start, other.end))
        } else {
            None
        }
    }

    /// Returns the text this span covers in `source`
    ///
    /// `None` when the span is out of bounds or splits a character.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl Add for Span {
    type Output = Span;

    #[inline]
    fn add(self, other: Span) -> Span {
        self.merge(other)
    }
}
