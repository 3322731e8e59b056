//! Line index for computing human-readable positions.
//!
//! The lexer and its consumers work in byte offsets. [`LineIndex`] turns an
//! offset back into a 1-based line and column when a position has to be
//! shown to a person.

use crate::error::{SourceMapError, SourceMapResult};

/// Precomputed line start offsets for one source buffer
///
/// # Examples
///
/// ```
/// use lexis_util::span::LineIndex;
///
/// let index = LineIndex::new("line1\nline2\nline3");
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_col(6).unwrap(), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset where each line begins
    line_starts: Vec<usize>,
    /// Source text, kept to count columns in characters
    text: Box<str>,
}

impl LineIndex {
    /// Build the index for `source`
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            line_starts,
            text: source.into(),
        }
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 1-based `(line, column)` pair
    ///
    /// Columns count characters, not bytes. The offset one past the last
    /// byte is valid and names the end-of-input position.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_util::span::LineIndex;
    ///
    /// let index = LineIndex::new("αβ\nx");
    /// assert_eq!(index.line_col(2).unwrap(), (1, 2));
    /// assert_eq!(index.line_col(5).unwrap(), (2, 1));
    /// assert!(index.line_col(1).is_err());
    /// ```
    pub fn line_col(&self, offset: usize) -> SourceMapResult<(u32, u32)> {
        if offset > self.text.len() {
            return Err(SourceMapError::OffsetOutOfBounds {
                offset,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(offset) {
            return Err(SourceMapError::NotCharBoundary { offset });
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].chars().count();

        Ok((line as u32 + 1, column as u32 + 1))
    }
}
