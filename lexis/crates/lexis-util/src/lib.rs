//! lexis-util - Foundation types shared by the lexer and its consumers
//!
//! The lexer engine and every downstream collaborator (parsers, diagnostic
//! printers, editors) talk about source locations in the same terms. This
//! crate holds those terms so that a consumer can depend on them without
//! pulling in the scanner itself.
//!
//! # Module Structure
//!
//! - [`span`] - Half-open byte ranges and line/column lookup
//! - [`error`] - Error types for location lookups
//!
//! # Example
//!
//! ```
//! use lexis_util::{LineIndex, Span};
//!
//! let source = "let x\nset x";
//! let first = Span::new(0, 3);
//! let second = Span::new(6, 9);
//!
//! assert_eq!(first.merge(second), Span::new(0, 9));
//! assert_eq!(second.slice(source), Some("set"));
//!
//! let index = LineIndex::new(source);
//! assert_eq!(index.line_col(second.start).unwrap(), (2, 1));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{LineIndex, Span};
