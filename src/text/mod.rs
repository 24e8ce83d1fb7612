//! Grapheme-indexed text values.
//!
//! Key types:
//!
//! - [`GraphemeString`]: immutable text indexed by grapheme cluster
//! - [`END`]: position sentinel for "the end of the text"
//!
//! # Examples
//!
//! ```
//! use fixedtext::GraphemeString;
//!
//! let s = GraphemeString::from("franc\u{0327}ais");
//! assert_eq!(s.len(), 8);
//! assert_eq!(s.sub(3, 6).to_string(), "nc\u{0327}a");
//! ```

mod block;
mod gstring;
pub mod range;

pub(crate) use block::Block;
pub use gstring::GraphemeString;
pub use range::END;
