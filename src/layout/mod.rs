//! Fixed-width layout primitives.
//!
//! Everything here measures text in grapheme clusters and assumes each
//! cluster occupies one column.

pub(crate) mod align;
pub(crate) mod columns;
pub(crate) mod justify;
pub(crate) mod space;
pub(crate) mod table;
pub(crate) mod wrap;

pub use align::Alignment;
