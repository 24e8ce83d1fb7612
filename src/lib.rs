//! `fixedtext` - Grapheme-aware fixed-width text layout
//!
//! An immutable, chainable editor over a text value with wrapping,
//! justification, alignment, two-column and table layout, indentation and
//! sub-region editing. All positions and widths count user-perceived
//! characters (extended grapheme clusters), so combining marks, emoji ZWJ
//! sequences and Hangul syllables each occupy exactly one column.
//!
//! ```
//! use fixedtext::{Editor, Options};
//!
//! let opts = Options::default().with_preserve_paragraphs(true);
//! let text = Editor::new("one two three four\n\nfive six")
//!     .with_options(opts)
//!     .wrap(9)
//!     .indent(1)
//!     .into_string();
//! assert_eq!(text, "\tone two\n\tthree\n\tfour\n\n\tfive six");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow text::GraphemeString etc
#![allow(clippy::missing_errors_doc)] // Error cases are covered by Error variants
#![allow(clippy::missing_panics_doc)] // Slicing only happens on computed boundaries
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Builders are already #[must_use] where it matters
#![allow(clippy::similar_names)] // start/end byte and cluster pairs
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

mod editor;
pub mod error;
pub mod event;
mod layout;
pub mod options;
mod paragraph;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use editor::Editor;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use layout::Alignment;
pub use options::{OptionFlags, Options};
pub use text::{END, GraphemeString};
pub use unicode::{grapheme_indices, graphemes};
