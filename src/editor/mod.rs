//! The immutable text editor.
//!
//! An [`Editor`] holds a text value and the [`Options`] that govern how it
//! is split into lines and paragraphs. Every operation returns a new editor
//! and leaves its receiver untouched, so calls chain:
//!
//! ```
//! use fixedtext::Editor;
//!
//! let text = Editor::new("Hello, World!").chars(5, 7).indent(1).commit();
//! assert_eq!(text.text(), "Hello\t, World!");
//! ```
//!
//! Positions count grapheme clusters. Negative positions count back from the
//! end, out-of-range positions clamp, and [`END`](crate::END) always means
//! the current end of the text.

mod operations;
mod subeditor;

use std::fmt;
use std::sync::Arc;

use crate::options::Options;
use crate::text::{Block, GraphemeString};

/// The parent snapshot a sub-editor commits back into.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ParentRef {
    editor: Editor,
    /// Byte range of `editor.text` that the sub-editor replaces.
    start: usize,
    end: usize,
}

/// Immutable text value with layout operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    text: String,
    options: Options,
    parent: Option<Arc<ParentRef>>,
}

impl Editor {
    /// Create an editor over `text` with default options.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Options::default(),
            parent: None,
        }
    }

    /// Copy with `options` replacing the current options.
    #[must_use]
    pub fn with_options(&self, options: Options) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// The editor's own text. For a sub-editor this is only the selected
    /// region; use [`Editor::into_string`] or `to_string()` for the whole
    /// committed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of lines in the text.
    ///
    /// A final separator terminates the last line rather than starting a new
    /// one, unless `no_trailing_line_separators` is set.
    #[must_use]
    pub fn line_count(&self) -> usize {
        let opts = self.options.clone().with_defaults();
        line_block(&self.text, &opts).len()
    }

    /// Commit every sub-editor level and return the full text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.commit_all().text
    }

    fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sub_editor() {
            f.write_str(&self.commit_all().text)
        } else {
            f.write_str(&self.text)
        }
    }
}

impl From<&str> for Editor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Editor {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Lines of `text` as a block that joins back to `text`.
///
/// A final separator terminates the last line rather than starting a new
/// one. With `no_trailing_line_separators` nothing is consumed and a final
/// separator yields a real empty last line.
fn line_block(text: &str, opts: &Options) -> Block {
    let sep = GraphemeString::from(opts.line_separator.as_str());
    if opts.no_trailing_line_separators() {
        let lines = text
            .split(opts.line_separator.as_str())
            .map(GraphemeString::from)
            .collect();
        return Block::from_lines(lines, sep, false);
    }
    Block::new(&GraphemeString::from(text), &sep)
}
