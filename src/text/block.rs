//! Line blocks.
//!
//! A [`Block`] is the scratch form of multi-line text used inside layout
//! operations: the lines without their separators, the separator itself, and
//! whether the flat text ended with a separator. [`Block::new`] followed by
//! [`Block::join`] reproduces the original text exactly.

use crate::error::{Error, Result};
use crate::text::GraphemeString;

#[derive(Clone, Debug, Default)]
pub(crate) struct Block {
    lines: Vec<GraphemeString>,
    line_separator: GraphemeString,
    trailing_separator: bool,
}

impl Block {
    /// Split `text` on `sep`.
    ///
    /// A final empty piece left by a terminating separator is dropped and
    /// recorded as the trailing flag instead. Empty text gives no lines; text
    /// equal to `sep` gives one empty line with the trailing flag set.
    pub(crate) fn new(text: &GraphemeString, sep: &GraphemeString) -> Self {
        let mut block = Self::with_separator(sep.clone());
        if text.is_empty() {
            return block;
        }
        if sep.is_empty() {
            block.lines.push(text.clone());
            return block;
        }

        let flat = text.to_string();
        let sep_str = sep.to_string();
        let mut pieces: Vec<&str> = flat.split(sep_str.as_str()).collect();
        if pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
            block.trailing_separator = true;
        }
        block.lines = pieces.into_iter().map(GraphemeString::from).collect();
        block
    }

    /// An empty block joined by `sep`.
    pub(crate) fn with_separator(sep: GraphemeString) -> Self {
        Self {
            lines: Vec::new(),
            line_separator: sep,
            trailing_separator: false,
        }
    }

    pub(crate) fn from_lines(
        lines: Vec<GraphemeString>,
        sep: GraphemeString,
        trailing_separator: bool,
    ) -> Self {
        Self {
            lines,
            line_separator: sep,
            trailing_separator,
        }
    }

    pub(crate) fn lines(&self) -> &[GraphemeString] {
        &self.lines
    }

    pub(crate) fn into_lines(self) -> Vec<GraphemeString> {
        self.lines
    }

    pub(crate) fn line_separator(&self) -> &GraphemeString {
        &self.line_separator
    }

    pub(crate) fn set_trailing_separator(&mut self, trailing: bool) {
        self.trailing_separator = trailing;
    }

    pub(crate) fn append(&mut self, line: GraphemeString) {
        self.lines.push(line);
    }

    pub(crate) fn append_block(&mut self, other: &Self) {
        self.lines.extend_from_slice(&other.lines);
    }

    pub(crate) fn append_empty(&mut self, count: usize) {
        self.lines
            .extend(std::iter::repeat_n(GraphemeString::default(), count));
    }

    pub(crate) fn line(&self, i: usize) -> Result<&GraphemeString> {
        self.lines.get(i).ok_or(Error::OutOfRange {
            index: i,
            len: self.lines.len(),
        })
    }

    /// Cluster length of line `i`.
    pub(crate) fn char_count(&self, i: usize) -> Result<usize> {
        self.line(i).map(GraphemeString::len)
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace each line by the lines `op` returns for it.
    ///
    /// `op` sees the original lines in index order however many lines each
    /// call produces.
    pub(crate) fn apply<F>(&mut self, mut op: F)
    where
        F: FnMut(usize, &str) -> Vec<String>,
    {
        let mut applied = Vec::with_capacity(self.lines.len());
        for (idx, line) in self.lines.iter().enumerate() {
            applied.extend(op(idx, &line.to_string()).into_iter().map(GraphemeString::from));
        }
        self.lines = applied;
    }

    /// Flatten back to a single string.
    pub(crate) fn join(&self) -> GraphemeString {
        let sep = self.line_separator.to_string();
        let mut flat = self
            .lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&sep);
        if self.trailing_separator {
            flat.push_str(&sep);
        }
        GraphemeString::from(flat)
    }
}

// Trailing-flag query, in-place line edits and ordering; the layout
// operations rebuild blocks with `apply` and never call these.
#[allow(dead_code)]
impl Block {
    pub(crate) fn trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    pub(crate) fn set(&mut self, i: usize, line: GraphemeString) -> Result<()> {
        let len = self.lines.len();
        let slot = self
            .lines
            .get_mut(i)
            .ok_or(Error::OutOfRange { index: i, len })?;
        *slot = line;
        Ok(())
    }

    /// Remove line `i`; out-of-range indices are ignored.
    pub(crate) fn remove(&mut self, i: usize) {
        if i < self.lines.len() {
            self.lines.remove(i);
        }
    }

    pub(crate) fn less(&self, i: usize, j: usize) -> bool {
        self.lines[i].less(&self.lines[j])
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.lines.swap(i, j);
    }

    pub(crate) fn sort(&mut self) {
        self.lines.sort();
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.line_separator == other.line_separator
            && self.trailing_separator == other.trailing_separator
            && self.lines == other.lines
    }
}
