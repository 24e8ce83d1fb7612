//! Paragraph splitting and rejoining.
//!
//! A paragraph separator `P` usually contains the line separator `S` (the
//! defaults are `"\n\n"` and `"\n"`). Splitting on `P` alone would let `P`
//! swallow an `S` that really ends the paragraph before it, so when `P S`
//! and `S P` spell the same string, an `S` found at the start of a paragraph
//! is handed back to the previous one.

use crate::event::{LogLevel, emit_log_with};

/// A paragraph separator resolved against a line separator.
#[derive(Clone, Debug)]
pub(crate) struct ParagraphSplitter {
    paragraph_sep: String,
    line_sep: String,
    prev_suffix: String,
    next_prefix: String,
    ambiguous: bool,
}

impl ParagraphSplitter {
    pub(crate) fn new(paragraph_sep: &str, line_sep: &str) -> Self {
        let (prev_suffix, next_prefix) = separator_fragments(paragraph_sep, line_sep);
        let ambiguous = !line_sep.is_empty()
            && format!("{paragraph_sep}{line_sep}") == format!("{line_sep}{paragraph_sep}");
        Self {
            paragraph_sep: paragraph_sep.to_string(),
            line_sep: line_sep.to_string(),
            prev_suffix,
            next_prefix,
            ambiguous,
        }
    }

    /// Part of `P` that closes the paragraph before it.
    pub(crate) fn prev_suffix(&self) -> &str {
        &self.prev_suffix
    }

    /// Part of `P` that opens the paragraph after it.
    pub(crate) fn next_prefix(&self) -> &str {
        &self.next_prefix
    }

    /// Split `text` into paragraphs with separator ownership resolved.
    ///
    /// Joining the result with `P` gives back `text`. Empty text is a single
    /// empty paragraph.
    pub(crate) fn split(&self, text: &str) -> Vec<String> {
        let mut paragraphs: Vec<String> = if self.paragraph_sep.is_empty() {
            vec![text.to_string()]
        } else {
            text.split(self.paragraph_sep.as_str())
                .map(str::to_string)
                .collect()
        };

        if self.ambiguous {
            for i in 0..paragraphs.len().saturating_sub(1) {
                if let Some(rest) = paragraphs[i + 1].strip_prefix(self.line_sep.as_str()) {
                    let rest = rest.to_string();
                    emit_log_with(LogLevel::Debug, || {
                        format!("line separator moved from paragraph {} to {i}", i + 1)
                    });
                    paragraphs[i].push_str(&self.line_sep);
                    paragraphs[i + 1] = rest;
                }
            }
        }
        paragraphs
    }

    /// Run `op` on every paragraph in order and join the results with `P`.
    ///
    /// `op` receives the paragraph index, the paragraph text, the fragment
    /// of `P` that precedes it (empty for the first) and the fragment that
    /// follows it (empty for the last). Each string it returns becomes one
    /// paragraph of the output, so returning nothing deletes the paragraph.
    pub(crate) fn apply<F>(&self, text: &str, mut op: F) -> String
    where
        F: FnMut(usize, &str, &str, &str) -> Vec<String>,
    {
        let paragraphs = self.split(text);
        let last = paragraphs.len().saturating_sub(1);
        let mut rendered: Vec<String> = Vec::with_capacity(paragraphs.len());
        for (i, para) in paragraphs.iter().enumerate() {
            let sep_prefix = if i > 0 { self.next_prefix() } else { "" };
            let sep_suffix = if i < last { self.prev_suffix() } else { "" };
            rendered.extend(op(i, para, sep_prefix, sep_suffix));
        }
        rendered.join(&self.paragraph_sep)
    }

    /// Replace every paragraph with `f(paragraph)`.
    pub(crate) fn map<F>(&self, text: &str, mut f: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        self.apply(text, |_, para, _, _| vec![f(para)])
    }
}

/// Split `P` on `S` into the part before the first `S` and the part after
/// the last. Both are empty when `P` does not contain `S`.
fn separator_fragments(paragraph_sep: &str, line_sep: &str) -> (String, String) {
    if line_sep.is_empty() || !paragraph_sep.contains(line_sep) {
        return (String::new(), String::new());
    }
    let parts: Vec<&str> = paragraph_sep.split(line_sep).collect();
    let first = parts.first().copied().unwrap_or_default();
    let last = parts.last().copied().unwrap_or_default();
    (first.to_string(), last.to_string())
}
