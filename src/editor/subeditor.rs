//! Sub-region projection and commit.

use std::sync::Arc;

use super::{Editor, ParentRef};
use crate::text::range::normalize_range;
use crate::text::{END, GraphemeString};

impl Editor {
    /// Project onto clusters `[start, end)`.
    ///
    /// Operations on the returned editor only see the selected text;
    /// [`Editor::commit`] splices the result back into this one.
    #[must_use]
    pub fn chars(&self, start: isize, end: isize) -> Self {
        let gs = GraphemeString::from(self.text.as_str());
        let (start, end) = normalize_range(gs.len(), start, end);
        self.sub_editor(gs.byte_offset(start), gs.byte_offset(end))
    }

    /// Project onto every cluster from `start` to the end.
    #[must_use]
    pub fn chars_from(&self, start: isize) -> Self {
        self.chars(start, END)
    }

    /// Project onto every cluster before `end`.
    #[must_use]
    pub fn chars_to(&self, end: isize) -> Self {
        self.chars(0, end)
    }

    /// Project onto lines `[start, end)`.
    ///
    /// Each selected line keeps its terminating separator, so operations on
    /// the sub-editor see properly terminated lines. Empty text gives an
    /// empty selection at the start; a start past the last line gives an
    /// empty selection at the end.
    #[must_use]
    pub fn lines(&self, start: isize, end: isize) -> Self {
        if self.text.is_empty() {
            return self.sub_editor(0, 0);
        }

        let count = self.line_count();
        let (start, end) = normalize_range(count, start, end);
        let len = self.text.len();
        if start >= count {
            return self.sub_editor(len, len);
        }

        let opts = self.options.clone().with_defaults();
        let sep = opts.line_separator.as_str();
        let Some(byte_start) = skip_lines(&self.text, 0, start, sep) else {
            return self.sub_editor(len, len);
        };
        let byte_end = skip_lines(&self.text, byte_start, end - start, sep).unwrap_or(len);
        self.sub_editor(byte_start, byte_end)
    }

    /// Project onto every line from `start` to the end.
    #[must_use]
    pub fn lines_from(&self, start: isize) -> Self {
        self.lines(start, END)
    }

    /// Project onto every line before `end`.
    #[must_use]
    pub fn lines_to(&self, end: isize) -> Self {
        self.lines(0, end)
    }

    /// Splice this sub-editor's text back into its parent and return the
    /// parent. A top-level editor is returned unchanged.
    #[must_use]
    pub fn commit(&self) -> Self {
        let Some(parent) = self.parent.as_deref() else {
            return self.clone();
        };
        let base = &parent.editor.text;
        let mut text = String::with_capacity(base.len() - (parent.end - parent.start) + self.text.len());
        text.push_str(&base[..parent.start]);
        text.push_str(&self.text);
        text.push_str(&base[parent.end..]);
        parent.editor.with_text(text)
    }

    /// Commit repeatedly until the top-level editor is reached.
    #[must_use]
    pub fn commit_all(&self) -> Self {
        let mut ed = self.commit();
        while ed.is_sub_editor() {
            ed = ed.commit();
        }
        ed
    }

    #[must_use]
    pub fn is_sub_editor(&self) -> bool {
        self.parent.is_some()
    }

    fn sub_editor(&self, start: usize, end: usize) -> Self {
        Self {
            text: self.text[start..end].to_string(),
            options: self.options.clone(),
            parent: Some(Arc::new(ParentRef {
                editor: self.clone(),
                start,
                end,
            })),
        }
    }
}

/// Byte offset just past `count` separators found from `from`, or `None`
/// when the text runs out of separators first.
fn skip_lines(text: &str, from: usize, count: usize, sep: &str) -> Option<usize> {
    let mut pos = from;
    for _ in 0..count {
        let found = text[pos..].find(sep)?;
        pos += found + sep.len();
    }
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn test_chars_typical() {
        let sub = Editor::new("some testing text to edit").chars(5, 17);
        assert_eq!(sub.text(), "testing text");
        assert!(sub.is_sub_editor());
        assert_eq!(sub.options(), &Options::default());
    }

    #[test]
    fn test_chars_end_past_text() {
        assert_eq!(Editor::new("test").chars(1, 20).text(), "est");
    }

    #[test]
    fn test_chars_negative_and_end() {
        let ed = Editor::new("abcdef");
        assert_eq!(ed.chars(-3, END).text(), "def");
        assert_eq!(ed.chars_from(4).text(), "ef");
        assert_eq!(ed.chars_to(-4).text(), "ab");
        assert_eq!(ed.chars(4, 2).text(), "");
    }

    #[test]
    fn test_chars_counts_clusters() {
        let ed = Editor::new("franc\u{0327}ais");
        assert_eq!(ed.chars(4, 5).text(), "c\u{0327}");
        assert_eq!(ed.chars_from(5).text(), "ais");
    }

    #[test]
    fn test_commit_splices() {
        let ed = Editor::new("Hello, World!");
        let sub = ed.chars(5, 7).indent(1);
        assert_eq!(sub.text(), "\t, ");
        let committed = sub.commit();
        assert_eq!(committed.text(), "Hello\t, World!");
        assert!(!committed.is_sub_editor());
        assert_eq!(ed.text(), "Hello, World!");
    }

    #[test]
    fn test_commit_top_level_is_identity() {
        let ed = Editor::new("x");
        assert_eq!(ed.commit(), ed);
        assert_eq!(ed.commit_all(), ed);
    }

    #[test]
    fn test_nested_commit_all() {
        let sub = Editor::new("one two three").chars(4, END).chars(0, 3);
        assert_eq!(sub.text(), "two");
        let edited = sub.insert(0, "[").insert(END, "]");
        assert_eq!(edited.commit().text(), "[two] three");
        assert_eq!(edited.commit_all().text(), "one [two] three");
        assert_eq!(edited.to_string(), "one [two] three");
    }

    #[test]
    fn test_lines_include_separators() {
        let ed = Editor::new("l0\nl1\nl2\n");
        assert_eq!(ed.lines(1, 2).text(), "l1\n");
        assert_eq!(ed.lines_from(1).text(), "l1\nl2\n");
        assert_eq!(ed.lines_to(1).text(), "l0\n");
        assert_eq!(ed.lines(-1, END).text(), "l2\n");
    }

    #[test]
    fn test_lines_unterminated_last() {
        let ed = Editor::new("l0\nl1");
        assert_eq!(ed.lines(1, 2).text(), "l1");
        assert_eq!(ed.lines(0, END).text(), "l0\nl1");
    }

    #[test]
    fn test_lines_empty_and_past_end() {
        let sub = Editor::new("").lines(0, 3);
        assert_eq!(sub.text(), "");
        assert!(sub.is_sub_editor());

        let sub = Editor::new("l0\nl1\n").lines(5, 9);
        assert_eq!(sub.text(), "");
        assert_eq!(sub.insert(0, "l2\n").to_string(), "l0\nl1\nl2\n");
    }

    #[test]
    fn test_lines_custom_separator() {
        let opts = Options::default().with_line_separator("<br>");
        let ed = Editor::new("a<br>b\nc<br>d").with_options(opts);
        assert_eq!(ed.lines(1, 2).text(), "b\nc<br>");
        assert_eq!(ed.lines_from(2).text(), "d");
    }

    #[test]
    fn test_lines_edit_and_commit() {
        let ed = Editor::new("keep\nindent me\nkeep\n");
        let out = ed.lines(1, 2).indent(1).commit();
        assert_eq!(out.text(), "keep\n\tindent me\nkeep\n");
    }
}
