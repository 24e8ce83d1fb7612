//! Editor options.

use bitflags::bitflags;

/// Default string repeated per indent level.
pub const DEFAULT_INDENT_STR: &str = "\t";
/// Default line separator.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";
/// Default paragraph separator.
pub const DEFAULT_PARAGRAPH_SEPARATOR: &str = "\n\n";
/// Default table characters: `<corner><vert><horz>`.
pub const DEFAULT_TABLE_CHAR_SET: &str = "+|-";

bitflags! {
    /// Boolean editor options.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct OptionFlags: u8 {
        /// A final separator starts a real (empty) last line instead of
        /// terminating the previous one.
        const NO_TRAILING_LINE_SEPARATORS = 1 << 0;
        /// Keep paragraph structure through operations that rewrap text.
        const PRESERVE_PARAGRAPHS = 1 << 1;
        /// Justify the last line of a justification target too.
        const JUSTIFY_LAST_LINE = 1 << 2;
        /// Draw table border rules.
        const TABLE_BORDERS = 1 << 3;
        /// Treat the first table row as a header.
        const TABLE_HEADERS = 1 << 4;
    }
}

/// Options controlling how an [`Editor`](crate::Editor) splits, joins and
/// lays out text.
///
/// Empty strings stand for their defaults, so `Options::default()` is usable
/// as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Repeated once per indent level. Empty means `"\t"`.
    pub indent_str: String,
    /// Separates lines. Empty means `"\n"`.
    pub line_separator: String,
    /// Separates paragraphs. Empty means `"\n\n"`.
    pub paragraph_separator: String,
    /// Table `<corner><vert><horz>` characters. Empty means `"+|-"`.
    pub table_char_set: String,
    pub flags: OptionFlags,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with every empty string replaced by its default.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        fill(&mut self.indent_str, DEFAULT_INDENT_STR);
        fill(&mut self.line_separator, DEFAULT_LINE_SEPARATOR);
        fill(&mut self.paragraph_separator, DEFAULT_PARAGRAPH_SEPARATOR);
        fill(&mut self.table_char_set, DEFAULT_TABLE_CHAR_SET);
        self
    }

    #[must_use]
    pub fn with_indent_str(mut self, indent: impl Into<String>) -> Self {
        self.indent_str = indent.into();
        self
    }

    #[must_use]
    pub fn with_line_separator(mut self, sep: impl Into<String>) -> Self {
        self.line_separator = sep.into();
        self
    }

    #[must_use]
    pub fn with_paragraph_separator(mut self, sep: impl Into<String>) -> Self {
        self.paragraph_separator = sep.into();
        self
    }

    #[must_use]
    pub fn with_table_char_set(mut self, chars: impl Into<String>) -> Self {
        self.table_char_set = chars.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: OptionFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_no_trailing_line_separators(self, on: bool) -> Self {
        self.with_flag(OptionFlags::NO_TRAILING_LINE_SEPARATORS, on)
    }

    #[must_use]
    pub fn with_preserve_paragraphs(self, on: bool) -> Self {
        self.with_flag(OptionFlags::PRESERVE_PARAGRAPHS, on)
    }

    #[must_use]
    pub fn with_justify_last_line(self, on: bool) -> Self {
        self.with_flag(OptionFlags::JUSTIFY_LAST_LINE, on)
    }

    #[must_use]
    pub fn with_table_borders(self, on: bool) -> Self {
        self.with_flag(OptionFlags::TABLE_BORDERS, on)
    }

    #[must_use]
    pub fn with_table_headers(self, on: bool) -> Self {
        self.with_flag(OptionFlags::TABLE_HEADERS, on)
    }

    fn with_flag(mut self, flag: OptionFlags, on: bool) -> Self {
        self.flags.set(flag, on);
        self
    }

    #[must_use]
    pub fn no_trailing_line_separators(&self) -> bool {
        self.flags.contains(OptionFlags::NO_TRAILING_LINE_SEPARATORS)
    }

    #[must_use]
    pub fn preserve_paragraphs(&self) -> bool {
        self.flags.contains(OptionFlags::PRESERVE_PARAGRAPHS)
    }

    #[must_use]
    pub fn justify_last_line(&self) -> bool {
        self.flags.contains(OptionFlags::JUSTIFY_LAST_LINE)
    }

    #[must_use]
    pub fn table_borders(&self) -> bool {
        self.flags.contains(OptionFlags::TABLE_BORDERS)
    }

    #[must_use]
    pub fn table_headers(&self) -> bool {
        self.flags.contains(OptionFlags::TABLE_HEADERS)
    }
}

fn fill(field: &mut String, default: &str) {
    if field.is_empty() {
        default.clone_into(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let opts = Options::default();
        assert!(opts.indent_str.is_empty());
        assert!(opts.line_separator.is_empty());
        assert!(opts.flags.is_empty());
    }

    #[test]
    fn test_with_defaults_fills_empty() {
        let opts = Options::default().with_defaults();
        assert_eq!(opts.indent_str, "\t");
        assert_eq!(opts.line_separator, "\n");
        assert_eq!(opts.paragraph_separator, "\n\n");
        assert_eq!(opts.table_char_set, "+|-");
    }

    #[test]
    fn test_with_defaults_keeps_set_values() {
        let opts = Options::default()
            .with_line_separator("<br/>")
            .with_indent_str("  ")
            .with_defaults();
        assert_eq!(opts.line_separator, "<br/>");
        assert_eq!(opts.indent_str, "  ");
        assert_eq!(opts.paragraph_separator, "\n\n");
    }

    #[test]
    fn test_flag_builders() {
        let opts = Options::new()
            .with_preserve_paragraphs(true)
            .with_table_borders(true)
            .with_table_headers(true);
        assert!(opts.preserve_paragraphs());
        assert!(opts.table_borders());
        assert!(opts.table_headers());
        assert!(!opts.justify_last_line());
        assert!(!opts.no_trailing_line_separators());

        let opts = opts.with_table_borders(false).with_justify_last_line(true);
        assert!(!opts.table_borders());
        assert!(opts.justify_last_line());
    }

    #[test]
    fn test_with_flags_replaces_all() {
        let opts = Options::new()
            .with_preserve_paragraphs(true)
            .with_flags(OptionFlags::NO_TRAILING_LINE_SEPARATORS);
        assert!(opts.no_trailing_line_separators());
        assert!(!opts.preserve_paragraphs());
    }
}
