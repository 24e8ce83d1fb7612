//! Editor operations.
//!
//! Each operation has a plain form that uses the editor's own options and an
//! `_opts` form taking explicit options. Both return a new editor.

use super::{Editor, line_block};
use crate::event::{LogLevel, emit_log_with};
use crate::layout::align::{Alignment, align};
use crate::layout::columns::combine_columns;
use crate::layout::justify::justify_line;
use crate::layout::space::collapse_space;
use crate::layout::table::{TableStyle, layout_table};
use crate::layout::wrap::{MIN_WRAP_WIDTH, wrap};
use crate::options::Options;
use crate::paragraph::ParagraphSplitter;
use crate::text::range::{normalize_index, normalize_range};
use crate::text::{Block, GraphemeString};

/// Gap between the term and definition columns of a definitions table.
const DEFINITION_GAP: usize = 2;

impl Editor {
    /// Replace every line with the lines `op` returns for it.
    ///
    /// `op` is called once per line, in order, with the line index and the
    /// line text (separator excluded). Returning an empty vector deletes the
    /// line; returning several inserts them. A terminating separator is kept.
    #[must_use]
    pub fn apply<F>(&self, op: F) -> Self
    where
        F: FnMut(usize, &str) -> Vec<String>,
    {
        self.apply_opts(op, &self.options)
    }

    #[must_use]
    pub fn apply_opts<F>(&self, op: F, opts: &Options) -> Self
    where
        F: FnMut(usize, &str) -> Vec<String>,
    {
        let opts = opts.clone().with_defaults();
        self.with_text(apply_lines(&self.text, &opts, op))
    }

    /// Replace every paragraph with the paragraphs `op` returns for it.
    ///
    /// `op` receives the paragraph index, the paragraph text and the parts
    /// of the paragraph separator that open and close the paragraph. Empty
    /// text is one empty paragraph.
    #[must_use]
    pub fn apply_paragraphs<F>(&self, op: F) -> Self
    where
        F: FnMut(usize, &str, &str, &str) -> Vec<String>,
    {
        self.apply_paragraphs_opts(op, &self.options)
    }

    #[must_use]
    pub fn apply_paragraphs_opts<F>(&self, op: F, opts: &Options) -> Self
    where
        F: FnMut(usize, &str, &str, &str) -> Vec<String>,
    {
        let opts = opts.clone().with_defaults();
        self.with_text(splitter(&opts).apply(&self.text, op))
    }

    /// Prefix every line with the indent string repeated `level` times.
    #[must_use]
    pub fn indent(&self, level: usize) -> Self {
        self.indent_opts(level, &self.options)
    }

    #[must_use]
    pub fn indent_opts(&self, level: usize, opts: &Options) -> Self {
        if level == 0 {
            return self.clone();
        }
        let opts = opts.clone().with_defaults();
        let prefix = opts.indent_str.repeat(level);
        self.per_target(&opts, |text| {
            apply_lines(text, &opts, |_, line| vec![format!("{prefix}{line}")])
        })
    }

    /// Rewrap the text to at most `width` clusters per line.
    ///
    /// Whitespace runs (line separators included) collapse to single spaces
    /// first, so existing line breaks are not kept. With
    /// `preserve_paragraphs` each paragraph is wrapped on its own.
    #[must_use]
    pub fn wrap(&self, width: usize) -> Self {
        self.wrap_opts(width, &self.options)
    }

    #[must_use]
    pub fn wrap_opts(&self, width: usize, opts: &Options) -> Self {
        let opts = opts.clone().with_defaults();
        let sep = GraphemeString::from(opts.line_separator.as_str());
        let mut wrapped = self.per_target(&opts, |text| {
            wrap(&GraphemeString::from(text), width, &sep).join().to_string()
        });
        let sep = opts.line_separator.as_str();
        if !opts.no_trailing_line_separators()
            && self.text.ends_with(sep)
            && !wrapped.text.ends_with(sep)
        {
            wrapped.text.push_str(sep);
        }
        wrapped
    }

    /// Justify every line to exactly `width` clusters.
    ///
    /// The last line of the text (of each paragraph, with
    /// `preserve_paragraphs`) is left as is unless it is the only line or
    /// `justify_last_line` is set. Lines without inner spaces, or already at
    /// least `width` long, only have their whitespace collapsed.
    #[must_use]
    pub fn justify(&self, width: usize) -> Self {
        self.justify_opts(width, &self.options)
    }

    #[must_use]
    pub fn justify_opts(&self, width: usize, opts: &Options) -> Self {
        let opts = opts.clone().with_defaults();
        self.per_target(&opts, |text| {
            let mut block = line_block(text, &opts);
            let last = block.len().saturating_sub(1);
            let keep_last = block.len() > 1 && !opts.justify_last_line();
            block.apply(|i, line| {
                if keep_last && i == last {
                    vec![line.to_string()]
                } else {
                    vec![justify_line(&GraphemeString::from(line), width).to_string()]
                }
            });
            block.join().to_string()
        })
    }

    /// Align every line within `width` clusters.
    #[must_use]
    pub fn align(&self, alignment: Alignment, width: usize) -> Self {
        self.align_opts(alignment, width, &self.options)
    }

    #[must_use]
    pub fn align_opts(&self, alignment: Alignment, width: usize, opts: &Options) -> Self {
        let opts = opts.clone().with_defaults();
        self.per_target(&opts, |text| {
            apply_lines(text, &opts, |_, line| {
                vec![align(&GraphemeString::from(line), width, alignment).to_string()]
            })
        })
    }

    /// Center every line within `width` clusters.
    #[must_use]
    pub fn center(&self, width: usize) -> Self {
        self.align(Alignment::Center, width)
    }

    #[must_use]
    pub fn center_opts(&self, width: usize, opts: &Options) -> Self {
        self.align_opts(Alignment::Center, width, opts)
    }

    /// Collapse every whitespace run, line separators included, to a single
    /// space.
    #[must_use]
    pub fn collapse_space(&self) -> Self {
        self.collapse_space_opts(&self.options)
    }

    #[must_use]
    pub fn collapse_space_opts(&self, opts: &Options) -> Self {
        let opts = opts.clone().with_defaults();
        let sep = GraphemeString::from(opts.line_separator.as_str());
        self.per_target(&opts, |text| {
            collapse_space(&GraphemeString::from(text), &sep).to_string()
        })
    }

    /// Insert `text` before the cluster at `pos`.
    #[must_use]
    pub fn insert(&self, pos: isize, text: &str) -> Self {
        let gs = GraphemeString::from(self.text.as_str());
        let at = gs.byte_offset(normalize_index(gs.len(), pos));
        let mut out = String::with_capacity(self.text.len() + text.len());
        out.push_str(&self.text[..at]);
        out.push_str(text);
        out.push_str(&self.text[at..]);
        self.with_text(out)
    }

    /// Write `text` over the clusters starting at `pos`, extending the text
    /// if it runs past the end.
    #[must_use]
    pub fn overtype(&self, pos: isize, text: &str) -> Self {
        let gs = GraphemeString::from(self.text.as_str());
        let start = normalize_index(gs.len(), pos);
        let end = (start + GraphemeString::from(text).len()).min(gs.len());
        self.replace_bytes(gs.byte_offset(start), gs.byte_offset(end), text)
    }

    /// Remove clusters `[start, end)`.
    #[must_use]
    pub fn delete(&self, start: isize, end: isize) -> Self {
        let gs = GraphemeString::from(self.text.as_str());
        let (start, end) = normalize_range(gs.len(), start, end);
        self.replace_bytes(gs.byte_offset(start), gs.byte_offset(end), "")
    }

    /// Insert `left` and `right` laid out side by side at `pos`.
    ///
    /// Both texts are wrapped; `left_col_percent` (clamped to `[0, 1]`) of
    /// the width left over after `min_space_between` goes to the left
    /// column. The block ends with a line separator unless
    /// `no_trailing_line_separators` is set.
    #[must_use]
    pub fn insert_two_columns(
        &self,
        pos: isize,
        left: &str,
        right: &str,
        min_space_between: usize,
        width: usize,
        left_col_percent: f64,
    ) -> Self {
        self.insert_two_columns_opts(
            pos,
            left,
            right,
            min_space_between,
            width,
            left_col_percent,
            &self.options,
        )
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn insert_two_columns_opts(
        &self,
        pos: isize,
        left: &str,
        right: &str,
        min_space_between: usize,
        width: usize,
        left_col_percent: f64,
        opts: &Options,
    ) -> Self {
        if left.is_empty() && right.is_empty() {
            return self.clone();
        }
        let opts = opts.clone().with_defaults();
        let sep = GraphemeString::from(opts.line_separator.as_str());

        let (left_width, right_width) = column_split(width, min_space_between, left_col_percent);

        let left_lines = wrap(&GraphemeString::from(left), left_width, &sep)
            .into_lines()
            .iter()
            .map(|line| align(line, left_width, Alignment::Left))
            .collect();
        let left_block = Block::from_lines(left_lines, sep.clone(), false);
        let right_block = wrap(&GraphemeString::from(right), right_width, &sep);

        let mut combined = combine_columns(&left_block, &right_block, min_space_between);
        combined.set_trailing_separator(!opts.no_trailing_line_separators());
        self.insert(pos, &combined.join().to_string())
    }

    /// Insert `table` rendered `width` clusters wide at `pos`.
    ///
    /// `table_borders`, `table_headers` and `table_char_set` control the
    /// look. An empty table leaves the text unchanged.
    #[must_use]
    pub fn insert_table<S: AsRef<str>>(&self, pos: isize, table: &[Vec<S>], width: usize) -> Self {
        self.insert_table_opts(pos, table, width, &self.options)
    }

    #[must_use]
    pub fn insert_table_opts<S: AsRef<str>>(
        &self,
        pos: isize,
        table: &[Vec<S>],
        width: usize,
        opts: &Options,
    ) -> Self {
        let opts = opts.clone().with_defaults();
        let rows: Vec<Vec<GraphemeString>> = table
            .iter()
            .map(|row| row.iter().map(|cell| GraphemeString::from(cell.as_ref())).collect())
            .collect();
        let style = TableStyle {
            header: opts.table_headers(),
            border: opts.table_borders(),
            char_set: GraphemeString::from(opts.table_char_set.as_str()),
        };

        let sep = GraphemeString::from(opts.line_separator.as_str());
        let mut block = layout_table(&rows, width, &sep, &style);
        if block.is_empty() {
            return self.clone();
        }
        block.set_trailing_separator(!opts.no_trailing_line_separators());
        self.insert(pos, &block.join().to_string())
    }

    /// Insert a two-column list of terms and their definitions at `pos`.
    ///
    /// Terms are prefixed with the indent string; definitions start two
    /// spaces past the longest term and wrap within the remaining width.
    #[must_use]
    pub fn insert_definitions_table<K, V>(&self, pos: isize, definitions: &[(K, V)], width: usize) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.insert_definitions_table_opts(pos, definitions, width, &self.options)
    }

    #[must_use]
    pub fn insert_definitions_table_opts<K, V>(
        &self,
        pos: isize,
        definitions: &[(K, V)],
        width: usize,
        opts: &Options,
    ) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if definitions.is_empty() {
            return self.clone();
        }
        let opts = opts.clone().with_defaults();
        let sep = GraphemeString::from(opts.line_separator.as_str());

        let terms: Vec<GraphemeString> = definitions
            .iter()
            .map(|(term, _)| GraphemeString::from(format!("{}{}", opts.indent_str, term.as_ref())))
            .collect();
        let term_width = terms.iter().map(GraphemeString::len).max().unwrap_or(0);
        let def_width = clamp_width(width.saturating_sub(term_width + DEFINITION_GAP), "definition");

        let mut out = Block::with_separator(sep.clone());
        for (term, (_, definition)) in terms.iter().zip(definitions) {
            let pad = GraphemeString::from(" ".repeat(term_width - term.len()));
            let term_block = Block::from_lines(vec![term.add(&pad)], sep.clone(), false);
            let def_block = wrap(&GraphemeString::from(definition.as_ref()), def_width, &sep);
            out.append_block(&combine_columns(&term_block, &def_block, DEFINITION_GAP));
        }
        out.set_trailing_separator(!opts.no_trailing_line_separators());
        self.insert(pos, &out.join().to_string())
    }

    /// Run `f` over the whole text, or over each paragraph when
    /// `preserve_paragraphs` is set.
    fn per_target<F>(&self, opts: &Options, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let text = if opts.preserve_paragraphs() {
            splitter(opts).map(&self.text, f)
        } else {
            f(&self.text)
        };
        self.with_text(text)
    }

    fn replace_bytes(&self, start: usize, end: usize, with: &str) -> Self {
        let mut out = String::with_capacity(self.text.len() - (end - start) + with.len());
        out.push_str(&self.text[..start]);
        out.push_str(with);
        out.push_str(&self.text[end..]);
        self.with_text(out)
    }
}

fn splitter(opts: &Options) -> ParagraphSplitter {
    ParagraphSplitter::new(&opts.paragraph_separator, &opts.line_separator)
}

/// Split into lines, run `op` over them and join back.
fn apply_lines<F>(text: &str, opts: &Options, op: F) -> String
where
    F: FnMut(usize, &str) -> Vec<String>,
{
    let mut block = line_block(text, opts);
    block.apply(op);
    if block.is_empty() {
        return String::new();
    }
    block.join().to_string()
}

/// Widths of the left and right columns of a two-column layout.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn column_split(width: usize, gap: usize, left_col_percent: f64) -> (usize, usize) {
    let percent = if left_col_percent.is_nan() {
        0.0
    } else {
        left_col_percent.clamp(0.0, 1.0)
    };
    let available = width.saturating_sub(gap);
    let left = (available as f64 * percent).floor() as usize;
    let right = width.saturating_sub(left + gap);
    (clamp_width(left, "left column"), clamp_width(right, "right column"))
}

fn clamp_width(width: usize, what: &str) -> usize {
    if width < MIN_WRAP_WIDTH {
        emit_log_with(LogLevel::Debug, || {
            format!("{what} width {width} below minimum; using {MIN_WRAP_WIDTH}")
        });
        return MIN_WRAP_WIDTH;
    }
    width
}
