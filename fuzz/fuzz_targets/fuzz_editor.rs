//! Fuzz target for editor operations.
//!
//! Drives a random sequence of operations over arbitrary text and options.
//! Nothing may panic, and wrapped ASCII lines must respect the width.

#![no_main]

use arbitrary::Arbitrary;
use fixedtext::{Alignment, Editor, GraphemeString, Options};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Wrap(u8),
    Justify(u8),
    Align(u8, u8),
    Indent(u8),
    Collapse,
    Insert(i16, String),
    Overtype(i16, String),
    Delete(i16, i16),
    Chars(i16, i16),
    Lines(i16, i16),
    Commit,
    Table(Vec<Vec<String>>, u8),
    TwoColumns(String, String, u8, u8, f64),
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    line_separator: String,
    paragraph_separator: String,
    flags: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let opts = Options::default()
        .with_line_separator(input.line_separator)
        .with_paragraph_separator(input.paragraph_separator)
        .with_no_trailing_line_separators(input.flags & 1 != 0)
        .with_preserve_paragraphs(input.flags & 2 != 0)
        .with_justify_last_line(input.flags & 4 != 0)
        .with_table_borders(input.flags & 8 != 0)
        .with_table_headers(input.flags & 16 != 0);

    let mut ed = Editor::new(input.text).with_options(opts);
    for op in input.ops.into_iter().take(16) {
        ed = match op {
            Op::Wrap(w) => {
                let width = usize::from(w).max(2);
                let out = ed.wrap(width);
                // ASCII lines segment the same on their own as in context
                let plain = out.options().line_separator.is_empty()
                    && !out.options().preserve_paragraphs()
                    && out.text().is_ascii();
                if plain {
                    for line in out.text().split('\n') {
                        assert!(GraphemeString::from(line).len() <= width);
                    }
                }
                out
            }
            Op::Justify(w) => ed.justify(usize::from(w)),
            Op::Align(mode, w) => {
                let alignment = match mode % 3 {
                    0 => Alignment::Left,
                    1 => Alignment::Right,
                    _ => Alignment::Center,
                };
                ed.align(alignment, usize::from(w))
            }
            Op::Indent(level) => ed.indent(usize::from(level % 4)),
            Op::Collapse => ed.collapse_space(),
            Op::Insert(pos, text) => ed.insert(isize::from(pos), &text),
            Op::Overtype(pos, text) => ed.overtype(isize::from(pos), &text),
            Op::Delete(start, end) => ed.delete(isize::from(start), isize::from(end)),
            Op::Chars(start, end) => ed.chars(isize::from(start), isize::from(end)),
            Op::Lines(start, end) => ed.lines(isize::from(start), isize::from(end)),
            Op::Commit => ed.commit(),
            Op::Table(rows, w) => ed.insert_table(0, &rows, usize::from(w)),
            Op::TwoColumns(left, right, gap, w, pct) => {
                ed.insert_two_columns(0, &left, &right, usize::from(gap % 8), usize::from(w), pct)
            }
        };
    }
    let _ = ed.to_string();
});
