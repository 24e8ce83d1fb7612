//! Fixed-width table layout.
//!
//! Column widths are solved first (content width, then padding, then any
//! surplus up to the requested width) and rows rendered afterwards.

use crate::event::{LogLevel, emit_log_with};
use crate::layout::align::{align_center, align_left};
use crate::text::{Block, GraphemeString};

/// Default `<corner><vert><horz>` characters.
pub(crate) const DEFAULT_CHAR_SET: &str = "+|-";

/// Inter-column gap in tables without borders.
const UNBORDERED_GAP: usize = 2;

/// Padding inside each bordered cell, one space per side.
const BORDERED_PADDING: usize = 2;

/// Table rendering controls.
#[derive(Clone, Debug)]
pub(crate) struct TableStyle {
    pub header: bool,
    pub border: bool,
    pub char_set: GraphemeString,
}

struct CharSet {
    corner: GraphemeString,
    vert: GraphemeString,
    horz: GraphemeString,
}

impl CharSet {
    /// Take the first three clusters of `chars`. A shorter set is
    /// right-padded with the leading clusters of [`DEFAULT_CHAR_SET`], so
    /// `"#"` resolves to corner `#`, vertical `+` and horizontal `|`.
    fn resolve(chars: &GraphemeString) -> Self {
        let defaults = GraphemeString::from(DEFAULT_CHAR_SET);
        let padded = if chars.len() < 3 {
            chars.add(&defaults.sub_clusters(0, 3 - chars.len()))
        } else {
            chars.clone()
        };
        // Padding can merge with the last user cluster at the seam.
        let pick = |i: usize| {
            if i < padded.len() {
                padded.sub_clusters(i, i + 1)
            } else {
                defaults.sub_clusters(i, i + 1)
            }
        };
        Self {
            corner: pick(0),
            vert: pick(1),
            horz: pick(2),
        }
    }
}

/// Solve the rendered width of every column, padding included.
///
/// Returns the column widths and the table width they add up to.
fn column_widths(
    rows: &[Vec<GraphemeString>],
    cols: usize,
    width: usize,
    border: bool,
) -> (Vec<usize>, usize) {
    let mut widths: Vec<usize> = (0..cols)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(GraphemeString::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    for (i, w) in widths.iter_mut().enumerate() {
        if border {
            *w += BORDERED_PADDING;
        } else if i + 1 < cols {
            *w += UNBORDERED_GAP;
        }
    }

    // One vertical rule per column boundary, outer edges included.
    let rules = if border { cols + 1 } else { 0 };
    let min_width = widths.iter().sum::<usize>() + rules;

    if width <= min_width {
        if width < min_width {
            emit_log_with(LogLevel::Debug, || {
                format!("table width {width} below minimum {min_width}; using minimum")
            });
        }
        return (widths, min_width);
    }

    let surplus = width - min_width;
    let spread = if border || cols == 1 { cols } else { cols - 1 };
    let per_col = surplus / spread;
    let remainder = surplus % spread;
    for (i, w) in widths.iter_mut().take(spread).enumerate() {
        *w += per_col + usize::from(i < remainder);
    }
    (widths, width)
}

/// Render `rows` as a table `width` clusters wide.
///
/// Rows may be ragged; missing cells render empty. A table too narrow for its
/// content is widened to the minimum that fits. No rows or no columns give an
/// empty block.
pub(crate) fn layout_table(
    rows: &[Vec<GraphemeString>],
    width: usize,
    sep: &GraphemeString,
    style: &TableStyle,
) -> Block {
    let mut block = Block::with_separator(sep.clone());
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if cols == 0 {
        return block;
    }

    let chars = CharSet::resolve(&style.char_set);
    let (widths, table_width) = column_widths(rows, cols, width, style.border);

    let rule = if style.border {
        widths.iter().fold(chars.corner.clone(), |acc, &w| {
            acc.add(&chars.horz.repeat(w)).add(&chars.corner)
        })
    } else {
        chars.horz.repeat(table_width)
    };

    if style.border {
        block.append(rule.clone());
    }

    let empty = GraphemeString::default();
    for (row_idx, row) in rows.iter().enumerate() {
        let is_header = style.header && row_idx == 0;
        let mut line = if style.border {
            chars.vert.clone()
        } else {
            GraphemeString::default()
        };

        for (col, &w) in widths.iter().enumerate() {
            let cell = row.get(col).unwrap_or(&empty);
            let rendered = match (is_header, style.border) {
                (true, true) => align_center(&upper(cell), w).add(&chars.vert),
                (true, false) => align_left(&upper(cell), w),
                (false, true) => GraphemeString::from(" ")
                    .add(&align_left(cell, w - 1))
                    .add(&chars.vert),
                (false, false) => align_left(cell, w),
            };
            line = line.add(&rendered);
        }
        block.append(line);

        if is_header && (!style.border || row_idx + 1 < rows.len()) {
            block.append(rule.clone());
        }
    }

    if style.border {
        block.append(rule);
    }
    block
}

fn upper(cell: &GraphemeString) -> GraphemeString {
    GraphemeString::from(cell.to_string().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<GraphemeString>> {
        data.iter()
            .map(|row| row.iter().map(|c| GraphemeString::from(*c)).collect())
            .collect()
    }

    fn style(header: bool, border: bool) -> TableStyle {
        TableStyle {
            header,
            border,
            char_set: GraphemeString::default(),
        }
    }

    fn render(data: &[&[&str]], width: usize, style: &TableStyle) -> Vec<String> {
        layout_table(&rows(data), width, &GraphemeString::from("\n"), style)
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    const CREW: &[&[&str]] = &[
        &["Name", "Surname", "Class", "Aspect"],
        &["John", "Egbert", "Heir", "Breath"],
        &["Rose", "Lalonde", "Seer", "Light"],
    ];

    #[test]
    fn test_empty_table() {
        assert!(render(&[], 20, &style(false, false)).is_empty());
        assert!(render(&[&[], &[]], 20, &style(true, true)).is_empty());
    }

    #[test]
    fn test_unbordered_min_width() {
        let got = render(&CREW[1..], 2, &style(false, false));
        assert_eq!(got, vec!["John  Egbert   Heir  Breath", "Rose  Lalonde  Seer  Light "]);
    }

    #[test]
    fn test_unbordered_surplus_skips_last_column() {
        let got = render(&CREW[1..], 30, &style(false, false));
        // three columns share 3 extra spaces
        assert_eq!(got[0], "John   Egbert    Heir   Breath");
        assert_eq!(got[0].len(), 30);
    }

    #[test]
    fn test_unbordered_header_rule() {
        let got = render(CREW, 2, &style(true, false));
        assert_eq!(got[0], "NAME  SURNAME  CLASS  ASPECT");
        assert_eq!(got[1], "-".repeat(28));
        assert_eq!(got.len(), 4);
    }

    #[test]
    fn test_single_column_gets_surplus() {
        let got = render(&[&["John Egbert"], &["Rose Lalonde"]], 15, &style(false, false));
        assert_eq!(got, vec!["John Egbert    ", "Rose Lalonde   "]);
    }

    #[test]
    fn test_bordered_min_width() {
        let got = render(&CREW[1..], 0, &style(false, true));
        assert_eq!(
            got,
            vec![
                "+------+---------+------+--------+",
                "| John | Egbert  | Heir | Breath |",
                "| Rose | Lalonde | Seer | Light  |",
                "+------+---------+------+--------+",
            ]
        );
    }

    #[test]
    fn test_bordered_header_centered() {
        let got = render(CREW, 41, &style(true, true));
        assert_eq!(
            got,
            vec![
                "+--------+-----------+--------+---------+",
                "|  NAME  |  SURNAME  |  CLASS |  ASPECT |",
                "+--------+-----------+--------+---------+",
                "| John   | Egbert    | Heir   | Breath  |",
                "| Rose   | Lalonde   | Seer   | Light   |",
                "+--------+-----------+--------+---------+",
            ]
        );
        assert!(got.iter().all(|l| l.len() == 41));
    }

    #[test]
    fn test_header_only_bordered_has_no_double_rule() {
        let got = render(&[&["a", "b"]], 0, &style(true, true));
        assert_eq!(got, vec!["+---+---+", "| A | B |", "+---+---+"]);
    }

    #[test]
    fn test_ragged_rows() {
        let got = render(&[&["Calliope"], &["", "Strider"]], 20, &style(false, false));
        assert_eq!(got, vec!["Calliope            ", "             Strider"]);
    }

    #[test]
    fn test_custom_char_set() {
        let st = TableStyle {
            header: false,
            border: true,
            char_set: GraphemeString::from("#"),
        };
        let got = render(&[&["x"]], 0, &st);
        assert_eq!(got, vec!["#|||#", "+ x +", "#|||#"]);

        let st = TableStyle {
            char_set: GraphemeString::from("*!"),
            ..st
        };
        let got = render(&[&["x"]], 0, &st);
        assert_eq!(got, vec!["*+++*", "! x !", "*+++*"]);

        let st = TableStyle {
            char_set: GraphemeString::from("*!=extra"),
            ..st
        };
        let got = render(&[&["x"]], 0, &st);
        assert_eq!(got, vec!["*===*", "! x !", "*===*"]);
    }
}
