//! Side-by-side column composition.

use crate::text::{Block, GraphemeString};

/// Lay `right` beside `left`, at least `min_gap` spaces past the widest left
/// line.
///
/// Missing lines on either side are treated as empty, so the result has as
/// many lines as the longer column. Left lines are always padded, even when
/// there is no right line to follow them.
pub(crate) fn combine_columns(left: &Block, right: &Block, min_gap: usize) -> Block {
    let mut combined = Block::with_separator(left.line_separator().clone());
    if left.is_empty() && right.is_empty() {
        return combined;
    }

    let left_width = (0..left.len())
        .filter_map(|i| left.char_count(i).ok())
        .max()
        .unwrap_or(0);
    let right_start = left_width + min_gap;
    let empty = GraphemeString::default();

    for i in 0..left.len().max(right.len()) {
        let left_line = left.line(i).unwrap_or(&empty);
        let right_line = right.line(i).unwrap_or(&empty);
        let pad = GraphemeString::from(" ".repeat(right_start - left_line.len()));
        combined.append(left_line.add(&pad).add(right_line));
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Block {
        Block::from_lines(
            lines.iter().map(|l| GraphemeString::from(*l)).collect(),
            GraphemeString::from("\n"),
            false,
        )
    }

    fn lines_of(block: &Block) -> Vec<String> {
        block.lines().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_combine_equal_heights() {
        let out = combine_columns(&block(&["a", "bbb"]), &block(&["x", "y"]), 2);
        assert_eq!(lines_of(&out), vec!["a    x", "bbb  y"]);
    }

    #[test]
    fn test_combine_left_longer() {
        let out = combine_columns(&block(&["aa", "b", "c"]), &block(&["x"]), 1);
        assert_eq!(lines_of(&out), vec!["aa x", "b  ", "c  "]);
    }

    #[test]
    fn test_combine_right_longer() {
        let out = combine_columns(&block(&["ab"]), &block(&["x", "y"]), 3);
        assert_eq!(lines_of(&out), vec!["ab   x", "     y"]);
    }

    #[test]
    fn test_combine_both_empty() {
        let out = combine_columns(&block(&[]), &block(&[]), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_combine_counts_clusters() {
        let out = combine_columns(&block(&["e\u{0301}", "ab"]), &block(&["1", "2"]), 1);
        assert_eq!(lines_of(&out), vec!["e\u{0301}  1", "ab 2"]);
    }
}
