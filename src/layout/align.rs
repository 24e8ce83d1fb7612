//! Line alignment within a fixed width.

use crate::layout::space::{count_leading_whitespace, count_trailing_whitespace};
use crate::text::GraphemeString;

/// Horizontal alignment of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

fn spaces(n: usize) -> GraphemeString {
    GraphemeString::from(" ".repeat(n))
}

/// Align `line` within `width` clusters.
///
/// Content already wider than `width` is never truncated.
pub(crate) fn align(line: &GraphemeString, width: usize, alignment: Alignment) -> GraphemeString {
    match alignment {
        Alignment::Left => align_left(line, width),
        Alignment::Right => align_right(line, width),
        Alignment::Center => align_center(line, width),
    }
}

/// Strip leading whitespace and pad on the right.
pub(crate) fn align_left(line: &GraphemeString, width: usize) -> GraphemeString {
    let lead = count_leading_whitespace(line);
    let content = line.sub_clusters(lead, line.len());
    let pad = width.saturating_sub(content.len());
    content.add(&spaces(pad))
}

/// Strip trailing whitespace and pad on the left.
pub(crate) fn align_right(line: &GraphemeString, width: usize) -> GraphemeString {
    let trail = count_trailing_whitespace(line);
    let content = line.sub_clusters(0, line.len() - trail);
    let pad = width.saturating_sub(content.len());
    spaces(pad).add(&content)
}

/// Strip both sides and pad evenly, the odd space going to the left.
pub(crate) fn align_center(line: &GraphemeString, width: usize) -> GraphemeString {
    let lead = count_leading_whitespace(line);
    let trail = count_trailing_whitespace(line);
    let content = line.sub_clusters(lead, line.len().saturating_sub(trail).max(lead));
    if width <= content.len() {
        return content;
    }
    let shortfall = width - content.len();
    let right = shortfall / 2;
    let left = shortfall - right;
    spaces(left).add(&content).add(&spaces(right))
}
