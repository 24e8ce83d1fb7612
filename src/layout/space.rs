//! Whitespace normalization and counting.

use crate::text::GraphemeString;

/// Whether a cluster counts as whitespace: its first code point is
/// Unicode White_Space.
pub(crate) fn is_space_cluster(cluster: &[char]) -> bool {
    cluster.first().is_some_and(|c| c.is_whitespace())
}

/// Collapse all whitespace in `text` to single ASCII spaces.
///
/// Occurrences of `sep` count as whitespace too. Leading and trailing space
/// is kept (as one space each).
pub(crate) fn collapse_space(text: &GraphemeString, sep: &GraphemeString) -> GraphemeString {
    let replaced = if sep.is_empty() {
        text.clone()
    } else {
        GraphemeString::from(text.to_string().replace(&sep.to_string(), " "))
    };

    let mut out: Vec<char> = Vec::with_capacity(replaced.as_chars().len());
    let mut last_was_space = false;
    for cluster in replaced.clusters() {
        if is_space_cluster(cluster) {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.extend_from_slice(cluster);
            last_was_space = false;
        }
    }
    GraphemeString::from(out)
}

/// Number of whitespace clusters at the start of `text`.
pub(crate) fn count_leading_whitespace(text: &GraphemeString) -> usize {
    text.clusters().take_while(|c| is_space_cluster(c)).count()
}

/// Number of whitespace clusters at the end of `text`.
pub(crate) fn count_trailing_whitespace(text: &GraphemeString) -> usize {
    text.clusters().rev().take_while(|c| is_space_cluster(c)).count()
}
