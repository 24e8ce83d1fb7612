//! Full justification of a single line.

use crate::layout::space::collapse_space;
use crate::text::GraphemeString;

/// Pad the gaps between words of `text` until it is `width` clusters long.
///
/// Whitespace is collapsed first. A line already at or past the width, or
/// with no gap between words, comes back collapsed but otherwise unchanged.
/// Extra spaces go alternately to gaps counted from the left and from the
/// right, so the outermost gaps fill first.
pub(crate) fn justify_line(text: &GraphemeString, width: usize) -> GraphemeString {
    let text = collapse_space(text, &GraphemeString::from("\n"));
    let len = text.len();
    if len >= width {
        return text;
    }

    let flat = text.to_string();
    let words: Vec<&str> = flat.split(' ').collect();
    let num_gaps = words.len() - 1;
    if num_gaps == 0 {
        return text;
    }

    let mut gaps = vec![1usize; num_gaps];
    let right_base = num_gaps - num_gaps % 2;
    let mut gap_idx = 0;
    let mut from_right = false;
    for _ in 0..width - len {
        let target = if from_right {
            right_base - gap_idx
        } else {
            gap_idx
        };
        gaps[target] += 1;
        from_right = !from_right;
        gap_idx = (gap_idx + 1) % num_gaps;
    }

    let mut out = String::with_capacity(flat.len() + width - len);
    for (i, word) in words.iter().enumerate() {
        out.push_str(word);
        if let Some(&gap) = gaps.get(i) {
            out.extend(std::iter::repeat_n(' ', gap));
        }
    }
    GraphemeString::from(out)
}
