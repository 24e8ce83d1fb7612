//! Extended grapheme cluster segmentation (UAX #29).

use crate::unicode::property::{GraphemeBreak, grapheme_break, is_ext_picto};

/// Compute the cluster boundaries of a code point sequence.
///
/// Each entry is the exclusive end offset of one cluster, so the result is
/// strictly increasing and its last entry equals `cps.len()`. Empty input
/// gives no boundaries.
#[must_use]
pub fn boundaries(cps: &[char]) -> Vec<usize> {
    if cps.is_empty() {
        return Vec::new();
    }

    let classes: Vec<GraphemeBreak> = cps.iter().map(|&c| grapheme_break(c)).collect();
    let mut ends = Vec::with_capacity(cps.len());
    for i in 1..cps.len() {
        if breaks_before(cps, &classes, i) {
            ends.push(i);
        }
    }
    ends.push(cps.len());
    ends
}

/// Whether there is a cluster boundary between `cps[i - 1]` and `cps[i]`.
fn breaks_before(cps: &[char], classes: &[GraphemeBreak], i: usize) -> bool {
    use GraphemeBreak::{
        CR, Control, Extend, L, LF, LV, LVT, Prepend, RegionalIndicator, SpacingMark, T, V, ZWJ,
    };

    let prev = classes[i - 1];
    let next = classes[i];

    match (prev, next) {
        // GB3
        (CR, LF) => false,
        // GB4, GB5
        (Control | CR | LF, _) | (_, Control | CR | LF) => true,
        // GB6, GB7, GB8
        (L, L | V | LV | LVT) | (LV | V, V | T) | (LVT | T, T) => false,
        // GB9, GB9a
        (_, Extend | ZWJ | SpacingMark) => false,
        // GB9b
        (Prepend, _) => false,
        // GB11
        (ZWJ, _) if is_ext_picto(cps[i]) => !picto_before_zwj(cps, classes, i - 1),
        // GB12, GB13
        (RegionalIndicator, RegionalIndicator) => ri_run_before(classes, i) % 2 == 0,
        // GB999
        _ => true,
    }
}

/// Scan back from the ZWJ at `zwj` over Extend code points for an
/// Extended_Pictographic anchor.
fn picto_before_zwj(cps: &[char], classes: &[GraphemeBreak], zwj: usize) -> bool {
    let mut j = zwj;
    while j > 0 {
        j -= 1;
        if classes[j] != GraphemeBreak::Extend {
            return is_ext_picto(cps[j]);
        }
    }
    false
}

/// Number of consecutive Regional_Indicators ending just before `i`.
fn ri_run_before(classes: &[GraphemeBreak], i: usize) -> usize {
    classes[..i]
        .iter()
        .rev()
        .take_while(|&&c| c == GraphemeBreak::RegionalIndicator)
        .count()
}

/// Iterator over the grapheme clusters of a string slice.
pub struct Graphemes<'a> {
    text: &'a str,
    ends: std::vec::IntoIter<usize>,
    start: usize,
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.ends.next()?;
        let cluster = &self.text[self.start..end];
        self.start = end;
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ends.size_hint()
    }
}

impl ExactSizeIterator for Graphemes<'_> {}

/// Byte offsets at which each cluster of `s` ends.
fn byte_ends(s: &str) -> Vec<usize> {
    let cps: Vec<char> = s.chars().collect();
    let mut byte_at = Vec::with_capacity(cps.len() + 1);
    let mut offset = 0;
    byte_at.push(0);
    for c in &cps {
        offset += c.len_utf8();
        byte_at.push(offset);
    }
    boundaries(&cps).into_iter().map(|end| byte_at[end]).collect()
}

/// Iterate over the extended grapheme clusters of a string.
#[must_use]
pub fn graphemes(s: &str) -> Graphemes<'_> {
    Graphemes {
        text: s,
        ends: byte_ends(s).into_iter(),
        start: 0,
    }
}

/// Iterate over grapheme clusters with their starting byte offsets.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    graphemes(s).map(move |g| {
        let start = offset;
        offset += g.len();
        (start, g)
    })
}
