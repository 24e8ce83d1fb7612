//! Fuzz target for grapheme segmentation.
//!
//! Segmentation must be lossless and cluster slicing must stay on cluster
//! boundaries for any input.

#![no_main]

use fixedtext::{END, GraphemeString, graphemes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let joined: String = graphemes(data).collect();
    assert_eq!(joined, data);

    let gs = GraphemeString::from(data);
    let len = gs.len();
    assert_eq!(len, graphemes(data).count());
    assert_eq!(gs.byte_offset(len), data.len());

    let mid = isize::try_from(len / 2).unwrap_or(0);
    let head = gs.sub(0, mid);
    let tail = gs.sub(mid, END);
    assert_eq!(format!("{head}{tail}"), data);

    assert_eq!(gs.reverse().reverse(), gs);
});
