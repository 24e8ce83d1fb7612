//! Range normalization for cluster and line positions.

/// Position sentinel meaning "the end of the text when the operation runs".
///
/// Accepted anywhere a position or range bound is taken.
pub const END: isize = isize::MIN;

/// Resolve a single position against a sequence of `size` elements.
///
/// Negative positions count back from the end; the result is clamped to
/// `[0, size]`.
#[must_use]
pub fn normalize_index(size: usize, pos: isize) -> usize {
    if pos == END {
        return size;
    }
    if pos < 0 {
        return size.saturating_sub(pos.unsigned_abs());
    }
    pos.unsigned_abs().min(size)
}

/// Resolve a half-open `[start, end)` range against `size` elements.
///
/// Both bounds go through [`normalize_index`]; an end before the start is
/// moved up to the start, so the range may be empty but never inverted.
#[must_use]
pub fn normalize_range(size: usize, start: isize, end: isize) -> (usize, usize) {
    let start = normalize_index(size, start);
    let end = normalize_index(size, end).max(start);
    (start, end)
}
