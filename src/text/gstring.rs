//! Immutable strings indexed by grapheme cluster.
//!
//! A [`GraphemeString`] stores its code points and computes cluster
//! boundaries the first time a cluster index is needed. Every position taken
//! or returned by its methods counts user-perceived characters, never bytes
//! or code points.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::text::range::normalize_range;
use crate::unicode::boundaries;

/// An immutable string value whose positions are grapheme clusters.
///
/// Cloning is cheap: clones share the code points and the boundary cache, so
/// boundaries computed through any clone are visible to all of them.
#[derive(Clone, Default)]
pub struct GraphemeString {
    cps: Arc<[char]>,
    ends: Arc<OnceLock<Box<[usize]>>>,
}

impl GraphemeString {
    /// Create a string from a code point sequence.
    #[must_use]
    pub fn new(cps: impl Into<Arc<[char]>>) -> Self {
        Self {
            cps: cps.into(),
            ends: Arc::default(),
        }
    }

    fn with_ends(cps: Arc<[char]>, ends: Vec<usize>) -> Self {
        Self {
            cps,
            ends: Arc::new(OnceLock::from(ends.into_boxed_slice())),
        }
    }

    fn ends(&self) -> &[usize] {
        self.ends.get_or_init(|| boundaries(&self.cps).into_boxed_slice())
    }

    /// Code point range `[start, end)` of cluster `i`. `i` must be in range.
    fn cluster_span(&self, i: usize) -> (usize, usize) {
        let ends = self.ends();
        let start = if i == 0 { 0 } else { ends[i - 1] };
        (start, ends[i])
    }

    /// Code point offset at which cluster `i` starts, or the code point
    /// length when `i == len()`.
    fn cp_offset(&self, i: usize) -> usize {
        if i == 0 { 0 } else { self.ends()[i - 1] }
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.cps.is_empty() {
            return 0;
        }
        self.ends().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cps.is_empty()
    }

    /// The code points of cluster `i`.
    pub fn char_at(&self, i: usize) -> Result<Vec<char>> {
        let len = self.len();
        if i >= len {
            return Err(Error::OutOfRange { index: i, len });
        }
        let (start, end) = self.cluster_span(i);
        Ok(self.cps[start..end].to_vec())
    }

    /// Return a copy with cluster `i` replaced by `cluster`.
    ///
    /// The replacement must be non-empty. It is not required to be a single
    /// cluster; the result is segmented afresh.
    pub fn set_char_at(&self, i: usize, cluster: &[char]) -> Result<Self> {
        if cluster.is_empty() {
            return Err(Error::InvalidArgument(
                "replacement cluster must not be empty".to_string(),
            ));
        }
        let len = self.len();
        if i >= len {
            return Err(Error::OutOfRange { index: i, len });
        }
        let (start, end) = self.cluster_span(i);
        let mut cps = Vec::with_capacity(self.cps.len() - (end - start) + cluster.len());
        cps.extend_from_slice(&self.cps[..start]);
        cps.extend_from_slice(cluster);
        cps.extend_from_slice(&self.cps[end..]);
        Ok(Self::new(cps))
    }

    /// Clusters `[start, end)`.
    ///
    /// Negative bounds count from the end and out-of-range bounds clamp; an
    /// empty or inverted range gives the empty string.
    #[must_use]
    pub fn sub(&self, start: isize, end: isize) -> Self {
        let (start, end) = normalize_range(self.len(), start, end);
        self.sub_clusters(start, end)
    }

    /// Clusters `[start, end)` with already-normalized bounds.
    pub(crate) fn sub_clusters(&self, start: usize, end: usize) -> Self {
        if start >= end {
            return Self::default();
        }
        if start == 0 && end == self.len() {
            return self.clone();
        }
        let cp_start = self.cp_offset(start);
        let ends: Vec<usize> = self.ends()[start..end]
            .iter()
            .map(|&e| e - cp_start)
            .collect();
        let cp_end = self.ends()[end - 1];
        Self::with_ends(Arc::from(&self.cps[cp_start..cp_end]), ends)
    }

    /// Concatenate two strings.
    ///
    /// Clusters at the seam may merge, so the result is segmented afresh.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut cps = Vec::with_capacity(self.cps.len() + other.cps.len());
        cps.extend_from_slice(&self.cps);
        cps.extend_from_slice(&other.cps);
        Self::new(cps)
    }

    /// Repeat the string `n` times.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Self {
        Self::new(self.cps.repeat(n))
    }

    fn clusters_match_at(&self, pos: usize, needle: &Self) -> bool {
        (0..needle.len()).all(|j| {
            let (hs, he) = self.cluster_span(pos + j);
            let (ns, ne) = needle.cluster_span(j);
            self.cps[hs..he] == needle.cps[ns..ne]
        })
    }

    /// First cluster position at which `needle` occurs as a run of whole
    /// clusters.
    ///
    /// An empty needle is found at 0 in a non-empty string and nowhere in an
    /// empty one.
    #[must_use]
    pub fn index(&self, needle: &Self) -> Option<usize> {
        let len = self.len();
        let nlen = needle.len();
        if len == 0 || nlen > len {
            return None;
        }
        (0..=len - nlen).find(|&i| self.clusters_match_at(i, needle))
    }

    /// Last cluster position at which `needle` occurs.
    ///
    /// An empty needle in a non-empty string is found at `len()`.
    #[must_use]
    pub fn last_index(&self, needle: &Self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        if needle.is_empty() {
            return Some(len);
        }
        let rev_at = self.reverse().index(&needle.reverse())?;
        Some(len - rev_at - needle.len())
    }

    /// First cluster whose code points satisfy `pred`.
    pub fn index_func<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&[char]) -> bool,
    {
        self.clusters().position(|c| pred(c))
    }

    /// Last cluster whose code points satisfy `pred`.
    pub fn last_index_func<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&[char]) -> bool,
    {
        let clusters: Vec<&[char]> = self.clusters().collect();
        clusters.iter().rposition(|&c| pred(c))
    }

    /// Clusters in reverse order; code points inside each cluster keep
    /// their order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut cps = Vec::with_capacity(self.cps.len());
        let mut ends = Vec::with_capacity(self.len());
        for i in (0..self.len()).rev() {
            let (start, end) = self.cluster_span(i);
            cps.extend_from_slice(&self.cps[start..end]);
            ends.push(cps.len());
        }
        Self::with_ends(Arc::from(cps), ends)
    }

    /// Lexicographic code point comparison; a proper prefix sorts first.
    #[must_use]
    pub fn less(&self, other: &Self) -> bool {
        self.cps[..] < other.cps[..]
    }

    /// Copy of the code points.
    #[must_use]
    pub fn runes(&self) -> Vec<char> {
        self.cps.to_vec()
    }

    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.cps
    }

    /// Iterate over clusters as code point slices.
    pub fn clusters(&self) -> impl DoubleEndedIterator<Item = &[char]> + '_ {
        (0..self.len()).map(move |i| {
            let (start, end) = self.cluster_span(i);
            &self.cps[start..end]
        })
    }

    /// UTF-8 byte offset at which cluster `i` starts. `i == len()` gives the
    /// byte length; larger values clamp to it.
    #[must_use]
    pub fn byte_offset(&self, i: usize) -> usize {
        let cp = self.cp_offset(i.min(self.len()));
        self.cps[..cp].iter().map(|c| c.len_utf8()).sum()
    }

    /// Whether the string begins with the clusters of `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.len() <= self.len() && self.clusters_match_at(0, prefix)
    }

    /// Whether the string ends with the clusters of `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: &Self) -> bool {
        suffix.len() <= self.len() && self.clusters_match_at(self.len() - suffix.len(), suffix)
    }
}

impl PartialEq for GraphemeString {
    fn eq(&self, other: &Self) -> bool {
        self.cps == other.cps
    }
}

impl Eq for GraphemeString {}

impl PartialOrd for GraphemeString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GraphemeString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cps[..].cmp(&other.cps[..])
    }
}

impl Hash for GraphemeString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cps.hash(state);
    }
}

impl fmt::Display for GraphemeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cps.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

impl fmt::Debug for GraphemeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GraphemeString")
            .field(&self.to_string())
            .finish()
    }
}

impl From<&str> for GraphemeString {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for GraphemeString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for GraphemeString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<char>> for GraphemeString {
    fn from(cps: Vec<char>) -> Self {
        Self::new(cps)
    }
}

impl FromIterator<char> for GraphemeString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<char>>())
    }
}
