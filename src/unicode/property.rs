//! Grapheme break property lookup.
//!
//! Every code point has exactly one [`GraphemeBreak`] value, with
//! [`GraphemeBreak::Other`] implied when no table lists it.
//! Extended_Pictographic is a separate property and overlaps `Other`.

use crate::unicode::tables;

const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Grapheme_Cluster_Break property value of a code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphemeBreak {
    CR,
    LF,
    Control,
    Extend,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ZWJ,
    RegionalIndicator,
    Other,
}

fn in_table(table: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[inline]
#[must_use]
pub fn is_cr(c: char) -> bool {
    in_table(tables::CR, c)
}

#[inline]
#[must_use]
pub fn is_lf(c: char) -> bool {
    in_table(tables::LF, c)
}

#[must_use]
pub fn is_control(c: char) -> bool {
    in_table(tables::CONTROL, c)
}

#[must_use]
pub fn is_extend(c: char) -> bool {
    in_table(tables::EXTEND, c)
}

#[must_use]
pub fn is_prepend(c: char) -> bool {
    in_table(tables::PREPEND, c)
}

#[must_use]
pub fn is_spacing_mark(c: char) -> bool {
    in_table(tables::SPACING_MARK, c)
}

#[inline]
#[must_use]
pub fn is_zwj(c: char) -> bool {
    in_table(tables::ZWJ, c)
}

#[must_use]
pub fn is_regional_indicator(c: char) -> bool {
    in_table(tables::REGIONAL_INDICATOR, c)
}

/// Hangul leading consonant (choseong).
#[must_use]
pub fn is_l(c: char) -> bool {
    in_table(tables::L, c)
}

/// Hangul vowel (jungseong).
#[must_use]
pub fn is_v(c: char) -> bool {
    in_table(tables::V, c)
}

/// Hangul trailing consonant (jongseong).
#[must_use]
pub fn is_t(c: char) -> bool {
    in_table(tables::T, c)
}

/// Precomposed Hangul syllable without a trailing consonant.
#[must_use]
pub fn is_lv(c: char) -> bool {
    let cp = c as u32;
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&cp)
        && (cp - HANGUL_SYLLABLE_BASE) % HANGUL_T_COUNT == 0
}

/// Precomposed Hangul syllable with a trailing consonant.
#[must_use]
pub fn is_lvt(c: char) -> bool {
    let cp = c as u32;
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&cp)
        && (cp - HANGUL_SYLLABLE_BASE) % HANGUL_T_COUNT != 0
}

/// Extended_Pictographic=Yes.
#[must_use]
pub fn is_ext_picto(c: char) -> bool {
    in_table(tables::EXTENDED_PICTOGRAPHIC, c)
}

/// Classify a code point by its Grapheme_Cluster_Break value.
#[must_use]
pub fn grapheme_break(c: char) -> GraphemeBreak {
    if c.is_ascii() {
        return match c {
            '\r' => GraphemeBreak::CR,
            '\n' => GraphemeBreak::LF,
            '\u{0}'..='\u{1f}' | '\u{7f}' => GraphemeBreak::Control,
            _ => GraphemeBreak::Other,
        };
    }

    if is_control(c) {
        GraphemeBreak::Control
    } else if is_extend(c) {
        GraphemeBreak::Extend
    } else if is_zwj(c) {
        GraphemeBreak::ZWJ
    } else if is_spacing_mark(c) {
        GraphemeBreak::SpacingMark
    } else if is_prepend(c) {
        GraphemeBreak::Prepend
    } else if is_regional_indicator(c) {
        GraphemeBreak::RegionalIndicator
    } else if is_lv(c) {
        GraphemeBreak::LV
    } else if is_lvt(c) {
        GraphemeBreak::LVT
    } else if is_l(c) {
        GraphemeBreak::L
    } else if is_v(c) {
        GraphemeBreak::V
    } else if is_t(c) {
        GraphemeBreak::T
    } else {
        GraphemeBreak::Other
    }
}
