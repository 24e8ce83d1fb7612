//! Unicode grapheme cluster segmentation.
//!
//! Break properties come from generated range tables; segmentation follows
//! the extended grapheme cluster rules of UAX #29.

mod property;
mod segment;
mod tables;

pub use property::{
    GraphemeBreak, grapheme_break, is_control, is_cr, is_ext_picto, is_extend, is_l, is_lf, is_lv,
    is_lvt, is_prepend, is_regional_indicator, is_spacing_mark, is_t, is_v, is_zwj,
};
pub use segment::{Graphemes, boundaries, grapheme_indices, graphemes};
