//! Greedy word wrapping.

use crate::event::{LogLevel, emit_log_with};
use crate::layout::space::collapse_space;
use crate::text::{Block, GraphemeString};

/// Narrowest usable wrap width: one cluster of a broken word plus the hyphen.
pub(crate) const MIN_WRAP_WIDTH: usize = 2;

const SPACE: &[char] = &[' '];
const HYPHEN: &[char] = &['-'];

/// Wrap `text` into lines of at most `width` clusters.
///
/// Whitespace (including `sep`) is collapsed first. Words longer than the
/// width are broken with a trailing `-`. The returned block is joined by
/// `sep` and has no trailing separator; empty input gives one empty line.
pub(crate) fn wrap(text: &GraphemeString, width: usize, sep: &GraphemeString) -> Block {
    let width = if width < MIN_WRAP_WIDTH {
        emit_log_with(LogLevel::Debug, || {
            format!("wrap width {width} below minimum; using {MIN_WRAP_WIDTH}")
        });
        MIN_WRAP_WIDTH
    } else {
        width
    };

    let mut block = Block::with_separator(sep.clone());
    let text = collapse_space(text, sep);
    if text.is_empty() {
        block.append_empty(1);
        return block;
    }

    let mut line: Vec<&[char]> = Vec::new();
    let mut word: Vec<&[char]> = Vec::new();
    for cluster in text.clusters() {
        if cluster == SPACE {
            append_word(&mut block, &mut line, &word, width);
            word.clear();
        } else {
            word.push(cluster);
        }
    }
    if !word.is_empty() {
        append_word(&mut block, &mut line, &word, width);
    }
    if !line.is_empty() {
        block.append(take_line(&mut line));
    }
    block
}

fn take_line(line: &mut Vec<&[char]>) -> GraphemeString {
    GraphemeString::from(std::mem::take(line).concat())
}

/// Place `word` on the current line, flushing full lines into `block`.
fn append_word<'a>(
    block: &mut Block,
    line: &mut Vec<&'a [char]>,
    word: &[&'a [char]],
    width: usize,
) {
    let mut word = word;
    while !word.is_empty() {
        let added = word.len() + usize::from(!line.is_empty());
        let fill = line.len() + added;

        if fill <= width {
            if !line.is_empty() {
                line.push(SPACE);
            }
            line.extend_from_slice(word);
            word = &[];
            if fill == width {
                block.append(take_line(line));
            }
        } else {
            if line.is_empty() {
                line.extend_from_slice(&word[..width - 1]);
                line.push(HYPHEN);
                word = &word[width - 1..];
            }
            block.append(take_line(line));
        }
    }
}
