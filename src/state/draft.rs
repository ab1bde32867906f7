//! Draft editing helpers.
//!
//! The draft is an HTML fragment. Toolbar actions wrap the selected range in
//! an [`InlineFormat`]; with no selection the whole draft is wrapped.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::ops::Range;

use crate::util::format::InlineFormat;

/// Convert a UTF-16 code-unit offset (as reported by DOM selection APIs) into
/// a byte offset into `text`. Offsets past the end clamp to `text.len()`;
/// offsets inside a surrogate pair round down to the char start.
pub fn utf16_to_byte_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > utf16 {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Convert a UTF-16 selection into a byte range, ordered and clamped.
pub fn selection_to_bytes(text: &str, start: usize, end: usize) -> Range<usize> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    utf16_to_byte_offset(text, lo)..utf16_to_byte_offset(text, hi)
}

/// Wrap `selection` of `draft` (byte range) in `format`.
///
/// An empty or absent selection wraps the whole draft. Ranges outside the
/// draft or off a char boundary fall back to the whole draft.
pub fn apply_format(draft: &str, format: InlineFormat, selection: Option<Range<usize>>) -> String {
    let range = selection
        .filter(|r| r.start < r.end && r.end <= draft.len())
        .filter(|r| draft.is_char_boundary(r.start) && draft.is_char_boundary(r.end));

    match range {
        Some(r) => {
            let mut out = String::with_capacity(draft.len() + 32);
            out.push_str(&draft[..r.start]);
            out.push_str(&format.wrap(&draft[r.clone()]));
            out.push_str(&draft[r.end..]);
            out
        }
        None => format.wrap(draft),
    }
}

/// Whether a keydown should send the draft: Enter without Shift, outside an
/// IME composition (Enter there confirms the candidate text).
pub fn submits_draft(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}
