//! Display rows for the message feed.
//!
//! Rows alternate sides by index parity only; there is no sender identity.
//! Each row carries the entry re-sanitized at read time, so the feed never
//! renders markup even if an unsanitized entry reaches the log.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::util::sanitize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Side for the row at `index`: even rows right, odd rows left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::Right } else { Side::Left }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Side::Right => "message-feed__row--right",
            Side::Left => "message-feed__row--left",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedRow {
    pub index: usize,
    pub side: Side,
    /// Escaped plain text, safe to assign as inner HTML.
    pub html: String,
}

/// Lazy iterator over feed rows. Cloning restarts from the same position.
#[derive(Clone, Debug)]
pub struct FeedRows<'a> {
    entries: std::iter::Enumerate<std::slice::Iter<'a, String>>,
}

impl<'a> FeedRows<'a> {
    pub fn new(entries: &'a [String]) -> Self {
        Self { entries: entries.iter().enumerate() }
    }
}

impl Iterator for FeedRows<'_> {
    type Item = FeedRow;

    fn next(&mut self) -> Option<FeedRow> {
        let (index, entry) = self.entries.next()?;
        Some(FeedRow { index, side: Side::for_index(index), html: sanitize::plain_text(entry) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for FeedRows<'_> {}
