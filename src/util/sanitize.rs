//! HTML sanitization for committed messages and draft previews.
//!
//! SYSTEM CONTEXT
//! ==============
//! `plain_text` is the enforcement boundary for the message log: every entry
//! passes through it before it is stored, and again before it is rendered.
//! It allows no tags and no attributes. Text inside `<script>` and `<style>`
//! is dropped; text inside any other element is kept. Text is emitted with
//! `&`, `<`, `>` and non-breaking spaces escaped, so the output never contains
//! a markup delimiter and feeding it back in yields the same string.
//!
//! `draft_preview` allows exactly the constructs listed by
//! [`InlineFormat`] and is only used to show the draft while editing.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::util::format::InlineFormat;

/// Elements whose text content is removed along with the element.
const DROPPED_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Strip all markup from `input`, leaving escaped plain text.
pub fn plain_text(input: &str) -> String {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::new())
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new())
        .clean_content_tags(DROPPED_CONTENT_TAGS.into_iter().collect())
        .link_rel(None);
    builder.clean(input).to_string()
}

/// Sanitize a draft for preview, keeping only the allowed inline constructs.
pub fn draft_preview(input: &str) -> String {
    let mut tags = HashSet::new();
    let mut tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    for format in InlineFormat::ALL {
        for tag in format.tags() {
            tags.insert(*tag);
            if !format.attributes().is_empty() {
                tag_attributes.entry(*tag).or_default().extend(format.attributes().iter().copied());
            }
        }
    }

    let mut builder = Builder::default();
    builder
        .tags(tags)
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::new())
        .clean_content_tags(DROPPED_CONTENT_TAGS.into_iter().collect());
    builder.clean(input).to_string()
}
