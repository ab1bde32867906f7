//! Inline constructs the draft editor may produce.
//!
//! DESIGN
//! ======
//! `InlineFormat` is the one list of allowed constructs. The editor toolbar
//! is generated from it and the draft-preview sanitizer derives its tag and
//! attribute allowlist from it, so the two cannot drift apart.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InlineFormat {
    Bold,
    Italic,
    Strike,
    Link,
    BulletList,
    OrderedList,
    Blockquote,
    CodeBlock,
}

impl InlineFormat {
    /// Toolbar order.
    pub const ALL: [InlineFormat; 8] = [
        InlineFormat::Bold,
        InlineFormat::Italic,
        InlineFormat::Strike,
        InlineFormat::Link,
        InlineFormat::BulletList,
        InlineFormat::OrderedList,
        InlineFormat::Blockquote,
        InlineFormat::CodeBlock,
    ];

    /// Stable lowercase name, used for CSS modifiers and button titles.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strike => "strike",
            Self::Link => "link",
            Self::BulletList => "bullet-list",
            Self::OrderedList => "ordered-list",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "code-block",
        }
    }

    /// Short toolbar button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Strike => "S",
            Self::Link => "Link",
            Self::BulletList => "• List",
            Self::OrderedList => "1. List",
            Self::Blockquote => "Quote",
            Self::CodeBlock => "Code",
        }
    }

    /// HTML elements this construct may appear as.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Bold => &["strong", "b"],
            Self::Italic => &["em", "i"],
            Self::Strike => &["s", "strike", "del"],
            Self::Link => &["a"],
            Self::BulletList => &["ul", "li"],
            Self::OrderedList => &["ol", "li"],
            Self::Blockquote => &["blockquote"],
            Self::CodeBlock => &["pre", "code"],
        }
    }

    /// Attributes allowed on this construct's elements.
    pub fn attributes(self) -> &'static [&'static str] {
        match self {
            Self::Link => &["href"],
            _ => &[],
        }
    }

    /// Wrap `inner` in this construct's markup.
    ///
    /// List formats turn each non-empty line into a list item. `Link` uses the
    /// trimmed text as its own target.
    pub fn wrap(self, inner: &str) -> String {
        match self {
            Self::Bold => format!("<strong>{inner}</strong>"),
            Self::Italic => format!("<em>{inner}</em>"),
            Self::Strike => format!("<s>{inner}</s>"),
            Self::Link => {
                let href = inner.trim().replace('"', "%22");
                format!("<a href=\"{href}\">{inner}</a>")
            }
            Self::BulletList => format!("<ul>{}</ul>", list_items(inner)),
            Self::OrderedList => format!("<ol>{}</ol>", list_items(inner)),
            Self::Blockquote => format!("<blockquote>{inner}</blockquote>"),
            Self::CodeBlock => format!("<pre><code>{inner}</code></pre>"),
        }
    }
}

fn list_items(inner: &str) -> String {
    let items: String = inner
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("<li>{line}</li>"))
        .collect();
    if items.is_empty() { "<li></li>".to_owned() } else { items }
}
