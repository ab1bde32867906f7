use super::*;

// =============================================================
// Enumeration
// =============================================================

#[test]
fn all_lists_each_format_once() {
    let mut seen = std::collections::HashSet::new();
    for format in InlineFormat::ALL {
        assert!(seen.insert(format), "duplicate {format:?}");
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn names_are_unique() {
    let names: std::collections::HashSet<_> = InlineFormat::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), InlineFormat::ALL.len());
}

#[test]
fn only_link_carries_attributes() {
    for format in InlineFormat::ALL {
        if format == InlineFormat::Link {
            assert_eq!(format.attributes(), &["href"]);
        } else {
            assert!(format.attributes().is_empty());
        }
    }
}

// =============================================================
// Wrapping
// =============================================================

#[test]
fn wrap_inline_formats() {
    assert_eq!(InlineFormat::Bold.wrap("hi"), "<strong>hi</strong>");
    assert_eq!(InlineFormat::Italic.wrap("hi"), "<em>hi</em>");
    assert_eq!(InlineFormat::Strike.wrap("hi"), "<s>hi</s>");
    assert_eq!(InlineFormat::Blockquote.wrap("hi"), "<blockquote>hi</blockquote>");
    assert_eq!(InlineFormat::CodeBlock.wrap("x = 1"), "<pre><code>x = 1</code></pre>");
}

#[test]
fn wrap_link_uses_text_as_target() {
    assert_eq!(
        InlineFormat::Link.wrap(" https://example.com "),
        "<a href=\"https://example.com\"> https://example.com </a>"
    );
}

#[test]
fn wrap_link_escapes_quotes_in_target() {
    let wrapped = InlineFormat::Link.wrap("a\"b");
    assert!(wrapped.starts_with("<a href=\"a%22b\">"));
}

#[test]
fn wrap_lists_split_lines() {
    assert_eq!(InlineFormat::BulletList.wrap("one\n\ntwo"), "<ul><li>one</li><li>two</li></ul>");
    assert_eq!(InlineFormat::OrderedList.wrap("one"), "<ol><li>one</li></ol>");
}

#[test]
fn wrap_empty_list_keeps_one_item() {
    assert_eq!(InlineFormat::BulletList.wrap(""), "<ul><li></li></ul>");
}

#[test]
fn wrapped_markup_only_uses_declared_tags() {
    for format in InlineFormat::ALL {
        let wrapped = format.wrap("text");
        for tag in wrapped.split('<').skip(1) {
            let name: String = tag
                .trim_start_matches('/')
                .chars()
                .take_while(char::is_ascii_alphabetic)
                .collect();
            assert!(format.tags().contains(&name.as_str()), "{format:?} emitted <{name}>");
        }
    }
}
