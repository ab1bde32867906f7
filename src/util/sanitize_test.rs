use super::*;

const SAMPLES: &[&str] = &[
    "",
    "plain words",
    "<p>Hello <strong>world</strong></p>",
    "<p><br></p>",
    "<script>alert(1)</script>Hi",
    "<style>p { color: red }</style>styled",
    "<img src=x onerror=alert(1)>",
    "<a href=\"javascript:alert(1)\">click</a>",
    "Tom &amp; Jerry",
    "1 < 2 && 3 > 2",
    "&lt;b&gt;not bold&lt;/b&gt;",
    "<<script>script>nested</script>",
    "<!-- note -->visible",
    "<ul><li>one</li><li>two</li></ul>",
    "non\u{a0}breaking",
    "<div title=\"x\" class=\"y\">attrs</div>",
    "unterminated <b",
];

// =============================================================
// plain_text
// =============================================================

#[test]
fn plain_text_strips_tags_and_keeps_text() {
    assert_eq!(plain_text("<p>Hello <strong>world</strong></p>"), "Hello world");
}

#[test]
fn plain_text_drops_script_content() {
    assert_eq!(plain_text("<script>alert(1)</script>Hi"), "Hi");
}

#[test]
fn plain_text_drops_style_content() {
    assert_eq!(plain_text("<style>p { color: red }</style>styled"), "styled");
}

#[test]
fn plain_text_removes_event_handler_elements_entirely() {
    assert_eq!(plain_text("<img src=x onerror=alert(1)>"), "");
}

#[test]
fn plain_text_keeps_link_text_only() {
    assert_eq!(plain_text("<a href=\"https://example.com\">site</a>"), "site");
}

#[test]
fn plain_text_of_markup_only_draft_is_empty() {
    assert_eq!(plain_text("<p><br></p>"), "");
}

#[test]
fn plain_text_drops_comments() {
    assert_eq!(plain_text("<!-- note -->visible"), "visible");
}

#[test]
fn plain_text_preserves_entities() {
    assert_eq!(plain_text("Tom &amp; Jerry"), "Tom &amp; Jerry");
    assert_eq!(plain_text("Tom & Jerry"), "Tom &amp; Jerry");
}

#[test]
fn plain_text_escapes_stray_delimiters() {
    assert_eq!(plain_text("1 < 2"), "1 &lt; 2");
    assert_eq!(plain_text("&lt;b&gt;x&lt;/b&gt;"), "&lt;b&gt;x&lt;/b&gt;");
}

#[test]
fn plain_text_keeps_surrounding_whitespace() {
    assert_eq!(plain_text("  hi  "), "  hi  ");
}

#[test]
fn plain_text_is_idempotent() {
    for sample in SAMPLES {
        let once = plain_text(sample);
        assert_eq!(plain_text(&once), once, "input: {sample:?}");
    }
}

#[test]
fn plain_text_never_emits_markup_delimiters() {
    for sample in SAMPLES {
        let out = plain_text(sample);
        assert!(!out.contains('<'), "{sample:?} -> {out:?}");
        assert!(!out.contains('>'), "{sample:?} -> {out:?}");
    }
}

// =============================================================
// draft_preview
// =============================================================

#[test]
fn draft_preview_keeps_inline_formats() {
    for format in InlineFormat::ALL {
        let wrapped = format.wrap("text");
        let cleaned = draft_preview(&wrapped);
        let first_tag = format.tags()[0];
        assert!(cleaned.contains(&format!("<{first_tag}")), "{format:?}: {cleaned}");
        assert!(cleaned.contains("text"));
    }
}

#[test]
fn draft_preview_strips_attributes_outside_allowlist() {
    assert_eq!(draft_preview("<strong onclick=\"x()\">hi</strong>"), "<strong>hi</strong>");
}

#[test]
fn draft_preview_removes_disallowed_tags() {
    assert_eq!(draft_preview("<div><em>a</em></div>"), "<em>a</em>");
    assert_eq!(draft_preview("<script>alert(1)</script>ok"), "ok");
}

#[test]
fn draft_preview_rejects_script_urls() {
    let cleaned = draft_preview("<a href=\"javascript:alert(1)\">x</a>");
    assert!(!cleaned.contains("javascript"));
    assert!(cleaned.contains(">x</a>"));
}
