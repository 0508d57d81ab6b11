// tests/description.rs
use galaxy_export::core::description::{parse, Element, SPACED};
use galaxy_export::core::format_description;
use galaxy_export::core::html::{parse_start_tag, AttrValue, StartTag};
use pretty_assertions::assert_eq;

#[test]
fn paragraphs_and_bullets() {
    let raw = "First paragraph.\n\n* item one\n* item two\n\nSecond paragraph.";
    assert_eq!(
        format_description(raw),
        "<p>First paragraph.</p><ul><li class=\"spaced-1\">item one</li><li>item two</li></ul>\
         <p class=\"spaced-1\">Second paragraph.</p>"
    );
}

#[test]
fn trailing_blank_lines_do_not_reopen_the_list() {
    let html = format_description("* a\n* b\n\n");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn blank_line_inside_a_list_spaces_the_next_item() {
    assert_eq!(
        format_description("* a\n\n* b"),
        "<ul><li>a</li><li class=\"spaced-1\">b</li></ul>"
    );
}

#[test]
fn hyphen_bullet() {
    assert_eq!(format_description("- only item"), "<ul><li>only item</li></ul>");
}

#[test]
fn literal_newline_escapes_split_lines() {
    assert_eq!(format_description(r"One\nTwo"), "<p>One</p><p>Two</p>");
}

#[test]
fn existing_paragraph_tags_are_normalized() {
    assert_eq!(format_description("<p>One</p><p>Two</p>"), "<p>One</p><p>Two</p>");
}

#[test]
fn attributed_paragraph_keeps_its_attributes() {
    assert_eq!(
        format_description(r#"<p class="lead">Intro</p>Body"#),
        r#"<p class="lead">Intro</p><p>Body</p>"#
    );
}

#[test]
fn inline_markup_is_not_escaped() {
    assert_eq!(format_description("<b>Bold</b> move..."), "<p><b>Bold</b> move…</p>");
}

#[test]
fn wrapping_quotes_are_removed() {
    assert_eq!(format_description("\"A quoted summary.\""), "<p>A quoted summary.</p>");
}

#[test]
fn quotes_stay_when_there_are_more_than_two() {
    assert_eq!(
        format_description("\"Hi\" she said \"bye\""),
        "<p>\"Hi\" she said \"bye\"</p>"
    );
}

#[test]
fn single_quoted_line_of_dialogue_also_loses_its_quotes() {
    // Known limitation of the unwrap heuristic.
    assert_eq!(format_description("\"Stay awhile and listen.\""), "<p>Stay awhile and listen.</p>");
}

#[test]
fn empty_summary_renders_nothing() {
    assert_eq!(format_description(""), "");
    assert_eq!(format_description("   \n  "), "");
}

#[test]
fn parse_exposes_blank_elements() {
    let els = parse("a\n\nb");
    assert_eq!(els.len(), 3);
    assert_eq!(els[1], Element::Blank);
    assert!(matches!(&els[2], Element::Paragraph { spacing: Some(s), .. } if *s == SPACED));
}

#[test]
fn start_tag_parsing() {
    let tag = parse_start_tag(r#"<P CLASS="lead  big" Title='a &amp; b' hidden>"#);
    assert_eq!(tag.name, "p");
    assert_eq!(
        tag.attrs,
        vec![
            ("class".to_string(), AttrValue::Classes(vec!["lead".into(), "big".into()])),
            ("title".to_string(), AttrValue::Text("a & b".into())),
            ("hidden".to_string(), AttrValue::Text(String::new())),
        ]
    );
    assert_eq!(tag.to_html(), r#"<p class="lead big" title="a & b">"#);
}

#[test]
fn start_tag_unquoted_values() {
    let tag = parse_start_tag("<p id=intro class=x>");
    assert_eq!(tag.to_html(), r#"<p id="intro" class="x">"#);
}

#[test]
fn push_class_dedupes_and_appends() {
    let mut tag = parse_start_tag(r#"<p class="lead big lead">"#);
    tag.push_class("spaced-1");
    tag.push_class("big");
    assert_eq!(tag.to_html(), r#"<p class="lead big spaced-1">"#);

    let mut tag = parse_start_tag(r#"<p id="x">"#);
    tag.push_class("spaced-1");
    assert_eq!(tag.to_html(), r#"<p id="x" class="spaced-1">"#);

    let mut tag = StartTag::paragraph();
    assert_eq!(tag.to_html(), "<p>");
    tag.push_class("spaced-1");
    assert_eq!(tag.to_html(), r#"<p class="spaced-1">"#);
}

#[test]
fn values_with_double_quotes_get_single_quotes() {
    let tag = parse_start_tag(r#"<p title='say "hi"'>"#);
    assert_eq!(tag.to_html(), r#"<p title='say "hi"'>"#);
}
