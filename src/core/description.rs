// src/core/description.rs
// Free-text game summaries → paragraphs and bullet lists.
//
// Summaries arrive in every shape: plain lines, literal "\n" escapes,
// hand-written <p> tags (sometimes with classes the author wants kept),
// "*" or "-" bullets. Blank lines are kept long enough to tell which
// elements should get extra spacing, then dropped.

use std::sync::LazyLock;

use regex::Regex;

use super::html::{self, StartTag};
use super::sanitize;

/// Class added to an element preceded by one or more blank lines.
pub const SPACED: &str = "spaced-1";

static CLOSE_P: LazyLock<Regex> = regex!(r"\s*</p>\s*");
static BARE_OPEN_P: LazyLock<Regex> = regex!(r"\s*<p>\s*");
static ATTR_OPEN_P: LazyLock<Regex> = regex!(r"\s*(<p[^>]*>)\s*");
static LEADING_P: LazyLock<Regex> = regex!(r"^\s*(<p[^>]*>)\s*");
static BULLET: LazyLock<Regex> = regex!(r"^[*-]\s*");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// Blank source line; only counts towards the next element's spacing.
    Blank,
    Paragraph { tag: StartTag, text: String, spacing: Option<&'static str> },
    ListItem { text: String, spacing: Option<&'static str> },
}

impl Element {
    fn to_html(&self) -> String {
        match self {
            Element::Blank => s!(),
            Element::Paragraph { tag, text, spacing } => {
                let mut tag = tag.clone();
                if let Some(class) = spacing {
                    tag.push_class(class);
                }
                join!(&tag.to_html(), text, "</p>")
            }
            Element::ListItem { text, spacing } => match spacing {
                Some(class) => format!("<li class=\"{class}\">{text}</li>"),
                None => format!("<li>{text}</li>"),
            },
        }
    }
}

/// Strips a pair of wrapping quotes left by the export, but only when they
/// are the sole two `"` in the text. A summary that is exactly one quoted
/// line of dialogue loses its quotes too.
fn unwrap_quotes(text: String) -> String {
    let quotes = text.matches('"').count();
    if quotes == 2 && text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        s!(text[1..text.len() - 1].trim())
    } else {
        text
    }
}

/// Normalizes the raw summary into one candidate element per line.
/// Blank lines survive as empty strings.
fn split_lines(raw: &str) -> Vec<String> {
    let text = unwrap_quotes(sanitize::clean(raw, false)).replace("\\n", "\n");
    let text = CLOSE_P.replace_all(&text, "\n");
    let text = BARE_OPEN_P.replace_all(&text, "\n");
    let text = ATTR_OPEN_P.replace_all(&text, "\n${1}");
    text.trim().split('\n').map(|l| s!(l.trim())).collect()
}

/// Parses a summary into elements, one per source line.
pub fn parse(raw: &str) -> Vec<Element> {
    let lines = split_lines(raw);
    let mut out = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            out.push(Element::Blank);
            continue;
        }

        let blanks = lines[..i].iter().rev().take_while(|l| l.is_empty()).count();
        let spacing = if i > 0 && blanks > 0 { Some(SPACED) } else { None };

        if let Some(m) = BULLET.find(line) {
            out.push(Element::ListItem { text: s!(&line[m.end()..]), spacing });
            continue;
        }

        let (tag, text) = match LEADING_P.captures(line) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                let open = caps.get(1).map_or("", |m| m.as_str());
                (html::parse_start_tag(open), s!(&line[whole..]))
            }
            None => (StartTag::paragraph(), line.clone()),
        };
        out.push(Element::Paragraph { tag, text, spacing });
    }
    out
}

/// Renders parsed elements; consecutive list items share one `<ul>`.
pub fn render(elements: &[Element]) -> String {
    let mut out = s!();
    let mut in_list = false;

    for el in elements {
        match el {
            Element::Blank => {}
            Element::ListItem { .. } => {
                if !in_list {
                    out.push_str("<ul>");
                    in_list = true;
                }
                out.push_str(&el.to_html());
            }
            Element::Paragraph { .. } => {
                if in_list {
                    out.push_str("</ul>");
                    in_list = false;
                }
                out.push_str(&el.to_html());
            }
        }
    }
    if in_list {
        out.push_str("</ul>");
    }
    out
}

/// Summary text → HTML fragment.
pub fn format_description(raw: &str) -> String {
    render(&parse(raw))
}
