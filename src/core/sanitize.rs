// src/core/sanitize.rs
// Cleanup of free-text fields coming from the export.

use std::sync::LazyLock;

use regex::Regex;

static ELLIPSIS: LazyLock<Regex> = regex!(r"\.\.\.");
static SPACED_HYPHEN: LazyLock<Regex> = regex!(r"\s+-\s+");
// Windows-1252 punctuation that survived as C1 control codepoints.
static CP1252_RSQUO: LazyLock<Regex> = regex!(r"\x{0092}");
static CP1252_LDQUO: LazyLock<Regex> = regex!(r"\x{0093}");
static CP1252_RDQUO: LazyLock<Regex> = regex!(r"\x{0094}");
static CP1252_EMDASH: LazyLock<Regex> = regex!(r"\s*\x{0097}\s*");

/// Ordered; each rule sees the output of the one before.
fn rules() -> [(&'static Regex, &'static str); 6] {
    [
        (&*ELLIPSIS, "…"),
        (&*SPACED_HYPHEN, " – "),
        (&*CP1252_RSQUO, "’"),
        (&*CP1252_LDQUO, "“"),
        (&*CP1252_RDQUO, "”"),
        (&*CP1252_EMDASH, " – "),
    ]
}

/// Trim, fix typographic leftovers, and HTML-escape when `purge` is set.
///
/// Pass `purge = false` when the caller still has to structure the text
/// (see [`crate::core::description`]).
pub fn clean(text: &str, purge: bool) -> String {
    let mut out = s!(text.trim());
    for (rx, rep) in rules() {
        out = rx.replace_all(&out, rep).into_owned();
    }
    if purge { escape(&out) } else { out }
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

