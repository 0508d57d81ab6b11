// src/core/search.rs
// Search-key generation for one title.
//
// Keys are stored lowercased; the page script matches the user's query
// against every key of every game card.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::roman;
use super::translit::{Deunicode, Transliterator};

// English a/an/the, Italian il/lo/la/i/gli/un/uno/una/l'/un'.
macro_rules! articles {
    () => {
        r"(an?\s+|the\s+|il?\s+|l[oiae]\s+|gli\s+|un[oa]?\s+|(?:l|un)')"
    };
}

static LEADING_ARTICLE: LazyLock<Regex> = regex!(concat!(r"(?i)^", articles!(), r"(.+?)$"));
static TRAILING_ARTICLE: LazyLock<Regex> = regex!(concat!(r"(?i), ", articles!(), r"$"));
static TRADEMARK: LazyLock<Regex> = regex!(r"(?i)\(tm\)");
static REGISTERED: LazyLock<Regex> = regex!(r"(?i)\(r\)");

static PUNCT: LazyLock<Regex> = regex!(r"[,.…]");
static SEPARATORS: LazyLock<Regex> = regex!(r"[;:'-]");
static BREAKERS: LazyLock<Regex> = regex!(r"[|\\/()]");
static MULTI_WS: LazyLock<Regex> = regex!(r"\s{2,}");
static ZEROS_T: LazyLock<Regex> = regex!(r"([0-9])0{12}(\s|$)");
static ZEROS_G: LazyLock<Regex> = regex!(r"([0-9])0{9}(\s|$)");
static ZEROS_M: LazyLock<Regex> = regex!(r"([0-9])0{6}(\s|$)");
static ZEROS_K: LazyLock<Regex> = regex!(r"([0-9])0{3}(\s|$)");

/// One rewrite step: every match of `.0` becomes `.1` (regex replacement syntax).
type Rule = (&'static Regex, &'static str);

/// Each stage is applied to the previous stage's output and yields a key.
/// Whitespace collapse has to run before the zero-run rules, which anchor
/// on whitespace or end of string.
fn stages() -> [Vec<Rule>; 3] {
    [
        vec![(&*PUNCT, "")],
        vec![(&*SEPARATORS, ""), (&*BREAKERS, " "), (&*MULTI_WS, " ")],
        vec![
            (&*ZEROS_T, "${1}t${2}"),
            (&*ZEROS_G, "${1}g${2}"),
            (&*ZEROS_M, "${1}m${2}"),
            (&*ZEROS_K, "${1}k${2}"),
        ],
    ]
}

/// Deduplicated, lowercased lookup keys for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchKeys(BTreeSet<String>);

impl SearchKeys {
    pub fn contains(&self, key: &str) -> bool { self.0.contains(key) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }

    /// Set semantics: returns false when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    /// JSON array ready for a single-quoted HTML attribute.
    pub fn to_json_attr(&self) -> String {
        // A list of strings always serializes.
        serde_json::to_string(self)
            .unwrap_or_else(|_| s!("[]"))
            .replace('\'', "&apos;")
    }
}

/// The transliterated, lowercased title with a leading article moved to the
/// end (`"witcher 3: wild hunt, the"`). Used both as a key and as sort key.
pub fn sortable_title(title: &str, translit: &dyn Transliterator) -> String {
    let ascii = translit.transliterate(title).to_lowercase();
    let moved = LEADING_ARTICLE.replace(&ascii, "${2}, ${1}");
    let mut out = moved.trim().to_string();
    for rx in [&TRAILING_ARTICLE, &TRADEMARK, &REGISTERED] {
        out = rx.replace_all(&out, "").into_owned();
    }
    out
}

/// All search keys for `title`, using the default transliterator.
pub fn generate_keys(title: &str) -> SearchKeys {
    generate_keys_with(title, &Deunicode)
}

pub fn generate_keys_with(title: &str, translit: &dyn Transliterator) -> SearchKeys {
    let mut keys = SearchKeys::default();
    keys.insert(title.to_lowercase());

    let mut item = sortable_title(title, translit);
    keys.insert(item.clone());

    for stage in stages() {
        for (rx, rep) in stage {
            item = rx.replace_all(&item, rep).trim().to_string();
        }
        keys.insert(item.clone());
    }

    let numerals: Vec<String> = item.split(' ').map(roman::convert).collect();
    keys.insert(numerals.join(" "));
    keys
}
