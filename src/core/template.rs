// src/core/template.rs
// `{name}` substitution that never fails, plus `{rep}…{/rep}` blocks.
//
// Unknown placeholders are echoed back as `{name}` so a typo in a template
// shows up on the page instead of aborting the export. The repeatable-block
// pass reuses that: `{rep}`, `{/rep}` and the block's own `{0}`/`{1}` all
// survive the first pass untouched.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static REPEAT: LazyLock<Regex> = regex!(r"(\s*)\{rep\}(.*?)\{/rep\}");

/// Names consumed by one render call. Positional fields are recorded by index.
pub type UsedKeys = BTreeSet<String>;

/// Ordered parameter map; insertion order drives repeatable blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateParams {
    entries: Vec<(String, String)>,
}

impl TemplateParams {
    pub fn new() -> Self { Self::default() }

    /// Sets `key`, keeping its original position when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries whose keys were not consumed by a render pass.
    pub fn leftover(&self, used: &UsedKeys) -> TemplateParams {
        let entries = self.entries.iter().filter(|(k, _)| !used.contains(k)).cloned().collect();
        TemplateParams { entries }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for TemplateParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = TemplateParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub used: UsedKeys,
}

/// Substitutes `{name}`, `{0}` and `{}` fields; `{{`/`}}` are literal braces.
/// A `!conversion` or `:spec` suffix is accepted and ignored.
/// Missing keys render as `{name}`; unbalanced braces are copied through.
pub fn render(template: &str, positional: &[&str], keyed: &TemplateParams) -> Rendered {
    let mut text = String::with_capacity(template.len());
    let mut used = UsedKeys::new();
    let mut auto_index = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        text.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            text.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            text.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(len) = field_len(tail) else {
            text.push_str(tail);
            rest = "";
            break;
        };
        let body = &tail[1..len - 1];
        let name = body.split(['!', ':']).next().unwrap_or_default();
        let key = if name.is_empty() {
            auto_index += 1;
            (auto_index - 1).to_string()
        } else {
            s!(name)
        };

        let value = match key.parse::<usize>() {
            Ok(ix) => positional.get(ix).copied(),
            Err(_) => keyed.get(&key),
        };
        match value {
            Some(v) => {
                text.push_str(v);
                used.insert(key);
            }
            None => text.push_str(&format!("{{{key}}}")),
        }
        rest = &tail[len..];
    }
    text.push_str(rest);

    Rendered { text, used }
}

/// Byte length of the `{…}` field at the start of `s`, nested braces included.
fn field_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 { return Some(i + 1); }
            }
            _ => {}
        }
    }
    None
}

/// Expands every `{rep}body{/rep}` once per non-empty `leftover` entry, in
/// insertion order, filling the body's `{0}` with the key and `{1}` with the
/// value. Whitespace right before `{rep}` is repeated ahead of each copy.
/// With nothing to repeat the whole block disappears.
pub fn repeat_blocks(rendered: &str, leftover: &TemplateParams) -> String {
    REPEAT
        .replace_all(rendered, |caps: &Captures| {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            let empty = TemplateParams::new();
            let mut out = s!();
            for (k, v) in leftover.iter().filter(|(_, v)| !v.is_empty()) {
                out.push_str(indent);
                out.push_str(&render(body, &[k, v], &empty).text);
            }
            out
        })
        .into_owned()
}

/// A loaded template: one render pass, then its leftovers feed the
/// repeatable blocks.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self { Self { source: source.into() } }

    pub fn source(&self) -> &str { &self.source }

    pub fn render(&self, positional: &[&str], keyed: &TemplateParams) -> Rendered {
        render(&self.source, positional, keyed)
    }

    pub fn render_with_repeats(&self, positional: &[&str], keyed: &TemplateParams) -> String {
        let rendered = self.render(positional, keyed);
        let leftover = keyed.leftover(&rendered.used);
        repeat_blocks(&rendered.text, &leftover)
    }
}
