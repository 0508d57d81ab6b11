// src/core/html.rs
// Micro parser for a single HTML start tag, and its reassembly.
// Only ever fed tags the description formatter already matched with
// `<p[^>]*>`, so it does not try to recover from broken markup.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// `class`, split on whitespace runs.
    Classes(Vec<String>),
}

impl AttrValue {
    fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(t) => t.is_empty(),
            AttrValue::Classes(c) => c.is_empty(),
        }
    }
}

/// `[name, value]` pairs in source order.
pub type AttributeList = Vec<(String, AttrValue)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: AttributeList,
}

impl StartTag {
    /// `<p>` with an empty class list.
    pub fn paragraph() -> Self {
        Self { name: s!("p"), attrs: vec![(s!("class"), AttrValue::Classes(Vec::new()))] }
    }

    /// Appends `token` to the first `class` attribute, creating one if needed.
    pub fn push_class(&mut self, token: &str) {
        for (name, value) in self.attrs.iter_mut() {
            if name != "class" { continue; }
            match value {
                AttrValue::Classes(list) => list.push(s!(token)),
                AttrValue::Text(t) => {
                    let mut list: Vec<String> = t.split_whitespace().map(String::from).collect();
                    list.push(s!(token));
                    *value = AttrValue::Classes(list);
                }
            }
            return;
        }
        self.attrs.push((s!("class"), AttrValue::Classes(vec![s!(token)])));
    }

    /// Rebuilds `<name attr="value" …>`. Empty and valueless attributes are
    /// dropped, duplicate class tokens collapse, and a value containing `"`
    /// is wrapped in single quotes instead.
    pub fn to_html(&self) -> String {
        let mut out = join!("<", &self.name);
        for (name, value) in &self.attrs {
            if value.is_empty() { continue; }
            let value = match value {
                AttrValue::Text(t) => t.clone(),
                AttrValue::Classes(list) => {
                    let mut seen: Vec<&str> = Vec::with_capacity(list.len());
                    for token in list {
                        if !seen.contains(&token.as_str()) { seen.push(token); }
                    }
                    seen.join(" ")
                }
            };
            let q = if value.contains('"') { '\'' } else { '"' };
            out.push_str(&format!(" {name}={q}{value}{q}"));
        }
        out.push('>');
        out
    }
}

/// Extracts the tag name and attributes of the first start tag in `markup`.
/// Names are lowercased, values have entities decoded.
pub fn parse_start_tag(markup: &str) -> StartTag {
    let b = markup.as_bytes();
    let n = b.len();
    let mut i = markup.find('<').map_or(n, |p| p + 1);

    let take_while = |i: &mut usize, stop: &dyn Fn(u8) -> bool| -> String {
        let from = *i;
        while *i < n && !stop(b[*i]) { *i += 1; }
        markup[from..*i].to_string()
    };
    let skip_ws = |i: &mut usize| {
        while *i < n && b[*i].is_ascii_whitespace() { *i += 1; }
    };

    let name = take_while(&mut i, &|c| c.is_ascii_whitespace() || c == b'/' || c == b'>');
    let mut tag = StartTag { name: name.to_ascii_lowercase(), attrs: Vec::new() };

    loop {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= n || b[i] == b'>' { break; }

        let attr = take_while(&mut i, &|c| {
            c.is_ascii_whitespace() || c == b'=' || c == b'>' || c == b'/'
        })
        .to_ascii_lowercase();
        if attr.is_empty() {
            // stray '=' or similar; step over it
            i += 1;
            continue;
        }

        skip_ws(&mut i);
        let raw = if i < n && b[i] == b'=' {
            i += 1;
            skip_ws(&mut i);
            match b.get(i) {
                Some(&(q @ (b'"' | b'\''))) => {
                    i += 1;
                    let v = take_while(&mut i, &|c| c == q);
                    i += 1; // closing quote
                    v
                }
                _ => take_while(&mut i, &|c| c.is_ascii_whitespace() || c == b'>'),
            }
        } else {
            s!()
        };

        let value = html_escape::decode_html_entities(&raw).into_owned();
        let value = if attr == "class" {
            AttrValue::Classes(value.split_whitespace().map(String::from).collect())
        } else {
            AttrValue::Text(value)
        };
        tag.attrs.push((attr, value));
    }

    tag
}
