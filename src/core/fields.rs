// src/core/fields.rs
// Adapters for row fields that are not plain text: list literals and minutes.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelistError {
    #[error("expected '{expected}' at byte {pos}, found {found:?}")]
    Unexpected { expected: char, pos: usize, found: Option<char> },
    #[error("unterminated string starting at byte {0}")]
    Unterminated(usize),
    #[error("trailing characters after the list at byte {0}")]
    Trailing(usize),
}

/// Parses a list literal as the exporter writes it (`['Action', "Rock 'n' Roll"]`).
/// An empty field is an empty list.
pub fn delist(raw: &str) -> Result<Vec<String>, DelistError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut chars = raw.char_indices().peekable();
    let mut items = Vec::new();

    skip_ws(&mut chars);
    expect(&mut chars, '[')?;
    loop {
        skip_ws(&mut chars);
        match chars.peek().copied() {
            Some((_, ']')) => { chars.next(); break; }
            Some((pos, q @ ('\'' | '"'))) => {
                chars.next();
                items.push(quoted(&mut chars, q, pos)?);
                skip_ws(&mut chars);
                match chars.peek().copied() {
                    Some((_, ',')) => { chars.next(); }
                    Some((_, ']')) => {}
                    other => return Err(unexpected(',', other, raw.len())),
                }
            }
            other => return Err(unexpected(']', other, raw.len())),
        }
    }
    skip_ws(&mut chars);
    if let Some((pos, _)) = chars.next() {
        return Err(DelistError::Trailing(pos));
    }
    Ok(items)
}

/// [`delist`] joined for display: `"Action, RPG"`.
pub fn delist_joined(raw: &str) -> Result<String, DelistError> {
    delist(raw).map(|items| items.join(", "))
}

fn skip_ws(chars: &mut Peekable<CharIndices<'_>>) {
    while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
        chars.next();
    }
}

fn expect(chars: &mut Peekable<CharIndices<'_>>, want: char) -> Result<(), DelistError> {
    match chars.next() {
        Some((_, c)) if c == want => Ok(()),
        Some((pos, c)) => Err(DelistError::Unexpected { expected: want, pos, found: Some(c) }),
        None => Err(DelistError::Unexpected { expected: want, pos: 0, found: None }),
    }
}

fn unexpected(expected: char, at: Option<(usize, char)>, end: usize) -> DelistError {
    match at {
        Some((pos, c)) => DelistError::Unexpected { expected, pos, found: Some(c) },
        None => DelistError::Unexpected { expected, pos: end, found: None },
    }
}

fn quoted(chars: &mut Peekable<CharIndices<'_>>, quote: char, start: usize) -> Result<String, DelistError> {
    let mut out = s!();
    while let Some((_, ch)) = chars.next() {
        match ch {
            c if c == quote => return Ok(out),
            '\\' => match chars.next() {
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, c)) => out.push(c),
                None => break,
            },
            c => out.push(c),
        }
    }
    Err(DelistError::Unterminated(start))
}

/// Minutes → `"Xd Yh Zm"`, leaving out zero units. Unparseable or negative
/// input counts as zero, which renders as an empty string.
pub fn duration(minutes: &str) -> String {
    let t: u64 = minutes.trim().parse().unwrap_or(0);
    let (d, h, m) = (t / 1440, (t / 60) % 24, t % 60);

    let mut parts = Vec::with_capacity(3);
    if d > 0 { parts.push(format!("{d}d")); }
    if h > 0 { parts.push(format!("{h}h")); }
    if m > 0 { parts.push(format!("{m}m")); }
    parts.join(" ")
}
