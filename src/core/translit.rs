// src/core/translit.rs

/// Maps arbitrary Unicode text to an ASCII approximation.
/// The search-key generator only ever sees this seam, so tests can swap in
/// a fixed table instead of the full transliteration data.
pub trait Transliterator {
    fn transliterate(&self, text: &str) -> String;
}

/// Default transliterator backed by `deunicode`. `™` becomes `(tm)` so the
/// trademark strip in the search keys catches it, as `®` becomes `(r)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deunicode;

impl Transliterator for Deunicode {
    fn transliterate(&self, text: &str) -> String {
        deunicode::deunicode(&text.replace('™', "(tm)"))
    }
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> String,
{
    fn transliterate(&self, text: &str) -> String {
        self(text)
    }
}
