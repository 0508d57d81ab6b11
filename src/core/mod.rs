// src/core/mod.rs
// Text pipeline: everything here is a pure function over strings.

pub mod description;
pub mod fields;
pub mod html;
pub mod roman;
pub mod sanitize;
pub mod search;
pub mod template;
pub mod translit;

pub use description::format_description;
pub use fields::{delist, delist_joined, duration};
pub use sanitize::clean;
pub use search::{generate_keys, SearchKeys};
pub use template::{Template, TemplateParams};
pub use translit::{Deunicode, Transliterator};
