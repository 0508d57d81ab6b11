// src/macros.rs

#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Lazily compiled static regex. Patterns are literals, so a compile failure
/// is a programming error caught by the first test that touches it.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {
        ::std::sync::LazyLock::new(|| {
            ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("invalid regex {:?}: {e}", $pattern))
        })
    };
}
