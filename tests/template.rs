// tests/template.rs
use galaxy_export::core::template::{render, repeat_blocks};
use galaxy_export::core::{Template, TemplateParams};
use pretty_assertions::assert_eq;

fn params(pairs: &[(&str, &str)]) -> TemplateParams {
    pairs.iter().copied().collect()
}

#[test]
fn substitutes_and_records_used_keys() {
    let out = render("Hello {name}!", &[], &params(&[("name", "World"), ("other", "x")]));
    assert_eq!(out.text, "Hello World!");
    assert_eq!(out.used.into_iter().collect::<Vec<_>>(), vec!["name"]);
}

#[test]
fn missing_keys_are_echoed() {
    let out = render("Hello {missing}!", &[], &TemplateParams::new());
    assert_eq!(out.text, "Hello {missing}!");
    assert!(out.used.is_empty());
}

#[test]
fn used_keys_do_not_leak_between_calls() {
    let p = params(&[("a", "1"), ("b", "2")]);
    let first = render("{a}", &[], &p);
    let second = render("{b}", &[], &p);
    assert!(first.used.contains("a"));
    assert!(!second.used.contains("a"));
    assert!(second.used.contains("b"));
}

#[test]
fn positional_and_automatic_fields() {
    assert_eq!(render("{0} and {1}", &["a", "b"], &TemplateParams::new()).text, "a and b");
    assert_eq!(render("{} {}", &["a", "b"], &TemplateParams::new()).text, "a b");
    let out = render("{1}{5}", &["a", "b"], &TemplateParams::new());
    assert_eq!(out.text, "b{5}");
    assert!(out.used.contains("1"));
}

#[test]
fn literal_and_stray_braces() {
    let p = params(&[("name", "World")]);
    assert_eq!(render("{{literal}} {name}", &[], &p).text, "{literal} World");
    assert_eq!(render("a } b", &[], &p).text, "a } b");
    assert_eq!(render("tail {name", &[], &p).text, "tail {name");
}

#[test]
fn conversion_and_format_suffixes_are_ignored() {
    let p = params(&[("name", "World")]);
    assert_eq!(render("{name:>10}|{name!r}", &[], &p).text, "World|World");
}

#[test]
fn insert_keeps_position_on_overwrite() {
    let mut p = params(&[("b", "2"), ("a", "1")]);
    p.insert("b", "3");
    assert_eq!(p.iter().collect::<Vec<_>>(), vec![("b", "3"), ("a", "1")]);
}

#[test]
fn repeat_block_skips_empty_values() {
    let leftover = params(&[("genres", "Action, RPG"), ("themes", "")]);
    assert_eq!(
        repeat_blocks("<ul>{rep}<li>{0}: {1}</li>{/rep}</ul>", &leftover),
        "<ul><li>genres: Action, RPG</li></ul>"
    );
}

#[test]
fn repeat_block_reuses_leading_whitespace() {
    let leftover = params(&[("b", "2"), ("a", "1")]);
    assert_eq!(
        repeat_blocks("<dl>\n  {rep}<dt>{0}</dt><dd>{1}</dd>{/rep}</dl>", &leftover),
        "<dl>\n  <dt>b</dt><dd>2</dd>\n  <dt>a</dt><dd>1</dd></dl>"
    );
}

#[test]
fn empty_repeat_block_disappears_with_its_whitespace() {
    assert_eq!(
        repeat_blocks("<dl>\n  {rep}<dt>{0}</dt>{/rep}\n</dl>", &TemplateParams::new()),
        "<dl>\n</dl>"
    );
}

#[test]
fn template_feeds_leftovers_into_repeats() {
    let tpl = Template::new("{title}{rep}[{0}={1}]{/rep}");
    let p = params(&[("title", "T"), ("genre", "RPG"), ("score", "")]);
    assert_eq!(tpl.render_with_repeats(&[], &p), "T[genre=RPG]");
}
