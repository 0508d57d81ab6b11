// src/html5.rs
// Assembles the catalogue page from the templates and the sorted games.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::consts::{DEFAULT_LANGUAGE, ID_ROUNDING};
use crate::config::options::ExportOptions;
use crate::core::{clean, delist_joined, duration, format_description, Template, TemplateParams};
use crate::error::{ExportError, Result};
use crate::file;
use crate::game::Game;
use crate::images;
use crate::progress::Progress;

const BUILTIN_INDEX: &str = include_str!("../templates/index.html");
const BUILTIN_GAME: &str = include_str!("../templates/game.html");
const BUILTIN_STYLE: &str = include_str!("../templates/style.css");
const BUILTIN_SCRIPT: &str = include_str!("../templates/script.js");

/// Stylesheet or script: inlined in the page, or linked by path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Asset {
    Inline(String),
    Linked(String),
}

impl Asset {
    fn style_tag(&self) -> String {
        match self {
            Asset::Inline(css) => join!("<style>", css, "</style>"),
            Asset::Linked(href) => format!(r#"<link rel="stylesheet" type="text/css" href="{href}">"#),
        }
    }

    fn script_tag(&self) -> String {
        match self {
            Asset::Inline(js) => join!("<script>", js, "</script>"),
            Asset::Linked(src) => format!(r#"<script src="{src}"></script>"#),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Templates {
    pub index: Template,
    pub game: Template,
    pub style: Asset,
    pub script: Asset,
}

impl Templates {
    /// Loads `index`, `game`, `style` and `script` from `dir`, preferring
    /// `.custom` variants. Files missing on disk fall back to the built-in copies.
    pub fn load(dir: &Path, embed: bool) -> Result<Self> {
        let index = read_or_builtin(&file::resolve_template(dir, "index", ".html"), BUILTIN_INDEX)?;
        let game = read_or_builtin(&file::resolve_template(dir, "game", ".html"), BUILTIN_GAME)?;
        let style = asset(&file::resolve_template(dir, "style", ".css"), BUILTIN_STYLE, embed)?;
        let script = asset(&file::resolve_template(dir, "script", ".js"), BUILTIN_SCRIPT, embed)?;
        Ok(Self { index: Template::new(index), game: Template::new(game), style, script })
    }

    /// The templates shipped with the crate, inlined.
    pub fn builtin() -> Self {
        Self {
            index: Template::new(BUILTIN_INDEX),
            game: Template::new(BUILTIN_GAME),
            style: Asset::Inline(s!(BUILTIN_STYLE)),
            script: Asset::Inline(s!(BUILTIN_SCRIPT)),
        }
    }
}

fn read_or_builtin(path: &Path, builtin: &str) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "template not found, using built-in copy");
            Ok(s!(builtin))
        }
        Err(source) => Err(ExportError::Template { path: path.to_path_buf(), source }),
    }
}

fn asset(path: &Path, builtin: &str, embed: bool) -> Result<Asset> {
    if embed {
        return read_or_builtin(path, builtin).map(Asset::Inline);
    }
    if !path.is_file() {
        warn!(path = %path.display(), "linked asset does not exist");
    }
    Ok(Asset::Linked(file::to_url_path(path)))
}

/// First entry id for `count` games: the count rounded up past the next
/// thousand, so ids `1..=count` stay free for manual re-ordering.
pub fn first_id(count: usize) -> usize {
    count + ID_ROUNDING - (count % ID_ROUNDING) + 1
}

fn delisted(game: &Game, field: &str) -> String {
    let raw = game.field(field);
    delist_joined(raw).unwrap_or_else(|e| {
        debug!(title = %game.title, field, error = %e, "not a list literal, keeping raw text");
        s!(raw)
    })
}

/// Template parameters for one game, in display order.
pub fn game_params(game: &Game, id: usize) -> TemplateParams {
    let mut p = TemplateParams::new();
    p.insert("id", id);
    p.insert("title", clean(&game.title, true));
    p.insert("description", format_description(game.field("summary")));
    p.insert("search", game.search.to_json_attr());
    p.insert("developers", clean(&delisted(game, "developers"), true));
    p.insert("platforms", clean(&delisted(game, "platformList"), true));
    p.insert("score", game.field("criticsScore"));
    p.insert("publishers", clean(&delisted(game, "publishers"), true));
    p.insert("released", game.field("releaseDate"));
    p.insert("genres", delisted(game, "genres"));
    p.insert("themes", delisted(game, "themes"));
    p.insert("playtime", duration(game.field("gameMins")));
    p
}

/// Renders the full page. Games outside the debug id filter are left out.
pub fn render_page(
    games: &[Game],
    opts: &ExportOptions,
    templates: &Templates,
    progress: &mut dyn Progress,
) -> String {
    let mut content = s!();
    let mut image_css = s!();

    progress.begin(games.len());
    for (id, game) in (first_id(games.len())..).zip(games) {
        if !opts.is_debug_id(id) { continue; }

        let params = game_params(game, id);
        content.push_str(&templates.game.render_with_repeats(&[], &params));
        image_css.push_str(&format!(
            "#game-{id}{{order:{id};background-image:url(\"{}\");}}",
            game.image_paths[0]
        ));
        progress.item_done(id);
    }

    let mut page = TemplateParams::new();
    page.insert("language", DEFAULT_LANGUAGE);
    page.insert("title", &opts.title);
    page.insert("imageCSS", if opts.debug_ids.is_some() { s!() } else { image_css });
    page.insert("style", templates.style.style_tag());
    page.insert("javascript", templates.script.script_tag());
    page.insert("content", content);
    templates.index.render(&[], &page).text
}

/// Renames stray wget downloads, renders the page and writes it to `opts.html`.
pub fn export(games: &[Game], opts: &ExportOptions, progress: &mut dyn Progress) -> Result<PathBuf> {
    let templates = Templates::load(&opts.templates_dir, opts.embed)?;

    for (id, game) in (first_id(games.len())..).zip(games) {
        if opts.is_debug_id(id) {
            images::promote_alternates(game)?;
        }
    }

    let html = render_page(games, opts, &templates, progress);
    file::write_text(&opts.html, &html)?;
    info!(path = %opts.html.display(), games = games.len(), "page written");
    progress.log("HTML5 list exported");
    Ok(opts.html.clone())
}
