mod builtin;
mod cli;
pub mod dom;
pub mod events;
mod html;
pub mod lint;
pub mod listing;
mod story;
pub mod toggle;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cli::Args;
use dom::Page;
use events::ClickEvent;
use listing::ListQuery;
use toggle::{Labels, Lang, ToggleController};

pub use cli::{Args as CliArgs, Mode};
pub use html::{RenderOptions, build_page, excerpt};
pub use story::{Story, Tag};

pub fn run(args: Args) -> anyhow::Result<()> {
    if matches!(args.mode, Mode::Render) && !args.click.is_empty() {
        anyhow::bail!("--click is only supported with --mode click");
    }

    let labels = Labels::for_lang(args.lang);
    match args.mode {
        Mode::Render => render(&args, &labels),
        Mode::Click => click(&args, labels),
    }
}

fn render(args: &Args, labels: &Labels) -> anyhow::Result<()> {
    let stories: Vec<Story> = {
        let bytes =
            std::fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
        serde_json::from_slice(&bytes).context("parse stories json")?
    };
    let loaded = stories.len();
    let stories = listing::list_stories(
        stories,
        &ListQuery {
            tag: args.tag,
            search: args.query.clone(),
            sort: args.sort,
        },
    );
    tracing::info!(loaded, shown = stories.len(), "selected stories");

    let html = build_page(
        &stories,
        &RenderOptions {
            title: &args.title,
            lang: html_lang(args.lang),
            labels,
            excerpt_chars: args.excerpt_chars,
        },
    );

    let page = Page::parse(&html);
    lint::report(&lint::check_toggle_markup(&page), args.strict)?;

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from("stories.html"));
    write_output(&out_path, &html)
}

fn click(args: &Args, fallback: Labels) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let page = Page::parse(&html);
    lint::report(&lint::check_toggle_markup(&page), args.strict)?;

    let labels = match Labels::from_page(&page) {
        Some(labels) => labels,
        None => {
            tracing::debug!(lang = ?args.lang, "page declares no labels; using --lang");
            fallback
        }
    };

    let root = events::install(ToggleController::new(labels));
    for selector in &args.click {
        let target = page
            .select_node(selector)?
            .with_context(|| format!("no node matches {selector:?}"))?;
        tracing::debug!(%selector, "dispatching click");
        root.dispatch_click(&page, &ClickEvent::new(target));
    }

    let out_path = args.out.clone().unwrap_or_else(|| args.input.clone());
    write_output(&out_path, &page.to_html()?)
}

fn html_lang(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "en",
        Lang::Zh => "zh-CN",
    }
}

fn write_output(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote page");
    Ok(())
}
