use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::listing::Sort;
use crate::toggle::Lang;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Render a stories JSON file into an HTML page.
    Render,
    /// Load an HTML page, dispatch clicks on it, and write the result.
    Click,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Input file: stories JSON for `render`, an HTML page for `click`.
    #[arg(long)]
    pub input: PathBuf,

    /// What to do with `--input`.
    #[arg(long, value_enum, default_value = "render")]
    pub mode: Mode,

    /// Output HTML path. Defaults to `stories.html` for `render` and to `--input` for `click`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Page language; selects the toggle labels.
    #[arg(long, value_enum, default_value = "en")]
    pub lang: Lang,

    /// Page title for `render`.
    #[arg(long, default_value = "Stories")]
    pub title: String,

    /// Bodies longer than this many characters are collapsed behind a toggle.
    #[arg(long, default_value_t = 120)]
    pub excerpt_chars: usize,

    /// Only show stories carrying this tag id (`render` mode).
    #[arg(long)]
    pub tag: Option<u64>,

    /// Case-insensitive search over title, body and author; ranks by relevance (`render` mode).
    #[arg(long)]
    pub query: Option<String>,

    /// Story order (`render` mode).
    #[arg(long, value_enum, default_value = "likes")]
    pub sort: Sort,

    /// CSS selector of a node to click, in order (`click` mode). Repeatable.
    #[arg(long)]
    pub click: Vec<String>,

    /// Fail when a toggle control points at a missing element.
    #[arg(long)]
    pub strict: bool,
}
