use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::story::Story;
use crate::toggle::{CollapseState, Labels};

pub struct RenderOptions<'a> {
    pub title: &'a str,
    pub lang: &'a str,
    pub labels: &'a Labels,
    /// Bodies longer than this (in chars) get an excerpt and a toggle control.
    pub excerpt_chars: usize,
}

pub fn body_element_id(story: &Story) -> String {
    format!("story-body-{}", story.id)
}

pub fn build_page(stories: &[Story], opts: &RenderOptions<'_>) -> String {
    let story_count = stories.len();
    let markup: Markup = html! {
        (DOCTYPE)
        html lang=(opts.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (opts.title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body class="st"
                data-expand-label=(opts.labels.expand)
                data-collapse-label=(opts.labels.collapse) {
                header class="st-header" {
                    div class="st-container" {
                        h1 { (opts.title) }
                    }
                }
                main class="st-container st-main" {
                    @for s in stories {
                        (render_story(s, opts))
                    }
                }
                footer class="st-footer" {
                    div class="st-container" {
                        "Stories: " (story_count)
                    }
                }
                script { (PreEscaped(builtin::STORY_TOGGLE_JS)) }
            }
        }
    };
    markup.into_string()
}

fn render_story(s: &Story, opts: &RenderOptions<'_>) -> Markup {
    let article_id = format!("story-{}", s.id);
    let body_id = body_element_id(s);
    let created_at = s.created_at.as_deref().unwrap_or("");
    let image = s.image_path.as_deref().map(str::trim).unwrap_or("");
    let short = excerpt(&s.body, opts.excerpt_chars);

    html! {
        article id=(article_id) class="st-story" {
            header class="st-story-header" {
                h2 class="st-story-title" { (s.title) }
                div class="st-story-meta" {
                    span class="st-author" { (s.name) }
                    span class="st-likes" { "♥ " (s.likes) }
                    @if !created_at.is_empty() {
                        time datetime=(created_at) { (created_at) }
                    }
                }
                @if !s.tags.is_empty() {
                    ul class="st-tags" {
                        @for t in &s.tags {
                            li class="st-tag" data-tag-id=(t.id) { (t.name) }
                        }
                    }
                }
            }
            @if !image.is_empty() {
                img class="st-story-image" src=(image) alt=(s.title);
            }
            @if let Some(short) = short {
                div id=(body_id) class="st-body" data-collapsed=(CollapseState::Collapsed.as_attr()) {
                    div class="st-excerpt" { (short) }
                    div class="st-full" { (s.body) }
                }
                button type="button" class="st-toggle" data-story-toggle-target-id=(body_id) {
                    (opts.labels.for_state(CollapseState::Collapsed))
                }
            } @else {
                div id=(body_id) class="st-body" { (s.body) }
            }
        }
    }
}

/// Collapsed preview of `body`, or `None` when the whole body already fits.
///
/// Runs of whitespace fold to one space before counting.
pub fn excerpt(body: &str, max_chars: usize) -> Option<String> {
    let ws = regex::Regex::new(r"\s+").expect("whitespace regex");
    let folded = ws.replace_all(body.trim(), " ");
    if folded.chars().count() <= max_chars {
        return None;
    }
    let mut out: String = folded.chars().take(max_chars).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    Some(out)
}
