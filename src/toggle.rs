use clap::ValueEnum;

use crate::dom::{self, Page};
use crate::events::ClickEvent;

/// Labels a rendered page carries on `<body>` for its own language.
pub const EXPAND_LABEL_ATTR: &str = "data-expand-label";
pub const COLLAPSE_LABEL_ATTR: &str = "data-collapse-label";
/// Marker on a toggle control; its value is the id of the element it toggles.
pub const MARKER_ATTR: &str = "data-story-toggle-target-id";
/// Expansion state on the target element. Only `"false"` means expanded.
pub const COLLAPSED_ATTR: &str = "data-collapsed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseState {
    Collapsed,
    Expanded,
}

impl CollapseState {
    /// Absent or anything other than the literal `"false"` reads as collapsed.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("false") => CollapseState::Expanded,
            _ => CollapseState::Collapsed,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            CollapseState::Collapsed => "true",
            CollapseState::Expanded => "false",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            CollapseState::Collapsed => CollapseState::Expanded,
            CollapseState::Expanded => CollapseState::Collapsed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

/// The two strings a toggle control can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub expand: String,
    pub collapse: String,
}

impl Labels {
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::En => Self {
                expand: "expand full text".to_string(),
                collapse: "collapse".to_string(),
            },
            Lang::Zh => Self {
                expand: "展开全文".to_string(),
                collapse: "收起".to_string(),
            },
        }
    }

    /// The pair declared on the page's `<body>`, when both are present.
    pub fn from_page(page: &Page) -> Option<Self> {
        let body = page.select_node("body").ok().flatten()?;
        Some(Self {
            expand: dom::attr(&body, EXPAND_LABEL_ATTR)?,
            collapse: dom::attr(&body, COLLAPSE_LABEL_ATTR)?,
        })
    }

    /// Label offering the action available from `state`.
    pub fn for_state(&self, state: CollapseState) -> &str {
        match state {
            CollapseState::Collapsed => &self.expand,
            CollapseState::Expanded => &self.collapse,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_lang(Lang::En)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The click did not start inside a toggle control.
    NotAToggle,
    /// The control's target id matched no element.
    MissingTarget { target_id: String },
    Toggled {
        target_id: String,
        state: CollapseState,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ToggleController {
    labels: Labels,
}

impl ToggleController {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn handle_click(&self, page: &Page, event: &ClickEvent) -> ToggleOutcome {
        let Some(control) = dom::closest_with_attr(&event.target, MARKER_ATTR) else {
            return ToggleOutcome::NotAToggle;
        };
        let target_id = dom::attr(&control, MARKER_ATTR).unwrap_or_default();
        let target = if target_id.is_empty() {
            None
        } else {
            page.element_by_id(&target_id)
        };
        let Some(target) = target else {
            return ToggleOutcome::MissingTarget { target_id };
        };

        let current = CollapseState::from_attr(dom::attr(&target, COLLAPSED_ATTR).as_deref());
        let next = current.flipped();
        dom::set_attr(&target, COLLAPSED_ATTR, next.as_attr());
        dom::set_text(&control, self.labels.for_state(next));

        ToggleOutcome::Toggled {
            target_id,
            state: next,
        }
    }
}
