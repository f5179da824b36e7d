use std::fmt;

use crate::dom::{self, Page};
use crate::toggle::MARKER_ATTR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleIssue {
    /// A control whose marker attribute is empty.
    EmptyMarker { control: String },
    /// A control pointing at an id that no element carries.
    DanglingTarget { control: String, target_id: String },
}

impl fmt::Display for ToggleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleIssue::EmptyMarker { control } => {
                write!(f, "toggle control {control} has an empty {MARKER_ATTR}")
            }
            ToggleIssue::DanglingTarget { control, target_id } => write!(
                f,
                "toggle control {control} points at missing element #{target_id}"
            ),
        }
    }
}

/// Lists toggle controls that a click could never act on.
pub fn check_toggle_markup(page: &Page) -> Vec<ToggleIssue> {
    let selector = format!("[{MARKER_ATTR}]");
    let Ok(controls) = page.document().select(&selector) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (index, control) in controls.enumerate() {
        let node = control.as_node();
        let label = describe(node, index);
        let target_id = dom::attr(node, MARKER_ATTR).unwrap_or_default();
        if target_id.is_empty() {
            issues.push(ToggleIssue::EmptyMarker { control: label });
        } else if page.element_by_id(&target_id).is_none() {
            issues.push(ToggleIssue::DanglingTarget {
                control: label,
                target_id,
            });
        }
    }
    issues
}

pub fn report(issues: &[ToggleIssue], strict: bool) -> anyhow::Result<()> {
    for issue in issues {
        tracing::warn!("{issue}");
    }
    if strict && !issues.is_empty() {
        anyhow::bail!(
            "strict toggle check failed: {} control(s) cannot reach their target",
            issues.len()
        );
    }
    Ok(())
}

fn describe(node: &kuchiki::NodeRef, index: usize) -> String {
    let tag = node
        .as_element()
        .map(|el| el.name.local.to_string())
        .unwrap_or_default();
    match dom::attr(node, "id") {
        Some(id) if !id.is_empty() => format!("<{tag} id=\"{id}\">"),
        _ => format!("<{tag}> #{}", index + 1),
    }
}
