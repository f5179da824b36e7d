use kuchiki::NodeRef;

use crate::dom::Page;
use crate::toggle::{ToggleController, ToggleOutcome};

/// A click as the page sees it: only the node the pointer landed on.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target: NodeRef,
}

impl ClickEvent {
    pub fn new(target: NodeRef) -> Self {
        Self { target }
    }
}

type ClickListener = Box<dyn Fn(&Page, &ClickEvent)>;

/// Document-level click subscription.
///
/// Listeners see every click on the page and filter at dispatch time, so
/// controls added after installation need no extra wiring.
#[derive(Default)]
pub struct EventRoot {
    listeners: Vec<ClickListener>,
}

impl EventRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(&mut self, listener: impl Fn(&Page, &ClickEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Runs every listener to completion, in registration order.
    pub fn dispatch_click(&self, page: &Page, event: &ClickEvent) {
        for listener in &self.listeners {
            listener(page, event);
        }
    }
}

/// Page initialization: subscribes `controller` once for the page's lifetime.
pub fn install(controller: ToggleController) -> EventRoot {
    let mut root = EventRoot::new();
    root.on_click(move |page, event| {
        match controller.handle_click(page, event) {
            ToggleOutcome::NotAToggle => {}
            ToggleOutcome::MissingTarget { target_id } => {
                tracing::debug!(%target_id, "toggle target not found; ignoring click");
            }
            ToggleOutcome::Toggled { target_id, state } => {
                tracing::debug!(%target_id, ?state, "toggled story");
            }
        }
    });
    root
}
