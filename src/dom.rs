use anyhow::Context as _;
use kuchiki::NodeRef;
use kuchiki::iter::NodeIterator as _;
use kuchiki::traits::TendrilSink as _;

/// A parsed HTML page. Everything the toggle reads or writes lives in this tree.
pub struct Page {
    document: NodeRef,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn document(&self) -> &NodeRef {
        &self.document
    }

    /// First element in document order whose `id` equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.document
            .descendants()
            .elements()
            .find(|el| el.attributes.borrow().get("id") == Some(id))
            .map(|el| el.as_node().clone())
    }

    pub fn select_node(&self, selector: &str) -> anyhow::Result<Option<NodeRef>> {
        match self.document.select_first(selector) {
            Ok(el) => Ok(Some(el.as_node().clone())),
            Err(()) => {
                // kuchiki reports both "no match" and "bad selector" as `()`.
                if self.document.select(selector).is_err() {
                    anyhow::bail!("invalid css selector {selector:?}");
                }
                Ok(None)
            }
        }
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document
            .serialize(&mut out)
            .context("serialize page")?;
        String::from_utf8(out).context("page html not utf-8")
    }
}

/// Nearest element at or above `node` carrying attribute `name`.
///
/// Walks from text and comment nodes too, so a click that landed on a label's
/// text still finds the control wrapping it.
pub fn closest_with_attr(node: &NodeRef, name: &str) -> Option<NodeRef> {
    node.inclusive_ancestors().find(|n| {
        n.as_element()
            .is_some_and(|el| el.attributes.borrow().contains(name))
    })
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let el = node.as_element()?;
    el.attributes.borrow().get(name).map(|v| v.to_string())
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().insert(name, value.to_string());
    }
}

pub fn text(node: &NodeRef) -> String {
    node.text_contents()
}

/// Replaces every child of `node` with a single text node.
pub fn set_text(node: &NodeRef, text: &str) {
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}
