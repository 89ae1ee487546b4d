//! Host capability adapter
//!
//! The controller never owns a render tree. It drives one through
//! [`MenuHost`], which exposes class-set mutation, node placement and
//! measurement against whatever tree the page lives in.

use navmenu_dom::{Document, NodeId};
use std::fmt::Debug;
use std::hash::Hash;

pub use navmenu_dom::Viewport;

/// Render-tree capabilities the menu controller consumes
pub trait MenuHost {
    /// Handle to a node in the host tree
    type Node: Copy + Eq + Hash + Debug;

    /// Structured node selection and event registration are available
    fn supports_responsive_menu(&self) -> bool;

    /// The root element (`<html>`)
    fn document_element(&self) -> Self::Node;

    /// The `<body>` element
    fn body(&self) -> Self::Node;

    fn add_class(&mut self, node: Self::Node, class: &str);
    fn remove_class(&mut self, node: Self::Node, class: &str);
    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// Every element in the document carrying `class`
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Replace the node's content with text
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Insert `node` into `parent` before `reference`, or append when `None`
    fn insert_before(
        &mut self,
        parent: Self::Node,
        node: Self::Node,
        reference: Option<Self::Node>,
    );

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn is_tag(&self, node: Self::Node, tag: &str) -> bool;

    /// Descendant elements of `root` with tag `tag`, in document order
    fn descendants_by_tag(&self, root: Self::Node, tag: &str) -> Vec<Self::Node>;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Measured height of a node in pixels
    fn offset_height(&self, node: Self::Node) -> u32;
}

impl MenuHost for Document {
    type Node = NodeId;

    fn supports_responsive_menu(&self) -> bool {
        let caps = self.capabilities();
        caps.query_selector && caps.event_listeners
    }

    fn document_element(&self) -> NodeId {
        Document::document_element(self)
    }

    fn body(&self) -> NodeId {
        Document::body(self)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.tree.element_mut(node) {
            el.classes.add(class);
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.tree.element_mut(node) {
            el.classes.remove(class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.classes.contains(class))
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.tree.elements_by_class(self.tree.root(), class)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.tree.element_mut(node) {
            el.set_attr(name, value);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree
            .element(node)
            .and_then(|e| e.get_attr(name))
            .map(str::to_string)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Err(err) = self.tree.set_text(node, text) {
            tracing::warn!("set_text on {:?} failed: {}", node, err);
        }
    }

    fn insert_before(&mut self, parent: NodeId, node: NodeId, reference: Option<NodeId>) {
        if let Err(err) = self.tree.insert_before(parent, node, reference) {
            tracing::warn!("insert_before on {:?} failed: {}", parent, err);
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.tree.first_child(node)
    }

    fn is_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tree.tag(node).is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    fn descendants_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.tree.elements_by_tag(root, tag)
    }

    fn viewport(&self) -> Viewport {
        Document::viewport(self)
    }

    fn offset_height(&self, node: NodeId) -> u32 {
        Document::offset_height(self, node)
    }
}

/// Create a toggle control: `type="button"`, not pressed, hidden from
/// assistive technology until the breakpoint step reveals it.
pub(crate) fn create_control<H: MenuHost>(
    host: &mut H,
    tag: &str,
    content: &str,
    classes: &[&str],
) -> H::Node {
    let control = host.create_element(tag);
    for class in classes {
        host.add_class(control, class);
    }
    host.set_text(control, content);
    host.set_attribute(control, "aria-hidden", "true");
    host.set_attribute(control, "aria-pressed", "false");
    host.set_attribute(control, "type", "button");
    control
}

/// Set the pressed marker and `aria-pressed` together
pub(crate) fn set_pressed<H: MenuHost>(host: &mut H, control: H::Node, class: &str, pressed: bool) {
    if pressed {
        host.add_class(control, class);
    } else {
        host.remove_class(control, class);
    }
    host.set_attribute(control, "aria-pressed", if pressed { "true" } else { "false" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use navmenu_dom::Capabilities;

    #[test]
    fn test_document_support_requires_both_capabilities() {
        let mut doc = Document::new();
        assert!(doc.supports_responsive_menu());

        doc.set_capabilities(Capabilities {
            query_selector: true,
            event_listeners: false,
        });
        assert!(!doc.supports_responsive_menu());
    }

    #[test]
    fn test_class_round_trip_through_trait() {
        let mut doc = Document::new();
        let body = MenuHost::body(&doc);
        doc.add_class(body, "rm-sticky-initiated");
        assert!(doc.has_class(body, "rm-sticky-initiated"));
        assert_eq!(doc.elements_with_class("rm-sticky-initiated"), vec![body]);

        doc.remove_class(body, "rm-sticky-initiated");
        assert!(!doc.has_class(body, "rm-sticky-initiated"));
    }

    #[test]
    fn test_create_control_defaults() {
        let mut doc = Document::new();
        let button = create_control(&mut doc, "button", "+", &["rm-subtoggle", "rm-closed"]);

        assert!(doc.has_class(button, "rm-subtoggle"));
        assert!(doc.has_class(button, "rm-closed"));
        assert_eq!(doc.attribute(button, "aria-pressed").as_deref(), Some("false"));
        assert_eq!(doc.attribute(button, "aria-hidden").as_deref(), Some("true"));
        assert_eq!(doc.attribute(button, "type").as_deref(), Some("button"));
        assert_eq!(doc.parent(button), None);
    }

    #[test]
    fn test_set_pressed_keeps_aria_in_step() {
        let mut doc = Document::new();
        let button = create_control(&mut doc, "button", "menu", &[]);

        set_pressed(&mut doc, button, "rm-togglebutton--closed", true);
        assert!(doc.has_class(button, "rm-togglebutton--closed"));
        assert_eq!(doc.attribute(button, "aria-pressed").as_deref(), Some("true"));

        set_pressed(&mut doc, button, "rm-togglebutton--closed", false);
        assert!(!doc.has_class(button, "rm-togglebutton--closed"));
        assert_eq!(doc.attribute(button, "aria-pressed").as_deref(), Some("false"));
    }
}
