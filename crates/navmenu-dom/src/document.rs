//! Document - High-level document API
//!
//! Wraps a [`DomTree`] with cached `<html>`/`<body>` handles, the viewport
//! the page is laid out in, and the platform capabilities it advertises.

use crate::{DomResult, DomTree, NodeId};

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Platform features a script can rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Structured node selection (`querySelector` and friends)
    pub query_selector: bool,
    /// Event listener registration
    pub event_listeners: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            query_selector: true,
            event_listeners: true,
        }
    }
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    viewport: Viewport,
    capabilities: Capabilities,
}

impl Document {
    /// Create a document with `<html>`, `<head>` and `<body>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes always link cleanly.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            viewport: Viewport::default(),
            capabilities: Capabilities::default(),
        }
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get `<head>` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport. The caller is responsible for delivering the
    /// matching resize event.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        tracing::trace!("Viewport set to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    /// Record a layout-measured height for an element
    pub fn set_offset_height(&mut self, id: NodeId, height: u32) {
        if let Some(el) = self.tree.element_mut(id) {
            el.offset_height = height;
        }
    }

    /// Measured height of an element (0 for non-elements)
    pub fn offset_height(&self, id: NodeId) -> u32 {
        self.tree.element(id).map_or(0, |e| e.offset_height)
    }

    /// Create an element with the given classes and append it to `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        if let Some(el) = self.tree.element_mut(id) {
            for class in classes {
                el.classes.add(class);
            }
        }
        self.tree.append_child(parent, id)
    }

    /// Create an element containing a single text node and append it to `parent`
    pub fn append_text_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        text: &str,
    ) -> DomResult<NodeId> {
        let id = self.append_element(parent, tag, &[])?;
        self.tree.set_text(id, text)?;
        Ok(id)
    }

    /// Find an element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&n| self.tree.element(n).and_then(|e| e.get_attr("id")) == Some(id))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_skeleton() {
        let doc = Document::new();
        assert_eq!(doc.tree().tag(doc.document_element()), Some("html"));
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.tree().parent(doc.head()), Some(doc.document_element()));
    }

    #[test]
    fn test_offset_height_only_on_elements() {
        let mut doc = Document::new();
        let nav = doc.append_element(doc.body(), "nav", &[]).unwrap();
        let text = doc.tree.create_text("x");
        doc.set_offset_height(nav, 120);
        doc.set_offset_height(text, 50);

        assert_eq!(doc.offset_height(nav), 120);
        assert_eq!(doc.offset_height(text), 0);
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::new();
        let nav = doc.append_element(doc.body(), "nav", &["site-nav"]).unwrap();
        doc.tree.element_mut(nav).unwrap().set_attr("id", "main-nav");

        assert_eq!(doc.get_element_by_id("main-nav"), Some(nav));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }
}
