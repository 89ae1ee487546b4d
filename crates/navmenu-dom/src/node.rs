//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId` indices instead of pointers;
//! `NodeId::NONE` marks a missing link.

use crate::{ClassList, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes other than `class`, in insertion order
    pub attrs: Vec<Attribute>,
    /// Class token list
    pub classes: ClassList,
    /// Measured border-box height in pixels, as reported by layout
    pub offset_height: u32,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: ClassList::new(),
            offset_height: 0,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute. `class` is routed to the class list.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = ClassList::from_string(value);
            return;
        }
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value.to_string();
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tag_is_lowercased() {
        let node = Node::element("UL");
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("ul"));
        assert!(!node.parent.is_valid());
    }

    #[test]
    fn test_set_attr_overwrites() {
        let mut el = ElementData::new("button");
        el.set_attr("aria-pressed", "false");
        el.set_attr("aria-pressed", "true");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.get_attr("aria-pressed"), Some("true"));
    }

    #[test]
    fn test_class_attr_routes_to_class_list() {
        let mut el = ElementData::new("li");
        el.set_attr("class", "item  item--active");
        assert!(el.classes.contains("item--active"));
        assert_eq!(el.get_attr("class"), None);
        assert!(el.attrs.is_empty());
    }
}
