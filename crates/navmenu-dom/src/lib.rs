//! navmenu DOM - In-memory render tree
//!
//! Arena-based node tree with class token lists, attributes, measured
//! heights and a viewport. Serves as the host document a menu controller
//! mutates.

mod classlist;
mod document;
mod node;
mod serialize;
mod tree;

pub use classlist::ClassList;
pub use document::{Capabilities, Document, Viewport};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use serialize::to_html;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert sentinel to `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}

/// Result type for structural DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// Structural DOM errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Hierarchy request error: {0:?} cannot contain itself")]
    HierarchyRequest(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),
}
