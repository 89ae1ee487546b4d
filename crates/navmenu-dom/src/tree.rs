//! DOM Tree (arena-based allocation)

use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Arena-based DOM tree. Node 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Element data of `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data of `id`, if it is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Tag name of an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Number of nodes in the tree, including detached ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child.to_option())
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference` (or at the end).
    ///
    /// An already attached `child` is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.get(parent).ok_or(DomError::NotFound(parent))?;
        self.get(child).ok_or(DomError::NotFound(child))?;
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest(child));
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: reference });
            }
            if reference == child {
                return Ok(child);
            }
        }

        self.detach(child);

        let next = reference.unwrap_or(NodeId::NONE);
        let prev = match reference {
            Some(r) => self.nodes[r.0 as usize].prev_sibling,
            None => self.nodes[parent.0 as usize].last_child,
        };

        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = child;
        } else {
            self.nodes[parent.0 as usize].last_child = child;
        }
        Ok(child)
    }

    /// Detach a node (and its subtree) from its parent
    pub fn remove(&mut self, id: NodeId) -> DomResult<NodeId> {
        self.get(id).ok_or(DomError::NotFound(id))?;
        self.detach(id);
        Ok(id)
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.0 as usize];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }
        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Replace all children of `id` with a single text node
    pub fn set_text(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        let children: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        for child in children {
            self.detach(child);
        }
        let text = self.create_text(content);
        self.append_child(id, text)?;
        Ok(())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// All descendants of `id` in document order (excluding `id`)
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let mut kids: Vec<NodeId> = self.children(node).map(|(c, _)| c).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Descendant elements with the given tag, in document order
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.tag(n).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Descendant elements carrying the given class, in document order
    pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(|e| e.classes.contains(class)))
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
