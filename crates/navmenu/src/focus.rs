//! Focus Tracker
//!
//! Marks the list items between a focused link and the menu root so styles
//! can keep keyboard-opened submenus visible.

use crate::host::MenuHost;

/// List items from `link` up to, not including, `menu`; nearest first
pub fn focus_chain<H: MenuHost>(host: &H, link: H::Node, menu: H::Node) -> Vec<H::Node> {
    let mut chain = Vec::new();
    let mut current = host.parent(link);
    while let Some(node) = current {
        if node == menu {
            break;
        }
        if host.is_tag(node, "li") {
            chain.push(node);
        }
        current = host.parent(node);
    }
    chain
}

/// Links under the menu and the chain marked for the current focus
#[derive(Debug, Clone)]
pub struct FocusTracker<N> {
    links: Vec<N>,
    chain: Vec<N>,
}

impl<N: Copy + Eq> FocusTracker<N> {
    pub fn new(links: Vec<N>) -> Self {
        Self { links, chain: Vec::new() }
    }

    pub fn links(&self) -> &[N] {
        &self.links
    }

    pub fn is_link(&self, node: N) -> bool {
        self.links.contains(&node)
    }

    /// Currently marked items, nearest first
    pub fn chain(&self) -> &[N] {
        &self.chain
    }

    /// Mark the ancestry of a newly focused link. Returns `false` for nodes
    /// that are not tracked links.
    pub fn focus<H: MenuHost<Node = N>>(
        &mut self,
        host: &mut H,
        link: N,
        menu: N,
        class: &str,
    ) -> bool {
        if !self.is_link(link) {
            return false;
        }
        // Items of the list holding the link's own item.
        if let Some(list) = host.parent(link).and_then(|item| host.parent(item)) {
            for item in host.descendants_by_tag(list, "li") {
                host.remove_class(item, class);
            }
        }
        self.chain = focus_chain(&*host, link, menu);
        for &item in &self.chain {
            host.add_class(item, class);
        }
        true
    }

    /// Clear the marker from every element carrying it. Only one element can
    /// hold focus, so the reset is global.
    pub fn blur<H: MenuHost<Node = N>>(&mut self, host: &mut H, link: N, class: &str) -> bool {
        if !self.is_link(link) {
            return false;
        }
        for node in host.elements_with_class(class) {
            host.remove_class(node, class);
        }
        self.chain.clear();
        true
    }
}
