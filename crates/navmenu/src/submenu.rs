//! Submenu Registry
//!
//! One toggle per nested list, each collapsing and expanding its list
//! independently of its siblings and of the primary menu.

use crate::config::MenuConfig;
use crate::host::{MenuHost, create_control, set_pressed};

/// A nested list bound to its generated toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuEntry<N> {
    /// The nested `<ul>`
    pub list: N,
    /// Generated toggle control, first child of `parent_item`
    pub toggle: N,
    /// The nested list's parent node, marked with the parent class
    pub parent_item: N,
}

/// Visible state of one submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuState {
    Collapsed,
    Expanded,
}

/// Fixed set of submenus, built once when the controller starts
#[derive(Debug, Clone)]
pub struct SubmenuRegistry<N> {
    entries: Vec<SubmenuEntry<N>>,
}

impl<N: Copy + Eq> SubmenuRegistry<N> {
    /// Scan `menu` for nested lists and create a toggle for each.
    ///
    /// A nested list is a `<ul>` below `menu` with a list item between the
    /// two. Toggles start hidden; the breakpoint step decides visibility.
    pub fn build<H: MenuHost<Node = N>>(host: &mut H, menu: N, config: &MenuConfig) -> Self {
        let classes = &config.classes;
        let nested: Vec<N> = host
            .descendants_by_tag(menu, "ul")
            .into_iter()
            .filter(|&ul| has_item_between(&*host, ul, menu))
            .collect();

        let mut entries = Vec::with_capacity(nested.len());
        for list in nested {
            let Some(parent_item) = host.parent(list) else {
                continue;
            };
            let toggle = create_control(
                host,
                &config.subtoggle_tag,
                &config.subtoggle_content,
                &[classes.subtoggle.as_str(), classes.hide.as_str()],
            );
            let first = host.first_child(parent_item);
            host.insert_before(parent_item, toggle, first);
            host.add_class(parent_item, &classes.parent);
            entries.push(SubmenuEntry { list, toggle, parent_item });
        }

        tracing::debug!("Registered {} submenus", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[SubmenuEntry<N>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SubmenuEntry<N>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry whose toggle is `toggle`
    pub fn position_of_toggle(&self, toggle: N) -> Option<usize> {
        self.entries.iter().position(|e| e.toggle == toggle)
    }

    /// State of the entry at `index`, read from its list's hidden marker
    pub fn state<H: MenuHost<Node = N>>(
        &self,
        host: &H,
        index: usize,
        config: &MenuConfig,
    ) -> Option<SubmenuState> {
        let entry = self.entries.get(index)?;
        Some(if host.has_class(entry.list, &config.classes.hide) {
            SubmenuState::Collapsed
        } else {
            SubmenuState::Expanded
        })
    }

    /// Flip the entry at `index`. The list's hidden marker and the toggle's
    /// pressed marker always change together.
    pub fn toggle<H: MenuHost<Node = N>>(
        &self,
        host: &mut H,
        index: usize,
        config: &MenuConfig,
    ) -> Option<SubmenuState> {
        let entry = *self.entries.get(index)?;
        let classes = &config.classes;
        let next = match self.state(&*host, index, config)? {
            SubmenuState::Collapsed => {
                host.remove_class(entry.list, &classes.hide);
                set_pressed(host, entry.toggle, &classes.toggle_closed, true);
                SubmenuState::Expanded
            }
            SubmenuState::Expanded => {
                host.add_class(entry.list, &classes.hide);
                set_pressed(host, entry.toggle, &classes.toggle_closed, false);
                SubmenuState::Collapsed
            }
        };
        tracing::debug!("Submenu {} now {:?}", index, next);
        Some(next)
    }
}

fn has_item_between<H: MenuHost>(host: &H, node: H::Node, menu: H::Node) -> bool {
    let mut current = host.parent(node);
    while let Some(ancestor) = current {
        if ancestor == menu {
            return false;
        }
        if host.is_tag(ancestor, "li") {
            return true;
        }
        current = host.parent(ancestor);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use navmenu_dom::{Document, NodeId};

    /// ul.menu > li(a, ul > li(a, ul > li(a))) , li(a)
    fn nested_menu(doc: &mut Document) -> (NodeId, NodeId, NodeId) {
        let menu = doc.append_element(doc.body(), "ul", &[]).unwrap();
        let item = doc.append_element(menu, "li", &[]).unwrap();
        doc.append_text_element(item, "a", "Products").unwrap();
        let sub = doc.append_element(item, "ul", &[]).unwrap();
        let sub_item = doc.append_element(sub, "li", &[]).unwrap();
        doc.append_text_element(sub_item, "a", "Hardware").unwrap();
        let deep = doc.append_element(sub_item, "ul", &[]).unwrap();
        let deep_item = doc.append_element(deep, "li", &[]).unwrap();
        doc.append_text_element(deep_item, "a", "Cables").unwrap();
        let plain = doc.append_element(menu, "li", &[]).unwrap();
        doc.append_text_element(plain, "a", "About").unwrap();
        (menu, sub, deep)
    }

    #[test]
    fn test_build_creates_one_toggle_per_nested_list() {
        let mut doc = Document::new();
        let (menu, sub, deep) = nested_menu(&mut doc);
        let config = MenuConfig::default();

        let registry = SubmenuRegistry::build(&mut doc, menu, &config);

        assert_eq!(registry.len(), 2);
        let lists: Vec<NodeId> = registry.entries().iter().map(|e| e.list).collect();
        assert_eq!(lists, vec![sub, deep]);
        for entry in registry.entries() {
            assert_eq!(doc.tree().first_child(entry.parent_item), Some(entry.toggle));
            assert!(doc.has_class(entry.parent_item, "rm-parent"));
            assert!(doc.has_class(entry.toggle, "rm-subtoggle"));
            assert!(doc.has_class(entry.toggle, "rm-closed"));
        }
    }

    #[test]
    fn test_flat_menu_has_empty_registry() {
        let mut doc = Document::new();
        let menu = doc.append_element(doc.body(), "ul", &[]).unwrap();
        let item = doc.append_element(menu, "li", &[]).unwrap();
        doc.append_text_element(item, "a", "Home").unwrap();

        let registry = SubmenuRegistry::build(&mut doc, menu, &MenuConfig::default());

        assert!(registry.is_empty());
        assert!(doc.elements_with_class("rm-parent").is_empty());
        assert!(doc.elements_with_class("rm-subtoggle").is_empty());
    }

    #[test]
    fn test_list_directly_inside_list_is_not_a_submenu() {
        let mut doc = Document::new();
        let menu = doc.append_element(doc.body(), "ul", &[]).unwrap();
        doc.append_element(menu, "ul", &[]).unwrap();

        let registry = SubmenuRegistry::build(&mut doc, menu, &MenuConfig::default());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_toggle_flips_list_and_pressed_together() {
        let mut doc = Document::new();
        let (menu, sub, _) = nested_menu(&mut doc);
        let config = MenuConfig::default();
        let registry = SubmenuRegistry::build(&mut doc, menu, &config);
        doc.add_class(sub, "rm-closed");

        assert_eq!(registry.toggle(&mut doc, 0, &config), Some(SubmenuState::Expanded));
        assert!(!doc.has_class(sub, "rm-closed"));
        assert!(doc.has_class(registry.entries()[0].toggle, "rm-togglebutton--closed"));

        assert_eq!(registry.toggle(&mut doc, 0, &config), Some(SubmenuState::Collapsed));
        assert!(doc.has_class(sub, "rm-closed"));
        assert!(!doc.has_class(registry.entries()[0].toggle, "rm-togglebutton--closed"));

        assert_eq!(registry.toggle(&mut doc, 7, &config), None);
    }

    #[test]
    fn test_position_of_toggle() {
        let mut doc = Document::new();
        let (menu, _, _) = nested_menu(&mut doc);
        let registry = SubmenuRegistry::build(&mut doc, menu, &MenuConfig::default());

        let second = registry.entries()[1].toggle;
        assert_eq!(registry.position_of_toggle(second), Some(1));
        assert_eq!(registry.position_of_toggle(menu), None);
    }
}
