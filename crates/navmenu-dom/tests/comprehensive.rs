//! Comprehensive tests for navmenu-dom
//!
//! Tree structure, class lists and document-level helpers working together.

use navmenu_dom::{to_html, Capabilities, Document, DomError, NodeId, Viewport};

// ============================================================================
// TREE STRUCTURE
// ============================================================================

#[test]
fn test_nested_menu_structure() {
    let mut doc = Document::new();
    let nav = doc.append_element(doc.body(), "nav", &[]).unwrap();
    let ul = doc.append_element(nav, "ul", &[]).unwrap();
    let li = doc.append_element(ul, "li", &[]).unwrap();
    let link = doc.append_text_element(li, "a", "Home").unwrap();
    let sub = doc.append_element(li, "ul", &[]).unwrap();

    let tree = doc.tree();
    assert_eq!(tree.elements_by_tag(nav, "ul"), vec![ul, sub]);
    assert_eq!(tree.elements_by_tag(nav, "a"), vec![link]);

    let ancestors: Vec<NodeId> = tree.ancestors(link).collect();
    assert_eq!(ancestors[..3], [li, ul, nav]);
    assert_eq!(*ancestors.last().unwrap(), tree.root());
}

#[test]
fn test_remove_detaches_subtree() {
    let mut doc = Document::new();
    let ul = doc.append_element(doc.body(), "ul", &[]).unwrap();
    let a = doc.append_element(ul, "li", &[]).unwrap();
    let b = doc.append_element(ul, "li", &[]).unwrap();

    doc.tree_mut().remove(a).unwrap();

    assert_eq!(doc.tree().first_child(ul), Some(b));
    assert_eq!(doc.tree().parent(a), None);
    assert!(doc.tree().descendants(doc.body()).iter().all(|&n| n != a));
}

#[test]
fn test_unknown_node_is_reported() {
    let mut doc = Document::new();
    let bogus = {
        let other = Document::new();
        let mut tree = other.tree;
        for _ in 0..20 {
            tree.create_element("div");
        }
        tree.create_element("span")
    };
    let body = doc.body();
    assert_eq!(
        doc.tree_mut().append_child(body, bogus),
        Err(DomError::NotFound(bogus))
    );
}

// ============================================================================
// CLASSES AND ATTRIBUTES
// ============================================================================

#[test]
fn test_elements_by_class() {
    let mut doc = Document::new();
    let ul = doc.append_element(doc.body(), "ul", &["menu"]).unwrap();
    let a = doc.append_element(ul, "li", &["rm-focused"]).unwrap();
    let _b = doc.append_element(ul, "li", &[]).unwrap();
    let c = doc.append_element(ul, "li", &["rm-focused", "x"]).unwrap();

    let root = doc.tree().root();
    assert_eq!(doc.tree().elements_by_class(root, "rm-focused"), vec![a, c]);
}

#[test]
fn test_serialized_markup_reflects_mutations() {
    let mut doc = Document::new();
    let ul = doc.append_element(doc.body(), "ul", &[]).unwrap();
    let button = doc.tree_mut().create_element("button");
    doc.tree_mut().insert_before(ul, button, None).unwrap();
    doc.tree_mut().set_text(button, "+").unwrap();
    let el = doc.tree_mut().element_mut(button).unwrap();
    el.classes.add("rm-subtoggle");
    el.set_attr("aria-pressed", "false");

    assert_eq!(
        to_html(doc.tree(), ul),
        "<ul><button class=\"rm-subtoggle\" aria-pressed=\"false\">+</button></ul>"
    );
}

// ============================================================================
// ENVIRONMENT
// ============================================================================

#[test]
fn test_viewport_and_capabilities() {
    let mut doc = Document::new();
    assert_eq!(doc.viewport(), Viewport::new(1024, 768));
    assert!(doc.capabilities().query_selector);

    doc.set_viewport(Viewport::new(500, 300));
    doc.set_capabilities(Capabilities {
        query_selector: false,
        event_listeners: true,
    });

    assert_eq!(doc.viewport().width, 500);
    assert!(!doc.capabilities().query_selector);
}
