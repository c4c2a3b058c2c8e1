use paperdom::element::ancestor_chain;
use paperdom::{find_element, find_parent, Element};

fn sample_tree() -> Element {
    Element::div().id("root").child(
        Element::div()
            .id("section")
            .child(Element::button("Open").id("btn"))
            .child(Element::div().id("panel").hidden()),
    )
}

// ============================================================================
// Tree search
// ============================================================================

#[test]
fn test_find_element() {
    let root = sample_tree();
    assert!(find_element(&root, "btn").is_some());
    assert!(find_element(&root, "root").is_some());
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_parent() {
    let root = sample_tree();
    assert_eq!(find_parent(&root, "btn").map(|p| p.id.as_str()), Some("section"));
    assert_eq!(find_parent(&root, "section").map(|p| p.id.as_str()), Some("root"));
    assert!(find_parent(&root, "root").is_none());
}

#[test]
fn test_ancestor_chain_starts_at_element() {
    let root = sample_tree();
    assert_eq!(ancestor_chain(&root, "btn"), vec!["btn", "section", "root"]);
    assert!(ancestor_chain(&root, "missing").is_empty());
}

// ============================================================================
// Attributes and classes
// ============================================================================

#[test]
fn test_attr_roundtrip() {
    let mut el = Element::button("Toggle").attr("aria-expanded", "false");
    assert_eq!(el.get_attr("aria-expanded"), Some("false"));

    el.set_attr("aria-expanded", "true");
    assert_eq!(el.get_attr("aria-expanded"), Some("true"));

    assert_eq!(el.remove_attr("aria-expanded"), Some("true".to_string()));
    assert!(!el.has_attr("aria-expanded"));
}

#[test]
fn test_hidden_attribute() {
    let mut el = Element::div();
    assert!(!el.is_hidden());
    el.set_hidden(true);
    assert!(el.is_hidden());
    el.set_hidden(false);
    assert!(!el.is_hidden());
}

#[test]
fn test_class_list_is_a_set() {
    let mut el = Element::div().class("usa-accordion").class("usa-accordion");
    assert_eq!(el.classes.len(), 1);

    el.add_class("usa-accordion--multiselectable");
    assert!(el.has_class("usa-accordion--multiselectable"));

    el.toggle_class("usa-accordion--multiselectable", false);
    assert!(!el.has_class("usa-accordion--multiselectable"));

    el.remove_class("usa-accordion");
    assert!(el.classes.is_empty());
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
}
