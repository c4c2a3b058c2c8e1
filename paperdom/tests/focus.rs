use paperdom::{collect_tabbable, next_tabbable, prev_tabbable, Document, Element};

fn form() -> Element {
    Element::div()
        .id("root")
        .child(Element::button("One").id("one"))
        .child(Element::button("Two").id("two").disabled(true))
        .child(
            Element::div()
                .id("drawer")
                .hidden()
                .child(Element::button("Hidden").id("inside-hidden")),
        )
        .child(Element::input().id("three"))
}

#[test]
fn test_collect_tabbable_skips_disabled_and_hidden() {
    let tabbable = collect_tabbable(&form());
    assert_eq!(tabbable, vec!["one", "three"]);
}

#[test]
fn test_next_tabbable_wraps() {
    let root = form();
    assert_eq!(next_tabbable(&root, None).as_deref(), Some("one"));
    assert_eq!(next_tabbable(&root, Some("one")).as_deref(), Some("three"));
    assert_eq!(next_tabbable(&root, Some("three")).as_deref(), Some("one"));
}

#[test]
fn test_prev_tabbable_wraps() {
    let root = form();
    assert_eq!(prev_tabbable(&root, None).as_deref(), Some("three"));
    assert_eq!(prev_tabbable(&root, Some("three")).as_deref(), Some("one"));
    assert_eq!(prev_tabbable(&root, Some("one")).as_deref(), Some("three"));
}

#[test]
fn test_document_focus_rejects_untabbable() {
    let mut doc = Document::new(form());

    assert!(!doc.focus("two"), "disabled element must not take focus");
    assert!(!doc.focus("inside-hidden"), "hidden subtree must not take focus");
    assert_eq!(doc.active_element(), None);

    assert!(doc.focus("one"));
    assert_eq!(doc.active_element(), Some("one"));
}

#[test]
fn test_document_focus_cleared_when_subtree_rebuilt() {
    let mut doc = Document::new(form());
    doc.get_mut("drawer").unwrap().set_hidden(false);
    assert!(doc.focus("inside-hidden"));

    doc.replace_children("drawer", vec![Element::button("New").id("fresh")]);
    assert_eq!(doc.active_element(), None);
}

#[test]
fn test_is_visible_follows_ancestors() {
    let doc = Document::new(form());
    assert!(doc.is_visible("one"));
    assert!(!doc.is_visible("inside-hidden"));
    assert!(!doc.is_visible("missing"));
}
