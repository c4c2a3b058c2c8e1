use joist::prelude::*;

fn accordion_markup(allow_multiple: bool) -> Element {
    let mut acc = Element::new("section").id("acc").class("usa-accordion");
    if allow_multiple {
        acc = acc.attr("data-allow-multiple", "");
    }
    for i in 1..=3 {
        acc = acc
            .child(
                Element::button(format!("Section {i}"))
                    .id(format!("b{i}"))
                    .class("usa-accordion__button")
                    .attr("aria-controls", format!("p{i}")),
            )
            .child(
                Element::div()
                    .id(format!("p{i}"))
                    .class("usa-accordion__content")
                    .hidden(),
            );
    }
    Element::div().id("page").child(acc)
}

fn runtime(allow_multiple: bool) -> Runtime {
    let mut rt = Runtime::new(Document::new(accordion_markup(allow_multiple)));
    rt.init_all();
    rt
}

fn click(rt: &mut Runtime, id: &str) -> EventResult {
    rt.dispatch(Event::Click {
        target: id.to_string(),
    })
}

fn expanded(rt: &Runtime, button: &str) -> bool {
    rt.doc().get(button).unwrap().get_attr("aria-expanded") == Some("true")
}

fn panel_visible(rt: &Runtime, panel: &str) -> bool {
    !rt.doc().get(panel).unwrap().is_hidden()
}

fn expanded_count(rt: &Runtime) -> usize {
    (1..=3).filter(|i| expanded(rt, &format!("b{i}"))).count()
}

#[test]
fn test_single_open_click_expands_one_panel() {
    let mut rt = runtime(false);

    click(&mut rt, "b2");

    assert!(expanded(&rt, "b2"));
    assert!(panel_visible(&rt, "p2"));
    assert!(!expanded(&rt, "b1"));
    assert!(!expanded(&rt, "b3"));
    assert!(!panel_visible(&rt, "p1"));
    assert!(!panel_visible(&rt, "p3"));
}

#[test]
fn test_click_toggles_back_closed() {
    let mut rt = runtime(false);

    click(&mut rt, "b2");
    click(&mut rt, "b2");

    assert!(!expanded(&rt, "b2"));
    assert!(!panel_visible(&rt, "p2"));
}

#[test]
fn test_single_open_invariant_over_click_sequences() {
    let mut rt = runtime(false);

    for id in ["b1", "b2", "b3", "b2", "b1", "b1", "b3"] {
        click(&mut rt, id);
        assert!(expanded_count(&rt) <= 1, "more than one panel open after clicking {id}");
        // aria-expanded always mirrors panel visibility.
        for i in 1..=3 {
            assert_eq!(
                expanded(&rt, &format!("b{i}")),
                panel_visible(&rt, &format!("p{i}"))
            );
        }
    }
}

#[test]
fn test_multi_open_mode_keeps_other_panels() {
    let mut rt = runtime(true);

    click(&mut rt, "b1");
    click(&mut rt, "b2");

    assert!(expanded(&rt, "b1"));
    assert!(expanded(&rt, "b2"));

    click(&mut rt, "b1");
    assert!(!expanded(&rt, "b1"));
    assert!(expanded(&rt, "b2"));
}

#[test]
fn test_keyboard_activation() {
    let mut rt = runtime(false);
    rt.set_focus(Some("b1"));

    rt.dispatch(Event::Key {
        target: Some("b1".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    });
    assert!(expanded(&rt, "b1"));

    rt.dispatch(Event::Key {
        target: Some("b1".to_string()),
        key: Key::Char(' '),
        modifiers: Modifiers::new(),
    });
    assert!(!expanded(&rt, "b1"));
}

#[test]
fn test_change_events_carry_button_and_state() {
    let mut rt = runtime(false);

    click(&mut rt, "b2");
    click(&mut rt, "b2");

    let events = rt.take_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name(), "accordion-change");
    assert_eq!(events[0].source, "acc");
    assert_eq!(
        events[0].detail,
        EventDetail::AccordionChange {
            button: "b2".to_string(),
            expanded: true,
        }
    );
    assert_eq!(
        events[1].detail,
        EventDetail::AccordionChange {
            button: "b2".to_string(),
            expanded: false,
        }
    );
}

#[test]
fn test_init_reconciles_declarative_state() {
    let root = Element::div().id("page").child(
        Element::div()
            .id("acc")
            .class("usa-accordion")
            .child(
                Element::button("Open by default")
                    .id("b1")
                    .class("usa-accordion__button")
                    .attr("aria-controls", "p1")
                    .attr("aria-expanded", "true"),
            )
            .child(Element::div().id("p1").hidden()),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();

    // The declared expanded state wins; `hidden` is brought in line with it.
    assert!(!rt.doc().get("p1").unwrap().is_hidden());
}

#[test]
fn test_broken_panel_link_degrades_quietly() {
    let root = Element::div().id("page").child(
        Element::div()
            .id("acc")
            .class("usa-accordion")
            .child(
                Element::button("Broken")
                    .id("broken")
                    .class("usa-accordion__button")
                    .attr("aria-controls", "does-not-exist"),
            )
            .child(
                Element::button("Fine")
                    .id("fine")
                    .class("usa-accordion__button")
                    .attr("aria-controls", "panel"),
            )
            .child(Element::div().id("panel").hidden()),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();

    // The broken button no-ops without emitting.
    click(&mut rt, "broken");
    assert!(rt.take_events().is_empty());

    // Its sibling still works.
    click(&mut rt, "fine");
    assert!(!rt.doc().get("panel").unwrap().is_hidden());
    assert_eq!(rt.take_events().len(), 1);
}
