use joist::prelude::*;

fn modal_markup(force_action: bool) -> Element {
    let mut dialog = Element::div().id("dialog").class("usa-modal");
    if force_action {
        dialog = dialog.attr("data-force-action", "");
    }
    let dialog = dialog
        .child(Element::button("Confirm").id("confirm"))
        .child(
            Element::button("Close")
                .id("m-close")
                .attr("data-close-modal", ""),
        );

    Element::div()
        .id("page")
        .child(
            Element::button("Open modal")
                .id("open-btn")
                .attr("data-open-modal", "")
                .attr("aria-controls", "wrapper"),
        )
        .child(
            Element::div()
                .id("other-section")
                .child(Element::input().id("outside-input")),
        )
        .child(
            Element::div().id("wrapper").class("usa-modal-wrapper").child(
                Element::div()
                    .id("overlay")
                    .class("usa-modal-overlay")
                    .child(dialog),
            ),
        )
}

fn runtime(force_action: bool) -> Runtime {
    let mut rt = Runtime::new(Document::new(modal_markup(force_action)));
    rt.init_all();
    rt
}

fn click(rt: &mut Runtime, id: &str) -> EventResult {
    rt.dispatch(Event::Click {
        target: id.to_string(),
    })
}

fn press(rt: &mut Runtime, key: Key, modifiers: Modifiers) {
    let target = rt.doc().active_element().map(str::to_string);
    rt.dispatch(Event::Key {
        target,
        key,
        modifiers,
    });
}

fn focus_inside_modal(rt: &Runtime) -> bool {
    rt.doc()
        .active_element()
        .is_some_and(|active| rt.doc().is_within(active, "dialog"))
}

#[test]
fn test_open_moves_focus_into_modal_and_inerts_background() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");

    assert_eq!(rt.open_modal(), Some("wrapper"));
    assert!(!rt.doc().get("wrapper").unwrap().is_hidden());
    assert!(focus_inside_modal(&rt));

    // Top-level siblings outside the modal chain are hidden from AT.
    assert_eq!(
        rt.doc().get("other-section").unwrap().get_attr("aria-hidden"),
        Some("true")
    );
    assert!(rt.doc().get("wrapper").unwrap().get_attr("aria-hidden").is_none());
}

#[test]
fn test_escape_closes_and_restores_focus_to_opener() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");
    press(&mut rt, Key::Escape, Modifiers::new());

    assert_eq!(rt.open_modal(), None);
    assert!(rt.doc().get("wrapper").unwrap().is_hidden());
    assert_eq!(rt.doc().active_element(), Some("open-btn"));
    assert!(rt
        .doc()
        .get("other-section")
        .unwrap()
        .get_attr("aria-hidden")
        .is_none());
}

#[test]
fn test_tab_wraps_within_modal() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");
    assert_eq!(rt.doc().active_element(), Some("confirm"));

    press(&mut rt, Key::Tab, Modifiers::new());
    assert_eq!(rt.doc().active_element(), Some("m-close"));

    // Tab from the last tabbable wraps to the first.
    press(&mut rt, Key::Tab, Modifiers::new());
    assert_eq!(rt.doc().active_element(), Some("confirm"));

    // Shift+Tab from the first wraps to the last.
    press(&mut rt, Key::Tab, Modifiers::shift());
    assert_eq!(rt.doc().active_element(), Some("m-close"));
}

#[test]
fn test_focus_never_leaves_modal_while_open() {
    let mut rt = runtime(false);
    click(&mut rt, "open-btn");

    for _ in 0..8 {
        press(&mut rt, Key::Tab, Modifiers::new());
        assert!(focus_inside_modal(&rt));
    }
    for _ in 0..8 {
        press(&mut rt, Key::Tab, Modifiers::shift());
        assert!(focus_inside_modal(&rt));
    }
}

#[test]
fn test_overlay_click_closes_but_dialog_click_does_not() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");
    click(&mut rt, "dialog");
    assert_eq!(rt.open_modal(), Some("wrapper"));

    click(&mut rt, "overlay");
    assert_eq!(rt.open_modal(), None);
}

#[test]
fn test_close_button_closes() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");
    click(&mut rt, "m-close");

    assert_eq!(rt.open_modal(), None);
    assert_eq!(rt.doc().active_element(), Some("open-btn"));
}

#[test]
fn test_force_action_ignores_escape_and_overlay() {
    let mut rt = runtime(true);

    click(&mut rt, "open-btn");
    press(&mut rt, Key::Escape, Modifiers::new());
    assert_eq!(rt.open_modal(), Some("wrapper"));

    click(&mut rt, "overlay");
    assert_eq!(rt.open_modal(), Some("wrapper"));

    click(&mut rt, "m-close");
    assert_eq!(rt.open_modal(), None);
}

#[test]
fn test_second_modal_cannot_open_over_the_first() {
    let extra = Element::div()
        .id("wrapper2")
        .class("usa-modal-wrapper")
        .child(
            Element::div().id("overlay2").class("usa-modal-overlay").child(
                Element::div()
                    .id("dialog2")
                    .class("usa-modal")
                    .child(Element::button("Ok").id("ok2")),
            ),
        );
    let trigger2 = Element::button("Open second")
        .id("open-btn2")
        .attr("data-open-modal", "")
        .attr("aria-controls", "wrapper2");
    let root = modal_markup(false).child(trigger2).child(extra);

    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();

    click(&mut rt, "open-btn");
    rt.take_events();

    // The slot is taken; the second open attempt is a warned no-op.
    rt.dispatch(Event::Key {
        target: Some("open-btn2".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    });
    assert_eq!(rt.open_modal(), Some("wrapper"));
    assert!(rt.doc().get("wrapper2").unwrap().is_hidden());
    assert!(rt.take_events().is_empty());
}

#[test]
fn test_open_and_close_events() {
    let mut rt = runtime(false);

    click(&mut rt, "open-btn");
    click(&mut rt, "m-close");

    let events = rt.take_events();
    let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["modal-open", "modal-close"]);
    assert_eq!(
        events[0].detail,
        EventDetail::ModalOpen {
            opener: Some("open-btn".to_string()),
        }
    );
}
