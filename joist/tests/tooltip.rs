use std::time::Duration;

use joist::prelude::*;

fn markup() -> Element {
    Element::div().id("page").child(
        Element::div().id("wrap").child(
            Element::button("Save")
                .id("tip")
                .class("usa-tooltip__trigger")
                .attr("title", "Save your changes"),
        ),
    )
}

fn runtime_at(trigger_rect: Rect) -> Runtime {
    let mut rt = Runtime::new(Document::new(markup()));
    let mut layout = Layout::new();
    layout.insert("tip", trigger_rect);
    rt.set_layout(layout);
    rt.set_viewport(Viewport::new(80, 24));
    rt.init_all();
    rt
}

fn runtime() -> Runtime {
    runtime_at(Rect::new(30, 10, 6, 1))
}

fn enter(rt: &mut Runtime) {
    rt.dispatch(Event::PointerEnter {
        target: "tip".to_string(),
    });
}

fn leave(rt: &mut Runtime) {
    rt.dispatch(Event::PointerLeave {
        target: "tip".to_string(),
    });
}

fn body_visible(rt: &Runtime) -> bool {
    rt.doc().get("tip__body").unwrap().has_class("is-visible")
}

#[test]
fn test_init_converts_title_into_body() {
    let rt = runtime();

    let trigger = rt.doc().get("tip").unwrap();
    assert!(trigger.get_attr("title").is_none());
    assert_eq!(trigger.get_attr("aria-describedby"), Some("tip__body"));

    let body = rt.doc().get("tip__body").unwrap();
    assert_eq!(body.text_content(), "Save your changes");
    assert!(body.is_hidden());
    assert!(body.has_class("usa-tooltip__body"));
}

#[test]
fn test_show_waits_out_the_delay() {
    let mut rt = runtime();

    enter(&mut rt);
    assert!(!body_visible(&rt));

    rt.advance(Duration::from_millis(100));
    assert!(!body_visible(&rt));

    rt.advance(Duration::from_millis(150));
    assert!(body_visible(&rt));

    let events = rt.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].detail,
        EventDetail::TooltipShow {
            position: "top".to_string(),
        }
    );
}

#[test]
fn test_fast_pass_never_shows() {
    let mut rt = runtime();

    enter(&mut rt);
    rt.advance(Duration::from_millis(100));
    leave(&mut rt);
    rt.advance(Duration::from_millis(1000));

    assert!(!body_visible(&rt));
    assert!(rt.take_events().is_empty());
}

#[test]
fn test_hide_after_shorter_delay() {
    let mut rt = runtime();

    enter(&mut rt);
    rt.advance(Duration::from_millis(250));
    assert!(body_visible(&rt));

    leave(&mut rt);
    rt.advance(Duration::from_millis(50));
    assert!(body_visible(&rt));
    rt.advance(Duration::from_millis(60));
    assert!(!body_visible(&rt));

    let events = rt.take_events();
    let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["tooltip-show", "tooltip-hide"]);
}

#[test]
fn test_reenter_cancels_pending_hide() {
    let mut rt = runtime();

    enter(&mut rt);
    rt.advance(Duration::from_millis(250));
    leave(&mut rt);
    rt.advance(Duration::from_millis(50));
    enter(&mut rt);
    rt.advance(Duration::from_millis(1000));

    assert!(body_visible(&rt));
}

#[test]
fn test_placement_top_by_default() {
    let mut rt = runtime();

    enter(&mut rt);
    rt.advance(Duration::from_millis(250));

    let body = rt.doc().get("tip__body").unwrap();
    assert!(body.has_class("usa-tooltip__body--top"));
    assert_eq!(body.get_attr("data-top"), Some("8"));
}

#[test]
fn test_placement_flips_when_viewport_overflows() {
    // On the first row there is no room above the trigger.
    let mut rt = runtime_at(Rect::new(30, 0, 6, 1));

    enter(&mut rt);
    rt.advance(Duration::from_millis(250));

    let body = rt.doc().get("tip__body").unwrap();
    assert!(body.has_class("usa-tooltip__body--bottom"));
    assert!(!body.has_class("usa-tooltip__body--top"));

    let events = rt.take_events();
    assert_eq!(
        events[0].detail,
        EventDetail::TooltipShow {
            position: "bottom".to_string(),
        }
    );
}

#[test]
fn test_focus_shows_and_blur_hides() {
    let mut rt = runtime();

    rt.set_focus(Some("tip"));
    rt.advance(Duration::from_millis(250));
    assert!(body_visible(&rt));

    rt.set_focus(None);
    rt.advance(Duration::from_millis(150));
    assert!(!body_visible(&rt));
}
