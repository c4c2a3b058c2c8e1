use joist::prelude::*;

fn click(rt: &mut Runtime, id: &str) -> EventResult {
    rt.dispatch(Event::Click {
        target: id.to_string(),
    })
}

// ============================================================================
// Banner
// ============================================================================

fn banner_runtime() -> Runtime {
    let root = Element::div().id("page").child(
        Element::new("section").id("b").class("usa-banner").child(
            Element::div()
                .id("bh")
                .class("usa-banner__header")
                .child(
                    Element::button("Here's how you know")
                        .id("bb")
                        .class("usa-banner__button")
                        .attr("aria-controls", "bc"),
                ),
        )
        .child(Element::div().id("bc").hidden()),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();
    rt
}

#[test]
fn test_banner_toggles_disclosure() {
    let mut rt = banner_runtime();

    click(&mut rt, "bb");
    assert_eq!(
        rt.doc().get("bb").unwrap().get_attr("aria-expanded"),
        Some("true")
    );
    assert!(!rt.doc().get("bc").unwrap().is_hidden());
    assert!(rt
        .doc()
        .get("bh")
        .unwrap()
        .has_class("usa-banner__header--expanded"));

    click(&mut rt, "bb");
    assert!(rt.doc().get("bc").unwrap().is_hidden());
    assert!(!rt
        .doc()
        .get("bh")
        .unwrap()
        .has_class("usa-banner__header--expanded"));

    let events = rt.take_events();
    assert_eq!(
        events[0].detail,
        EventDetail::BannerToggle { expanded: true }
    );
    assert_eq!(
        events[1].detail,
        EventDetail::BannerToggle { expanded: false }
    );
}

// ============================================================================
// Language selector
// ============================================================================

fn language_runtime() -> Runtime {
    let root = Element::div().id("page").child(
        Element::div()
            .id("lc")
            .class("usa-language-container")
            .child(
                Element::button("Languages")
                    .id("lb")
                    .class("usa-language__link")
                    .attr("aria-controls", "ls"),
            )
            .child(
                Element::list()
                    .id("ls")
                    .class("usa-language__submenu")
                    .hidden()
                    .child(
                        Element::item()
                            .id("li-es")
                            .child(Element::link("Español", "/es").id("es-link").attr("hreflang", "es")),
                    )
                    .child(
                        Element::item()
                            .id("li-fr")
                            .child(Element::link("Français", "/fr").id("fr-link").attr("hreflang", "fr")),
                    ),
            ),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();
    rt
}

#[test]
fn test_language_button_toggles_submenu() {
    let mut rt = language_runtime();

    click(&mut rt, "lb");
    assert!(!rt.doc().get("ls").unwrap().is_hidden());

    click(&mut rt, "lb");
    assert!(rt.doc().get("ls").unwrap().is_hidden());
}

#[test]
fn test_choosing_a_language_sets_document_lang() {
    let mut rt = language_runtime();

    click(&mut rt, "lb");
    click(&mut rt, "es-link");

    assert_eq!(rt.doc().root().get_attr("lang"), Some("es"));
    assert!(rt.doc().get("ls").unwrap().is_hidden());
    assert_eq!(
        rt.doc().get("lb").unwrap().get_attr("aria-expanded"),
        Some("false")
    );

    let events = rt.take_events();
    assert_eq!(
        events[0].detail,
        EventDetail::LanguageSelect {
            lang: "es".to_string(),
        }
    );
    assert_eq!(events[0].source, "lc");
}

// ============================================================================
// Time picker
// ============================================================================

fn time_runtime() -> Runtime {
    let root = Element::div().id("page").child(
        Element::div()
            .id("tp")
            .class("usa-time-picker")
            .attr("data-min-time", "09:00")
            .attr("data-max-time", "10:00")
            .attr("data-step", "30")
            .child(Element::input().id("tp-input")),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();
    rt
}

#[test]
fn test_time_picker_becomes_a_combo_box_with_generated_options() {
    let rt = time_runtime();

    assert!(rt.doc().get("tp").unwrap().has_class("usa-combo-box"));
    assert!(rt.doc().get("tp-input").unwrap().has_class("usa-combo-box__input"));

    let labels: Vec<String> = rt
        .doc()
        .get("tp__select")
        .unwrap()
        .child_elements()
        .iter()
        .map(|el| el.text_content().to_string())
        .collect();
    assert_eq!(labels, vec!["9:00am", "9:30am", "10:00am"]);
}

#[test]
fn test_time_selection_surfaces_both_events() {
    let mut rt = time_runtime();

    rt.dispatch(Event::Input {
        target: "tp-input".to_string(),
        value: "9:3".to_string(),
    });
    rt.dispatch(Event::Key {
        target: Some("tp-input".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    });

    assert_eq!(
        rt.doc().get("tp-input").unwrap().get_attr("value"),
        Some("9:30am")
    );
    assert_eq!(
        rt.doc().get("tp").unwrap().get_attr("data-value"),
        Some("09:30")
    );

    let events = rt.take_events();
    let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
    assert!(names.contains(&"combo-box-select"));
    assert!(names.contains(&"time-picker-select"));
    let time = events
        .iter()
        .find(|e| e.name() == "time-picker-select")
        .unwrap();
    assert_eq!(
        time.detail,
        EventDetail::TimePickerSelect {
            value: "09:30".to_string(),
        }
    );
}
