//! Drives a few widgets headlessly and prints the events they emit.
//!
//! Run with `cargo run --example kitchen_sink`.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use joist::prelude::*;

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let page = Element::div()
        .id("page")
        .child(
            Element::div()
                .id("faq")
                .class("usa-accordion")
                .child(
                    Element::button("First question")
                        .id("q1")
                        .class("usa-accordion__button")
                        .attr("aria-controls", "a1"),
                )
                .child(Element::div().id("a1").hidden())
                .child(
                    Element::button("Second question")
                        .id("q2")
                        .class("usa-accordion__button")
                        .attr("aria-controls", "a2"),
                )
                .child(Element::div().id("a2").hidden()),
        )
        .child(
            Element::div()
                .id("fruit")
                .class("usa-combo-box")
                .child(Element::input().id("fruit-input").class("usa-combo-box__input"))
                .child(
                    Element::div()
                        .id("fruit-select")
                        .class("usa-combo-box__select")
                        .hidden()
                        .child(Element::new("option").attr("data-value", "apple").text("Apple"))
                        .child(Element::new("option").attr("data-value", "banana").text("Banana"))
                        .child(Element::new("option").attr("data-value", "cherry").text("Cherry")),
                ),
        );

    let mut rt = Runtime::new(Document::new(page));
    rt.init_all();

    // A user opens the second FAQ entry, then picks a fruit.
    rt.dispatch(Event::Click {
        target: "q2".to_string(),
    });
    rt.dispatch(Event::Input {
        target: "fruit-input".to_string(),
        value: "an".to_string(),
    });
    rt.dispatch(Event::Key {
        target: Some("fruit-input".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    });

    for event in rt.take_events() {
        println!("{} from {}: {:?}", event.name(), event.source, event.detail);
    }
}
