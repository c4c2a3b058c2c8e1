use joist::prelude::*;

fn table_markup() -> Element {
    let row = |id: &str, name: &str, age: &str, joined: &str| {
        Element::new("tr")
            .id(format!("row-{id}"))
            .child(Element::new("td").id(format!("{id}-name")).text(name))
            .child(Element::new("td").id(format!("{id}-age")).text(age))
            .child(Element::new("td").id(format!("{id}-joined")).text(joined))
    };

    Element::div().id("page").child(
        Element::new("table")
            .id("t")
            .class("usa-table")
            .child(
                Element::new("thead").id("th-row-wrap").child(
                    Element::new("tr")
                        .id("header-row")
                        .child(
                            Element::new("th")
                                .id("th-name")
                                .attr("data-sortable", "")
                                .text("Name"),
                        )
                        .child(
                            Element::new("th")
                                .id("th-age")
                                .attr("data-sortable", "")
                                .text("Age"),
                        )
                        .child(
                            Element::new("th")
                                .id("th-joined")
                                .attr("data-sortable", "")
                                .attr("data-type", "date")
                                .text("Joined"),
                        ),
                ),
            )
            .child(
                Element::new("tbody")
                    .id("tb")
                    .child(row("c", "Charlie", "10", "01/15/2025"))
                    .child(row("a", "Alice", "2", "2024-12-31"))
                    .child(row("b", "Bob", "33", "06/01/2024")),
            ),
    )
}

fn runtime() -> Runtime {
    let mut rt = Runtime::new(Document::new(table_markup()));
    rt.init_all();
    rt
}

fn click(rt: &mut Runtime, id: &str) -> EventResult {
    rt.dispatch(Event::Click {
        target: id.to_string(),
    })
}

fn column(rt: &Runtime, index: usize) -> Vec<String> {
    rt.doc()
        .get("tb")
        .unwrap()
        .child_elements()
        .iter()
        .map(|row| row.child_elements()[index].text_content().to_string())
        .collect()
}

fn aria_sort(rt: &Runtime, header: &str) -> Option<String> {
    rt.doc()
        .get(header)
        .unwrap()
        .get_attr("aria-sort")
        .map(str::to_string)
}

#[test]
fn test_three_clicks_cycle_back_to_original_order() {
    let mut rt = runtime();

    click(&mut rt, "th-name");
    assert_eq!(column(&rt, 0), vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(aria_sort(&rt, "th-name").as_deref(), Some("ascending"));

    click(&mut rt, "th-name");
    assert_eq!(column(&rt, 0), vec!["Charlie", "Bob", "Alice"]);
    assert_eq!(aria_sort(&rt, "th-name").as_deref(), Some("descending"));

    click(&mut rt, "th-name");
    assert_eq!(column(&rt, 0), vec!["Charlie", "Alice", "Bob"]);
    assert_eq!(aria_sort(&rt, "th-name"), None);
}

#[test]
fn test_numeric_column_sorts_numerically() {
    let mut rt = runtime();

    click(&mut rt, "th-age");

    assert_eq!(column(&rt, 1), vec!["2", "10", "33"]);
}

#[test]
fn test_date_column_sorts_chronologically() {
    let mut rt = runtime();

    click(&mut rt, "th-joined");

    assert_eq!(
        column(&rt, 2),
        vec!["06/01/2024", "2024-12-31", "01/15/2025"]
    );
}

#[test]
fn test_clicking_another_column_resets_the_first() {
    let mut rt = runtime();

    click(&mut rt, "th-name");
    click(&mut rt, "th-age");

    assert_eq!(aria_sort(&rt, "th-name"), None);
    assert_eq!(aria_sort(&rt, "th-age").as_deref(), Some("ascending"));
    assert_eq!(column(&rt, 1), vec!["2", "10", "33"]);
}

#[test]
fn test_keyboard_sorts_too() {
    let mut rt = runtime();
    rt.set_focus(Some("th-name"));

    rt.dispatch(Event::Key {
        target: Some("th-name".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    });

    assert_eq!(column(&rt, 0), vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_sort_value_attribute_overrides_cell_text() {
    let root = Element::div().id("page").child(
        Element::new("table")
            .id("t2")
            .class("usa-table")
            .child(
                Element::new("thead").child(
                    Element::new("tr").child(
                        Element::new("th")
                            .id("th-size")
                            .attr("data-sortable", "")
                            .text("Size"),
                    ),
                ),
            )
            .child(
                Element::new("tbody")
                    .id("tb2")
                    .child(
                        Element::new("tr").id("r1").child(
                            Element::new("td")
                                .attr("data-sort-value", "2")
                                .text("Medium"),
                        ),
                    )
                    .child(
                        Element::new("tr").id("r2").child(
                            Element::new("td").attr("data-sort-value", "1").text("Small"),
                        ),
                    )
                    .child(
                        Element::new("tr").id("r3").child(
                            Element::new("td").attr("data-sort-value", "3").text("Large"),
                        ),
                    ),
            ),
    );
    let mut rt = Runtime::new(Document::new(root));
    rt.init_all();

    click(&mut rt, "th-size");

    let sizes: Vec<String> = rt
        .doc()
        .get("tb2")
        .unwrap()
        .child_elements()
        .iter()
        .map(|row| row.child_elements()[0].text_content().to_string())
        .collect();
    assert_eq!(sizes, vec!["Small", "Medium", "Large"]);
}

#[test]
fn test_announcement_region_and_event() {
    let mut rt = runtime();

    click(&mut rt, "th-name");

    assert_eq!(
        rt.doc().get("t__announcement").unwrap().text_content(),
        "Now sorted by Name in ascending order."
    );

    let events = rt.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].detail,
        EventDetail::TableSort {
            column: "Name".to_string(),
            direction: Some(SortDirection::Ascending),
        }
    );

    click(&mut rt, "th-name");
    click(&mut rt, "th-name");
    assert_eq!(
        rt.doc().get("t__announcement").unwrap().text_content(),
        "Now in original order."
    );
}
