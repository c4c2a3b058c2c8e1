//! Event handling for the sortable table behavior.

use paperdom::Element;

use crate::behavior::{collect_matching, has_part};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};

use super::sort::{compare, select_comparator, SortDirection};

/// Stamp the original row order, make sortable headers reachable by
/// keyboard, and give each table an announcement live region.
pub(super) fn prepare_all(root: &str, ctx: &mut BehaviorContext) {
    let tables = match ctx.doc.get(root) {
        Some(el) => collect_matching(el, |el| has_part(el, super::ROOT)),
        None => return,
    };
    for table in tables {
        if let Some(body) = body_id(&table, ctx) {
            let rows: Vec<String> = ctx
                .doc
                .get(&body)
                .map(|el| el.child_elements().iter().map(|r| r.id.clone()).collect())
                .unwrap_or_default();
            for (index, row) in rows.iter().enumerate() {
                if let Some(el) = ctx.doc.get_mut(row) {
                    if !el.has_attr(super::ORIGINAL_ORDER_ATTR) {
                        el.set_attr(super::ORIGINAL_ORDER_ATTR, index.to_string());
                    }
                }
            }
        }

        let headers = match ctx.doc.get(&table) {
            Some(el) => collect_matching(el, |el| has_part(el, super::HEADER)),
            None => continue,
        };
        for header in headers {
            if let Some(el) = ctx.doc.get_mut(&header) {
                el.focusable = true;
            }
        }

        ensure_announcement_region(&table, ctx);
    }
}

pub(super) fn on_header_activate(header: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(table) = ctx.widget_root(header, super::ROOT) else {
        log::warn!("[table] sortable header `{header}` is outside any table root");
        return EventResult::Ignored;
    };
    let Some(body) = body_id(&table, ctx) else {
        log::warn!("[table] `{table}` has no tbody to sort");
        return EventResult::Ignored;
    };
    let Some(column) = column_index(header, ctx) else {
        return EventResult::Ignored;
    };

    let current = ctx
        .doc
        .get(header)
        .and_then(|el| el.get_attr("aria-sort"))
        .and_then(|v| match v {
            "ascending" => Some(SortDirection::Ascending),
            "descending" => Some(SortDirection::Descending),
            _ => None,
        });
    let direction = SortDirection::cycle(current);

    let mut rows: Vec<Element> = ctx
        .doc
        .get(&body)
        .map(|el| el.child_elements().to_vec())
        .unwrap_or_default();

    match direction {
        Some(direction) => {
            let keys: Vec<String> = rows.iter().map(|row| sort_key(row, column)).collect();
            let declared = ctx
                .doc
                .get(header)
                .and_then(|el| el.get_attr(super::TYPE_ATTR))
                .map(str::to_string);
            let comparator = select_comparator(&keys, declared.as_deref());

            rows.sort_by(|a, b| {
                let ordering = compare(&sort_key(a, column), &sort_key(b, column), comparator);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        None => {
            rows.sort_by_key(|row| {
                row.get_attr(super::ORIGINAL_ORDER_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(usize::MAX)
            });
        }
    }
    ctx.doc.replace_children(&body, rows);

    // Only the clicked column keeps a sort state.
    let headers = match ctx.doc.get(&table) {
        Some(el) => collect_matching(el, |el| has_part(el, super::HEADER)),
        None => Vec::new(),
    };
    for other in headers {
        if let Some(el) = ctx.doc.get_mut(&other) {
            if other == header {
                match direction {
                    Some(d) => el.set_attr("aria-sort", d.as_str()),
                    None => {
                        el.remove_attr("aria-sort");
                    }
                }
            } else {
                el.remove_attr("aria-sort");
            }
        }
    }

    let label = ctx
        .doc
        .get(header)
        .map(|el| el.text_content().to_string())
        .unwrap_or_default();
    announce(&table, &label, direction, ctx);
    ctx.push_event(
        table,
        EventDetail::TableSort {
            column: label,
            direction,
        },
    );
    EventResult::Consumed
}

fn body_id(table: &str, ctx: &BehaviorContext) -> Option<String> {
    let table_el = ctx.doc.get(table)?;
    collect_matching(table_el, |el| el.tag == "tbody")
        .into_iter()
        .next()
}

/// Position of the header cell within its row.
fn column_index(header: &str, ctx: &BehaviorContext) -> Option<usize> {
    let row = ctx.doc.parent(header)?;
    row.child_elements().iter().position(|el| el.id == header)
}

fn sort_key(row: &Element, column: usize) -> String {
    let Some(cell) = row.child_elements().get(column) else {
        return String::new();
    };
    cell.get_attr(super::SORT_VALUE_ATTR)
        .unwrap_or_else(|| cell.text_content())
        .to_string()
}

fn ensure_announcement_region(table: &str, ctx: &mut BehaviorContext) {
    let id = format!("{table}__announcement");
    if ctx.doc.contains(&id) {
        return;
    }
    let region = Element::div()
        .id(id)
        .class(super::CLASS_ANNOUNCEMENT)
        .attr("aria-live", "polite");
    let Some(parent) = ctx.doc.parent(table).map(|el| el.id.clone()) else {
        log::debug!("[table] `{table}` has no parent for an announcement region");
        return;
    };
    ctx.doc.append_child(&parent, region);
}

fn announce(table: &str, column: &str, direction: Option<SortDirection>, ctx: &mut BehaviorContext) {
    let id = format!("{table}__announcement");
    let text = match direction {
        Some(direction) => format!("Now sorted by {column} in {} order.", direction.as_str()),
        None => "Now in original order.".to_string(),
    };
    if let Some(el) = ctx.doc.get_mut(&id) {
        el.set_text(text);
    }
}
