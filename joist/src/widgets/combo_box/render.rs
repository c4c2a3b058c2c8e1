//! Suggestion list projection.

use paperdom::Element;

use crate::behavior::PART_ATTR;
use crate::context::BehaviorContext;

use super::{ComboBoxState, OptionItem};

/// Rebuild the visible suggestion list for the current filter pass.
/// `active` is a position within `matches`, not a source index.
pub(super) fn render_list(
    state: &ComboBoxState,
    options: &[OptionItem],
    matches: &[usize],
    active: Option<usize>,
    ctx: &mut BehaviorContext,
) {
    let mut items = Vec::new();
    if matches.is_empty() {
        items.push(
            Element::item()
                .id(format!("{}--no-results", state.list))
                .class(super::CLASS_OPTION)
                .class(super::CLASS_NO_RESULTS)
                .text("No results found"),
        );
    } else {
        for (position, &source_index) in matches.iter().enumerate() {
            let option = &options[source_index];
            let mut item = Element::item()
                .id(state.option_id(position))
                .class(super::CLASS_OPTION)
                .attr(PART_ATTR, super::OPTION)
                .attr("data-value", option.value.clone())
                .attr(
                    "aria-selected",
                    if active == Some(position) { "true" } else { "false" },
                )
                .text(option.label.clone());
            if active == Some(position) {
                item = item.class(super::CLASS_OPTION_FOCUSED);
            }
            if state.committed.as_deref() == Some(option.value.as_str()) {
                item = item.class(super::CLASS_OPTION_SELECTED);
            }
            items.push(item);
        }
    }
    ctx.doc.replace_children(&state.list, items);

    if let Some(list) = ctx.doc.get_mut(&state.list) {
        list.set_hidden(false);
    }
    let descendant = active.map(|position| state.option_id(position));
    if let Some(input) = ctx.doc.get_mut(&state.input) {
        input.set_attr("aria-expanded", "true");
        match descendant {
            Some(id) => input.set_attr("aria-activedescendant", id),
            None => {
                input.remove_attr("aria-activedescendant");
            }
        }
    }

    update_status(state, matches.len(), ctx);
}

pub(super) fn close_list(state: &ComboBoxState, ctx: &mut BehaviorContext) {
    if let Some(list) = ctx.doc.get_mut(&state.list) {
        list.set_hidden(true);
    }
    if let Some(input) = ctx.doc.get_mut(&state.input) {
        input.set_attr("aria-expanded", "false");
        input.remove_attr("aria-activedescendant");
    }
    update_status(state, 0, ctx);
}

fn update_status(state: &ComboBoxState, count: usize, ctx: &mut BehaviorContext) {
    let Some(status) = &state.status else {
        return;
    };
    let text = if !state.is_open(ctx.doc) {
        String::new()
    } else if count == 0 {
        "No results.".to_string()
    } else if count == 1 {
        "1 result available.".to_string()
    } else {
        format!("{count} results available.")
    };
    if let Some(el) = ctx.doc.get_mut(status) {
        el.set_text(text);
    }
}
