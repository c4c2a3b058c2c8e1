//! Event handling for the combo box behavior.

use paperdom::{Element, Key, Modifiers};

use crate::aria;
use crate::behavior::{collect_matching, has_part};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};

use super::filter::filter_options;
use super::render::{close_list, render_list};
use super::ComboBoxState;

/// Generate the structural elements the markup may omit: the visible list
/// and the status live region.
pub(super) fn prepare_all(root: &str, ctx: &mut BehaviorContext) {
    let roots = match ctx.doc.get(root) {
        Some(el) => collect_matching(el, |el| has_part(el, super::ROOT)),
        None => return,
    };
    for combo in roots {
        let missing_list = ctx
            .doc
            .get(&combo)
            .is_some_and(|el| collect_matching(el, |c| c.has_class(super::CLASS_LIST)).is_empty());
        if missing_list {
            let list = Element::list()
                .id(format!("{combo}__list"))
                .class(super::CLASS_LIST)
                .attr(crate::behavior::PART_ATTR, super::LIST)
                .hidden();
            ctx.doc.append_child(&combo, list);
        }
        let missing_status = ctx
            .doc
            .get(&combo)
            .is_some_and(|el| collect_matching(el, |c| c.has_class(super::CLASS_STATUS)).is_empty());
        if missing_status {
            let status = Element::div()
                .id(format!("{combo}__status"))
                .class(super::CLASS_STATUS)
                .attr("aria-live", "polite");
            ctx.doc.append_child(&combo, status);
        }

        if let Ok(state) = ComboBoxState::read(ctx.doc, &combo) {
            if let Some(input) = ctx.doc.get_mut(&state.input) {
                input.set_attr("aria-controls", state.list.clone());
                input.set_attr("aria-expanded", "false");
                input.set_attr("role", "combobox");
            }
            if let Some(list) = ctx.doc.get_mut(&state.list) {
                list.set_attr("role", "listbox");
            }
        }
    }
}

pub(super) fn on_input(input: &str, value: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(state) = resolve(input, ctx) else {
        return EventResult::Ignored;
    };

    let options = state.options(ctx.doc);
    let matches = filter_options(&options, value, state.filter_mode);
    let count = matches.len();
    render_list(&state, &options, &matches, None, ctx);

    ctx.push_event(
        state.root.clone(),
        EventDetail::ComboBoxChange {
            query: value.to_string(),
            matches: count,
        },
    );
    EventResult::Consumed
}

pub(super) fn on_input_key(
    input: &str,
    key: Key,
    modifiers: Modifiers,
    ctx: &mut BehaviorContext,
) -> EventResult {
    if modifiers.ctrl || modifiers.alt {
        return EventResult::Ignored;
    }
    let Some(state) = resolve(input, ctx) else {
        return EventResult::Ignored;
    };

    match key {
        Key::Down => {
            let options = state.options(ctx.doc);
            let query = if state.is_open(ctx.doc) {
                state.input_value(ctx.doc)
            } else {
                String::new()
            };
            let matches = filter_options(&options, &query, state.filter_mode);
            if matches.is_empty() {
                return EventResult::Consumed;
            }
            // No wrap: the last suggestion holds.
            let active = match state.active_index(ctx.doc) {
                Some(current) => (current + 1).min(matches.len() - 1),
                None => 0,
            };
            render_list(&state, &options, &matches, Some(active), ctx);
            EventResult::Consumed
        }
        Key::Up => {
            if !state.is_open(ctx.doc) {
                return EventResult::Ignored;
            }
            let options = state.options(ctx.doc);
            let matches =
                filter_options(&options, &state.input_value(ctx.doc), state.filter_mode);
            if matches.is_empty() {
                return EventResult::Consumed;
            }
            // No wrap: the first suggestion holds.
            let active = state.active_index(ctx.doc).map_or(0, |c| c.saturating_sub(1));
            render_list(&state, &options, &matches, Some(active), ctx);
            EventResult::Consumed
        }
        Key::Enter => {
            if !state.is_open(ctx.doc) {
                return EventResult::Ignored;
            }
            let options = state.options(ctx.doc);
            let matches =
                filter_options(&options, &state.input_value(ctx.doc), state.filter_mode);
            // With nothing arrowed to yet, the first suggestion is the one
            // Enter commits.
            let active = state.active_index(ctx.doc).unwrap_or(0);
            match matches.get(active) {
                Some(&source_index) => {
                    let option = options[source_index].clone();
                    commit(&state, &option.value, &option.label, ctx);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            }
        }
        Key::Escape => {
            if !state.is_open(ctx.doc) {
                return EventResult::Ignored;
            }
            // Drop the filter text and show the committed value again.
            let restored = state.committed_label(ctx.doc).unwrap_or_default();
            if let Some(el) = ctx.doc.get_mut(&state.input) {
                el.set_attr("value", restored);
            }
            close_list(&state, ctx);
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

pub(super) fn on_option_click(option: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(state) = resolve(option, ctx) else {
        return EventResult::Ignored;
    };
    let Some(option_el) = ctx.doc.get(option) else {
        return EventResult::Ignored;
    };
    let value = option_el
        .get_attr("data-value")
        .unwrap_or_default()
        .to_string();
    let label = option_el.text_content().to_string();
    commit(&state, &value, &label, ctx);
    EventResult::Consumed
}

pub(super) fn on_toggle_click(toggle: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(state) = resolve(toggle, ctx) else {
        return EventResult::Ignored;
    };
    if state.is_open(ctx.doc) {
        close_list(&state, ctx);
    } else {
        // The toggle shows the full list regardless of the typed text.
        let options = state.options(ctx.doc);
        let matches = filter_options(&options, "", state.filter_mode);
        render_list(&state, &options, &matches, None, ctx);
    }
    ctx.request_focus(state.input.clone());
    EventResult::Consumed
}

pub(super) fn on_clear_click(clear: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(state) = resolve(clear, ctx) else {
        return EventResult::Ignored;
    };
    if let Some(input) = ctx.doc.get_mut(&state.input) {
        input.set_attr("value", "");
    }
    if let Some(root_el) = ctx.doc.get_mut(&state.root) {
        root_el.remove_attr(super::VALUE_ATTR);
    }
    close_list(&state, ctx);
    ctx.request_focus(state.input.clone());
    ctx.push_event(
        state.root.clone(),
        EventDetail::ComboBoxChange {
            query: String::new(),
            matches: 0,
        },
    );
    EventResult::Consumed
}

/// Focus leaving the widget closes the list; the typed text stays as-is.
pub(super) fn on_focus_out(
    input: &str,
    related: Option<&str>,
    ctx: &mut BehaviorContext,
) -> EventResult {
    let Some(state) = resolve(input, ctx) else {
        return EventResult::Ignored;
    };
    let leaving = match related {
        Some(related) => !ctx.doc.is_within(related, &state.root),
        None => true,
    };
    if leaving && state.is_open(ctx.doc) {
        close_list(&state, ctx);
    }
    EventResult::Ignored
}

fn resolve(member: &str, ctx: &mut BehaviorContext) -> Option<ComboBoxState> {
    let root = ctx.widget_root(member, super::ROOT)?;
    match ComboBoxState::read(ctx.doc, &root) {
        Ok(state) => Some(state),
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            None
        }
    }
}

fn commit(state: &ComboBoxState, value: &str, label: &str, ctx: &mut BehaviorContext) {
    if let Some(input) = ctx.doc.get_mut(&state.input) {
        input.set_attr("value", label);
    }
    if let Some(root_el) = ctx.doc.get_mut(&state.root) {
        root_el.set_attr(super::VALUE_ATTR, value);
    }
    close_list(state, ctx);
    ctx.request_focus(state.input.clone());

    ctx.push_event(
        state.root.clone(),
        EventDetail::ComboBoxSelect {
            value: value.to_string(),
            label: label.to_string(),
        },
    );

    // A combo box inside a time picker surfaces the commit as a time pick.
    let is_time_picker = ctx
        .doc
        .get(&state.root)
        .is_some_and(|el| el.has_class(crate::widgets::time_picker::CLASS_ROOT));
    if is_time_picker {
        ctx.push_event(
            state.root.clone(),
            EventDetail::TimePickerSelect {
                value: value.to_string(),
            },
        );
    }
}
