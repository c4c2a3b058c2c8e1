//! Event handling for the date picker behavior.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use paperdom::{Key, Modifiers};
use regex::Regex;

use crate::aria;
use crate::behavior::{collect_matching, has_part};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};

use super::render::render_calendar;
use super::state::{shift_months, shift_years, start_of_week};
use super::DatePickerState;

static EXTERNAL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})/(\d{1,2})/(\d{4})\s*$").unwrap()
});

/// Ensure each picker has a (closed) calendar container and a wired toggle.
pub(super) fn prepare_all(root: &str, ctx: &mut BehaviorContext) {
    let roots = match ctx.doc.get(root) {
        Some(el) => collect_matching(el, |el| has_part(el, super::ROOT)),
        None => return,
    };
    for picker in roots {
        let has_calendar = ctx
            .doc
            .get(&picker)
            .is_some_and(|el| !collect_matching(el, |c| c.has_class(super::CLASS_CALENDAR)).is_empty());
        if !has_calendar {
            let calendar = paperdom::Element::div()
                .id(format!("{picker}__calendar"))
                .class(super::CLASS_CALENDAR)
                .hidden();
            ctx.doc.append_child(&picker, calendar);
        }
        if let Ok(state) = DatePickerState::read(ctx.doc, &picker) {
            if let Some(button) = ctx.doc.get_mut(&state.button) {
                button.set_attr("aria-controls", state.calendar.clone());
                button.set_attr("aria-expanded", "false");
            }
        }
    }
}

pub(super) fn on_toggle(button: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(root) = ctx.widget_root(button, super::ROOT) else {
        log::warn!("[date-picker] button `{button}` is outside any date picker root");
        return EventResult::Ignored;
    };
    let mut state = match DatePickerState::read(ctx.doc, &root) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };

    if state.is_open(ctx.doc) {
        close_calendar(&state, ctx);
        return EventResult::Consumed;
    }

    let anchor = state.selected.unwrap_or(state.today);
    state.display_month_of(anchor);
    let focus = state.clamp(state.default_focus());

    if let Some(calendar) = ctx.doc.get_mut(&state.calendar) {
        calendar.set_hidden(false);
    }
    if let Some(button) = ctx.doc.get_mut(&state.button) {
        button.set_attr("aria-expanded", "true");
    }
    render_calendar(&state, focus, true, ctx);
    EventResult::Consumed
}

pub(super) fn on_day_activate(cell: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some((mut state, date)) = cell_context(cell, ctx) else {
        return EventResult::Ignored;
    };
    if !state.in_range(date) {
        return EventResult::Ignored;
    }
    commit(&mut state, date, ctx);
    EventResult::Consumed
}

pub(super) fn on_day_key(
    cell: &str,
    key: Key,
    modifiers: Modifiers,
    ctx: &mut BehaviorContext,
) -> EventResult {
    let Some((mut state, current)) = cell_context(cell, ctx) else {
        return EventResult::Ignored;
    };

    let moved = match (key, modifiers.shift) {
        (Key::Enter | Key::Char(' '), false) => {
            if state.in_range(current) {
                commit(&mut state, current, ctx);
            }
            return EventResult::Consumed;
        }
        (Key::Escape, false) => {
            close_calendar(&state, ctx);
            ctx.request_focus(state.button.clone());
            return EventResult::Consumed;
        }
        (Key::Left, false) => current.checked_sub_days(Days::new(1)),
        (Key::Right, false) => current.checked_add_days(Days::new(1)),
        (Key::Up, false) => current.checked_sub_days(Days::new(7)),
        (Key::Down, false) => current.checked_add_days(Days::new(7)),
        (Key::Home, false) => Some(start_of_week(current)),
        (Key::End, false) => start_of_week(current).checked_add_days(Days::new(6)),
        (Key::PageUp, false) => Some(shift_months(current, -1)),
        (Key::PageDown, false) => Some(shift_months(current, 1)),
        (Key::PageUp, true) => Some(shift_years(current, -1)),
        (Key::PageDown, true) => Some(shift_years(current, 1)),
        _ => return EventResult::Ignored,
    };
    let Some(target) = moved else {
        return EventResult::Consumed;
    };
    let target = state.clamp(target);

    // Crossing the edge of the rendered month re-renders the adjacent month
    // before focus lands on the computed day.
    if !state.in_displayed_month(target) {
        state.display_month_of(target);
    }
    render_calendar(&state, target, true, ctx);
    EventResult::Consumed
}

pub(super) fn on_page(kind: &str, button: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(root) = ctx.widget_root(button, super::ROOT) else {
        return EventResult::Ignored;
    };
    let mut state = match DatePickerState::read(ctx.doc, &root) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };

    let focus = state.focus_date(ctx.doc);
    let target = state.clamp(match kind {
        super::PREV_MONTH => shift_months(focus, -1),
        super::NEXT_MONTH => shift_months(focus, 1),
        super::PREV_YEAR => shift_years(focus, -1),
        super::NEXT_YEAR => shift_years(focus, 1),
        _ => return EventResult::Ignored,
    });

    state.display_month_of(target);
    // Focus stays on the paging button; only the focus marker moves.
    render_calendar(&state, target, false, ctx);
    EventResult::Consumed
}

pub(super) fn on_input_change(input: &str, value: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(root) = ctx.widget_root(input, super::ROOT) else {
        return EventResult::Ignored;
    };

    if value.trim().is_empty() {
        if let Some(root_el) = ctx.doc.get_mut(&root) {
            root_el.remove_attr(super::VALUE_ATTR);
        }
        return EventResult::Consumed;
    }

    // Unparsable text is not an error; the value simply does not change.
    if let Some(date) = parse_external(value) {
        if let Some(root_el) = ctx.doc.get_mut(&root) {
            root_el.set_attr(super::VALUE_ATTR, date.to_string());
        }
    }
    EventResult::Consumed
}

fn cell_context(cell: &str, ctx: &mut BehaviorContext) -> Option<(DatePickerState, NaiveDate)> {
    let root = ctx.widget_root(cell, super::ROOT)?;
    let state = match DatePickerState::read(ctx.doc, &root) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return None;
        }
    };
    let date = ctx
        .doc
        .get(cell)
        .and_then(|el| el.get_attr("data-value"))
        .and_then(|value| value.parse().ok())?;
    Some((state, date))
}

fn commit(state: &mut DatePickerState, date: NaiveDate, ctx: &mut BehaviorContext) {
    state.selected = Some(date);
    if let Some(root_el) = ctx.doc.get_mut(&state.root) {
        root_el.set_attr(super::VALUE_ATTR, date.to_string());
    }
    if let Some(input_el) = ctx.doc.get_mut(&state.input) {
        input_el.set_attr("value", format_external(date));
    }
    close_calendar(state, ctx);
    ctx.request_focus(state.input.clone());
    ctx.push_event(
        state.root.clone(),
        EventDetail::DatePickerSelect {
            value: date.to_string(),
        },
    );
}

fn close_calendar(state: &DatePickerState, ctx: &mut BehaviorContext) {
    if let Some(calendar) = ctx.doc.get_mut(&state.calendar) {
        calendar.set_hidden(true);
    }
    if let Some(button) = ctx.doc.get_mut(&state.button) {
        button.set_attr("aria-expanded", "false");
    }
}

fn format_external(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

fn parse_external(value: &str) -> Option<NaiveDate> {
    let captures = EXTERNAL_FORMAT.captures(value)?;
    let month: u32 = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
