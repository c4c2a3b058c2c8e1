//! Calendar grid construction.
//!
//! The grid is rebuilt from scratch on every open, page, or cross-month move:
//! always six rows of seven day cells, padded with the adjacent months'
//! overflow days.

use chrono::{Datelike, Days, NaiveDate};
use paperdom::Element;

use crate::behavior::PART_ATTR;
use crate::context::BehaviorContext;

use super::state::{first_of_month, start_of_week};
use super::DatePickerState;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const GRID_WEEKS: u64 = 6;

/// Rebuild the calendar for the displayed month. `focus` gets the focus
/// marker; when `move_focus` is set, document focus moves to its cell
/// (paging by button leaves focus on the button).
pub(super) fn render_calendar(
    state: &DatePickerState,
    focus: NaiveDate,
    move_focus: bool,
    ctx: &mut BehaviorContext,
) {
    let mut children = vec![header(state), weekday_row(state)];

    let mut day = start_of_week(first_of_month(state.displayed));
    for _ in 0..GRID_WEEKS {
        let mut row = Element::div()
            .id(format!("{}__week-{day}", state.root))
            .class("usa-date-picker__calendar__week");
        for _ in 0..7 {
            row = row.child(day_cell(state, day, focus));
            day = day.checked_add_days(Days::new(1)).unwrap_or(day);
        }
        children.push(row);
    }

    ctx.doc.replace_children(&state.calendar, children);
    if let Some(calendar) = ctx.doc.get_mut(&state.calendar) {
        calendar.set_attr("data-displayed", first_of_month(state.displayed).to_string());
        calendar.set_attr("data-focus", focus.to_string());
    }
    if move_focus {
        ctx.request_focus(state.cell_id(focus));
    }
}

fn header(state: &DatePickerState) -> Element {
    let nav = |kind: &str, class: &str, label: &str, suffix: &str| {
        Element::button(label)
            .id(format!("{}__{suffix}", state.root))
            .class(class)
            .attr(PART_ATTR, kind)
    };

    Element::div()
        .id(format!("{}__calendar-header", state.root))
        .class("usa-date-picker__calendar__header")
        .child(nav(
            super::PREV_YEAR,
            super::CLASS_PREV_YEAR,
            "«",
            "previous-year",
        ))
        .child(nav(
            super::PREV_MONTH,
            super::CLASS_PREV_MONTH,
            "‹",
            "previous-month",
        ))
        .child(
            Element::span(state.month_label())
                .id(format!("{}__month-label", state.root))
                .class("usa-date-picker__calendar__month-label"),
        )
        .child(nav(
            super::NEXT_MONTH,
            super::CLASS_NEXT_MONTH,
            "›",
            "next-month",
        ))
        .child(nav(
            super::NEXT_YEAR,
            super::CLASS_NEXT_YEAR,
            "»",
            "next-year",
        ))
}

fn weekday_row(state: &DatePickerState) -> Element {
    let mut row = Element::div()
        .id(format!("{}__weekdays", state.root))
        .class("usa-date-picker__calendar__day-of-week-row");
    for (i, label) in WEEKDAYS.iter().enumerate() {
        row = row.child(
            Element::span(*label)
                .id(format!("{}__weekday-{i}", state.root))
                .class("usa-date-picker__calendar__day-of-week"),
        );
    }
    row
}

fn day_cell(state: &DatePickerState, day: NaiveDate, focus: NaiveDate) -> Element {
    let mut cell = Element::button(day.day().to_string())
        .id(state.cell_id(day))
        .class(super::CLASS_DATE)
        .attr(PART_ATTR, super::DAY)
        .attr("data-value", day.to_string());

    if day.month() != state.displayed.month() {
        let class = if day < state.displayed {
            super::CLASS_DATE_PREVIOUS_MONTH
        } else {
            super::CLASS_DATE_NEXT_MONTH
        };
        cell = cell.class(class);
    }
    if Some(day) == state.selected {
        cell = cell.class(super::CLASS_DATE_SELECTED).attr("aria-selected", "true");
    }
    if day == focus {
        cell = cell.class(super::CLASS_DATE_FOCUSED);
    }
    if !state.in_range(day) {
        cell = cell.disabled(true);
    }
    cell
}
