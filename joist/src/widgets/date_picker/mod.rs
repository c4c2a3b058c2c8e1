//! Date picker behavior: calendar open/close, grid keyboard navigation,
//! month/year paging, selection commit.
//!
//! The committed value lives in two projections, the way the upstream widget
//! keeps an internal and an external input: `data-value` on the root holds
//! ISO `YYYY-MM-DD`, the text input shows `MM/DD/YYYY`.

mod events;
mod render;
mod state;

pub use state::{shift_months, shift_years, DatePickerState};

use paperdom::{Event, Key};

use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "date-picker";

/// Part kinds. The calendar grid and its paging buttons are generated at
/// render time and tag themselves; their selectors only matter if a tree is
/// re-installed with a calendar already open.
pub const ROOT: &str = "date-picker";
pub const INPUT: &str = "date-picker-input";
pub const BUTTON: &str = "date-picker-button";
pub const DAY: &str = "date-picker-day";
pub const PREV_MONTH: &str = "date-picker-prev-month";
pub const NEXT_MONTH: &str = "date-picker-next-month";
pub const PREV_YEAR: &str = "date-picker-prev-year";
pub const NEXT_YEAR: &str = "date-picker-next-year";

pub const CLASS_ROOT: &str = "usa-date-picker";
pub const CLASS_INPUT: &str = "usa-date-picker__external-input";
pub const CLASS_BUTTON: &str = "usa-date-picker__button";
pub const CLASS_CALENDAR: &str = "usa-date-picker__calendar";
pub const CLASS_DATE: &str = "usa-date-picker__calendar__date";
pub const CLASS_DATE_FOCUSED: &str = "usa-date-picker__calendar__date--focused";
pub const CLASS_DATE_SELECTED: &str = "usa-date-picker__calendar__date--selected";
pub const CLASS_DATE_PREVIOUS_MONTH: &str = "usa-date-picker__calendar__date--previous-month";
pub const CLASS_DATE_NEXT_MONTH: &str = "usa-date-picker__calendar__date--next-month";
pub const CLASS_PREV_MONTH: &str = "usa-date-picker__calendar__previous-month";
pub const CLASS_NEXT_MONTH: &str = "usa-date-picker__calendar__next-month";
pub const CLASS_PREV_YEAR: &str = "usa-date-picker__calendar__previous-year";
pub const CLASS_NEXT_YEAR: &str = "usa-date-picker__calendar__next-year";

/// ISO committed value on the root.
pub const VALUE_ATTR: &str = "data-value";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(INPUT, Selector::Class(CLASS_INPUT)),
    PartSpec::new(BUTTON, Selector::Class(CLASS_BUTTON)),
    PartSpec::new(DAY, Selector::Class(CLASS_DATE)),
    PartSpec::new(PREV_MONTH, Selector::Class(CLASS_PREV_MONTH)),
    PartSpec::new(NEXT_MONTH, Selector::Class(CLASS_NEXT_MONTH)),
    PartSpec::new(PREV_YEAR, Selector::Class(CLASS_PREV_YEAR)),
    PartSpec::new(NEXT_YEAR, Selector::Class(CLASS_NEXT_YEAR)),
];

#[derive(Debug, Default)]
pub struct DatePicker;

impl Behavior for DatePicker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        events::prepare_all(root, ctx);
    }

    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult {
        match (kind, event) {
            (BUTTON, Event::Click { .. }) => events::on_toggle(target, ctx),
            (BUTTON, Event::Key { key, modifiers, .. })
                if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) =>
            {
                events::on_toggle(target, ctx)
            }
            (DAY, Event::Click { .. }) => events::on_day_activate(target, ctx),
            (DAY, Event::Key { key, modifiers, .. }) => {
                events::on_day_key(target, *key, *modifiers, ctx)
            }
            (INPUT, Event::Input { value, .. }) => events::on_input_change(target, value, ctx),
            (
                PREV_MONTH | NEXT_MONTH | PREV_YEAR | NEXT_YEAR,
                Event::Click { .. },
            ) => events::on_page(kind, target, ctx),
            _ => EventResult::Ignored,
        }
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(DatePicker)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
