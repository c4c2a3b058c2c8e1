//! Combo box behavior: filter-as-you-type, keyboard suggestion navigation,
//! selection commit.
//!
//! DOM focus stays on the text input the whole time; the active suggestion is
//! tracked through `aria-activedescendant` and a class marker on the option.

mod events;
mod filter;
mod render;
mod state;

pub use filter::{filter_options, FilterMode};
pub use state::{ComboBoxState, OptionItem};

use paperdom::Event;

use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "combo-box";

/// Part kinds.
pub const ROOT: &str = "combo-box";
pub const INPUT: &str = "combo-box-input";
pub const LIST: &str = "combo-box-list";
pub const OPTION: &str = "combo-box-option";
pub const TOGGLE: &str = "combo-box-toggle";
pub const CLEAR: &str = "combo-box-clear";

pub const CLASS_ROOT: &str = "usa-combo-box";
pub const CLASS_INPUT: &str = "usa-combo-box__input";
pub const CLASS_LIST: &str = "usa-combo-box__list";
pub const CLASS_OPTION: &str = "usa-combo-box__list-option";
pub const CLASS_OPTION_FOCUSED: &str = "usa-combo-box__list-option--focused";
pub const CLASS_OPTION_SELECTED: &str = "usa-combo-box__list-option--selected";
pub const CLASS_NO_RESULTS: &str = "usa-combo-box__list-option--no-results";
pub const CLASS_SELECT: &str = "usa-combo-box__select";
pub const CLASS_TOGGLE: &str = "usa-combo-box__toggle-list";
pub const CLASS_CLEAR: &str = "usa-combo-box__clear-input";
pub const CLASS_STATUS: &str = "usa-combo-box__status";

/// Committed value on the root.
pub const VALUE_ATTR: &str = "data-value";
/// Switches the filter pass to fuzzy scoring.
pub const FILTER_ATTR: &str = "data-filter";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(INPUT, Selector::Class(CLASS_INPUT)),
    PartSpec::new(LIST, Selector::Class(CLASS_LIST)),
    PartSpec::new(OPTION, Selector::Class(CLASS_OPTION)),
    PartSpec::new(TOGGLE, Selector::Class(CLASS_TOGGLE)),
    PartSpec::new(CLEAR, Selector::Class(CLASS_CLEAR)),
];

#[derive(Debug, Default)]
pub struct ComboBox;

impl Behavior for ComboBox {
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
            (INPUT, Event::Input { value, .. }) => events::on_input(target, value, ctx),
            (INPUT, Event::Key { key, modifiers, .. }) => {
                events::on_input_key(target, *key, *modifiers, ctx)
            }
            (INPUT | TOGGLE | CLEAR, Event::FocusOut { related, .. }) => {
                events::on_focus_out(target, related.as_deref(), ctx)
            }
            (OPTION, Event::Click { .. }) => events::on_option_click(target, ctx),
            (TOGGLE, Event::Click { .. }) => events::on_toggle_click(target, ctx),
            (CLEAR, Event::Click { .. }) => events::on_clear_click(target, ctx),
            _ => EventResult::Ignored,
        }
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(ComboBox)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
