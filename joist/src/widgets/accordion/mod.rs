//! Accordion behavior: expand/collapse panels, single- or multi-open.
//!
//! Initial panel state is declarative (whoever rendered the markup decides
//! which panels start expanded); this module only keeps `hidden` and
//! `aria-expanded` agreeing from init onward.

mod events;
mod state;

pub use state::{AccordionState, PanelState};

use paperdom::{Event, Key};

use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "accordion";

/// Part kinds.
pub const ROOT: &str = "accordion";
pub const BUTTON: &str = "accordion-button";

pub const CLASS_ROOT: &str = "usa-accordion";
pub const CLASS_BUTTON: &str = "usa-accordion__button";
pub const CLASS_CONTENT: &str = "usa-accordion__content";

/// Root attribute enabling multi-open mode.
pub const ALLOW_MULTIPLE_ATTR: &str = "data-allow-multiple";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(BUTTON, Selector::Class(CLASS_BUTTON)),
];

#[derive(Debug, Default)]
pub struct Accordion;

impl Behavior for Accordion {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        events::reconcile_all(root, ctx);
    }

    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult {
        if kind != BUTTON {
            return EventResult::Ignored;
        }
        match event {
            Event::Click { .. } => events::on_button_activate(target, ctx),
            Event::Key { key, modifiers, .. }
                if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) =>
            {
                events::on_button_activate(target, ctx)
            }
            _ => EventResult::Ignored,
        }
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(Accordion)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
