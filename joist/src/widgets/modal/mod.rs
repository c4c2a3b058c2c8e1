//! Modal behavior: open/close, focus trap, background inerting.
//!
//! One modal may hold the document at a time. The open slot lives in the
//! runtime as an explicit single-slot registry, so a second open attempt is a
//! detectable warned no-op instead of a silent listener overwrite.

mod events;
mod state;

pub use state::ModalState;

use paperdom::{Event, Key};

use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "modal";

/// Part kinds.
pub const WRAPPER: &str = "modal-wrapper";
pub const ROOT: &str = "modal";
pub const TRIGGER: &str = "modal-trigger";
pub const CLOSER: &str = "modal-close";
pub const OVERLAY: &str = "modal-overlay";

pub const CLASS_WRAPPER: &str = "usa-modal-wrapper";
pub const CLASS_ROOT: &str = "usa-modal";
pub const CLASS_OVERLAY: &str = "usa-modal-overlay";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE_BODY: &str = "usa-js-modal--active";

pub const OPEN_ATTR: &str = "data-open-modal";
pub const CLOSE_ATTR: &str = "data-close-modal";
pub const FORCE_ACTION_ATTR: &str = "data-force-action";
pub const RETURN_FOCUS_ATTR: &str = "data-return-focus";

/// Marks elements inerted while a modal is open, so closing restores exactly
/// what opening changed.
pub const INERT_ATTR: &str = "data-modal-inert";

const PARTS: &[PartSpec] = &[
    PartSpec::new(WRAPPER, Selector::Class(CLASS_WRAPPER)),
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(TRIGGER, Selector::Attr(OPEN_ATTR)),
    PartSpec::new(CLOSER, Selector::Attr(CLOSE_ATTR)),
    PartSpec::new(OVERLAY, Selector::Class(CLASS_OVERLAY)),
];

#[derive(Debug, Default)]
pub struct Modal;

impl Behavior for Modal {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    fn document_level(&self) -> bool {
        true
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
        let activated = match event {
            Event::Click { .. } => true,
            Event::Key { key, modifiers, .. } => {
                modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
            }
            _ => false,
        };
        if !activated {
            return EventResult::Ignored;
        }

        match kind {
            TRIGGER => events::on_trigger(target, ctx),
            CLOSER => events::on_closer(target, ctx),
            OVERLAY => events::on_overlay(target, ctx),
            // Clicks inside the dialog stop before they reach the overlay.
            ROOT if matches!(event, Event::Click { .. }) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn on_document_event(&self, event: &Event, ctx: &mut BehaviorContext) -> EventResult {
        events::on_document_key(event, ctx)
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(Modal)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
