//! Event handling for the accordion behavior.

use crate::behavior::{collect_matching, has_part};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};

use super::AccordionState;

/// Make `hidden` agree with each button's declarative `aria-expanded`.
pub(super) fn reconcile_all(root: &str, ctx: &mut BehaviorContext) {
    let roots = match ctx.doc.get(root) {
        Some(el) => collect_matching(el, |el| has_part(el, super::ROOT)),
        None => return,
    };
    for accordion in roots {
        let state = AccordionState::read(ctx.doc, &accordion);
        state.apply(ctx.doc);
    }
}

pub(super) fn on_button_activate(button: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(root) = ctx.widget_root(button, super::ROOT) else {
        log::warn!("[accordion] button `{button}` is outside any accordion root");
        return EventResult::Ignored;
    };

    let mut state = AccordionState::read(ctx.doc, &root);
    let Some(expanded) = state.toggle(button) else {
        // The clicked button had a broken panel link; read() already warned.
        return EventResult::Ignored;
    };
    state.apply(ctx.doc);

    ctx.push_event(
        root,
        EventDetail::AccordionChange {
            button: button.to_string(),
            expanded,
        },
    );
    EventResult::Consumed
}
