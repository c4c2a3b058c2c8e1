//! Event handling for the modal behavior.

use paperdom::{first_tabbable, next_tabbable, prev_tabbable, Event, Key};

use crate::aria::{self, resolve_controls};
use crate::behavior::{collect_matching, has_part};
use crate::context::BehaviorContext;
use crate::error::Error;
use crate::events::{EventDetail, EventResult};

use super::ModalState;

/// Close every wrapper. A dialog without any tabbable content becomes
/// focusable itself, so the trap always has somewhere to hold focus.
pub(super) fn prepare_all(root: &str, ctx: &mut BehaviorContext) {
    let wrappers = match ctx.doc.get(root) {
        Some(el) => collect_matching(el, |el| has_part(el, super::WRAPPER)),
        None => return,
    };
    for wrapper in wrappers {
        if let Some(el) = ctx.doc.get_mut(&wrapper) {
            if !el.has_class(super::CLASS_VISIBLE) {
                el.set_hidden(true);
            }
        }
        if let Ok(state) = ModalState::resolve(ctx.doc, &wrapper) {
            let empty = ctx
                .doc
                .get(&state.modal)
                .is_none_or(|el| paperdom::collect_tabbable(el).is_empty());
            if empty {
                if let Some(el) = ctx.doc.get_mut(&state.modal) {
                    el.focusable = true;
                }
            }
        }
    }
}

pub(super) fn on_trigger(trigger: &str, ctx: &mut BehaviorContext) -> EventResult {
    let wrapper = match resolve_controls(ctx.doc, trigger) {
        Ok(wrapper) => wrapper,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };
    open(&wrapper, Some(trigger), ctx)
}

pub(super) fn on_closer(closer: &str, ctx: &mut BehaviorContext) -> EventResult {
    match ModalState::from_member(ctx.doc, closer) {
        Ok(state) => close(&state, ctx),
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            EventResult::Ignored
        }
    }
}

pub(super) fn on_overlay(overlay: &str, ctx: &mut BehaviorContext) -> EventResult {
    let state = match ModalState::from_member(ctx.doc, overlay) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };
    if !state.is_open(ctx.doc) {
        return EventResult::Ignored;
    }
    if state.force_action {
        // Backdrop dismissal is disabled; swallow the click.
        return EventResult::Consumed;
    }
    close(&state, ctx)
}

pub(super) fn open(wrapper: &str, opener: Option<&str>, ctx: &mut BehaviorContext) -> EventResult {
    if let Some(already_open) = ctx.open_modal() {
        if already_open == wrapper {
            return EventResult::Consumed;
        }
        aria::warn_defect(
            super::NAME,
            &Error::ModalAlreadyOpen {
                requested: wrapper.to_string(),
                open: already_open.to_string(),
            },
        );
        return EventResult::Ignored;
    }

    let state = match ModalState::resolve(ctx.doc, wrapper) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };

    // Remember where focus came from.
    let return_to = opener
        .map(str::to_string)
        .or_else(|| ctx.doc.active_element().map(str::to_string));
    if let Some(modal_el) = ctx.doc.get_mut(&state.modal) {
        match &return_to {
            Some(id) => modal_el.set_attr(super::RETURN_FOCUS_ATTR, id.clone()),
            None => {
                modal_el.remove_attr(super::RETURN_FOCUS_ATTR);
            }
        }
    }

    if let Some(wrapper_el) = ctx.doc.get_mut(wrapper) {
        wrapper_el.set_hidden(false);
        wrapper_el.add_class(super::CLASS_VISIBLE);
    }

    inert_background(&state, ctx);
    ctx.doc.root_mut().add_class(super::CLASS_ACTIVE_BODY);
    ctx.set_open_modal(Some(wrapper.to_string()));

    // Focus the first tabbable descendant, or the dialog container itself.
    let first = ctx
        .doc
        .get(&state.modal)
        .and_then(first_tabbable)
        .unwrap_or_else(|| state.modal.clone());
    ctx.request_focus(first);

    ctx.push_event(
        wrapper,
        EventDetail::ModalOpen {
            opener: opener.map(str::to_string),
        },
    );
    EventResult::Consumed
}

pub(super) fn close(state: &ModalState, ctx: &mut BehaviorContext) -> EventResult {
    if ctx.open_modal() != Some(state.wrapper.as_str()) {
        return EventResult::Ignored;
    }

    release_background(ctx);
    ctx.doc.root_mut().remove_class(super::CLASS_ACTIVE_BODY);

    if let Some(wrapper_el) = ctx.doc.get_mut(&state.wrapper) {
        wrapper_el.remove_class(super::CLASS_VISIBLE);
        wrapper_el.set_hidden(true);
    }
    ctx.set_open_modal(None);

    // Restore focus to the opener; the document root is the fallback when it
    // is gone.
    let return_to = ctx
        .doc
        .get(&state.modal)
        .and_then(|el| el.get_attr(super::RETURN_FOCUS_ATTR))
        .map(str::to_string);
    match return_to {
        Some(id) if ctx.doc.is_tabbable(&id) => ctx.request_focus(id),
        _ => ctx.request_blur(),
    }

    ctx.push_event(state.wrapper.clone(), EventDetail::ModalClose);
    EventResult::Consumed
}

/// Document-scoped keys while a modal is open: Escape closes, Tab wraps.
pub(super) fn on_document_key(event: &Event, ctx: &mut BehaviorContext) -> EventResult {
    let Event::Key { key, modifiers, .. } = event else {
        return EventResult::Ignored;
    };
    let Some(wrapper) = ctx.open_modal().map(str::to_string) else {
        return EventResult::Ignored;
    };
    let state = match ModalState::resolve(ctx.doc, &wrapper) {
        Ok(state) => state,
        Err(error) => {
            aria::warn_defect(super::NAME, &error);
            return EventResult::Ignored;
        }
    };

    match key {
        Key::Escape if modifiers.none() => {
            if state.force_action {
                return EventResult::Consumed;
            }
            close(&state, ctx)
        }
        Key::Tab | Key::BackTab => {
            let backward = *key == Key::BackTab || modifiers.shift;
            // The tabbable set is recomputed on every keypress; dialog content
            // may have changed while open.
            let Some(wrapper_el) = ctx.doc.get(&state.wrapper) else {
                return EventResult::Ignored;
            };
            let current = ctx.doc.active_element();
            let next = if backward {
                prev_tabbable(wrapper_el, current)
            } else {
                next_tabbable(wrapper_el, current)
            };
            if let Some(next) = next {
                ctx.request_focus(next);
            }
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

/// Hide the rest of the page from assistive tech while the modal is open.
fn inert_background(state: &ModalState, ctx: &mut BehaviorContext) {
    let chain = ctx.doc.ancestors(&state.wrapper);
    let top_level: Vec<String> = ctx
        .doc
        .root()
        .child_elements()
        .iter()
        .map(|el| el.id.clone())
        .collect();
    for id in top_level {
        if chain.contains(&id) {
            continue;
        }
        if let Some(el) = ctx.doc.get_mut(&id) {
            el.set_attr("aria-hidden", "true");
            el.set_attr(super::INERT_ATTR, "");
        }
    }
}

fn release_background(ctx: &mut BehaviorContext) {
    let inerted = collect_matching(ctx.doc.root(), |el| el.has_attr(super::INERT_ATTR));
    for id in inerted {
        if let Some(el) = ctx.doc.get_mut(&id) {
            el.remove_attr("aria-hidden");
            el.remove_attr(super::INERT_ATTR);
        }
    }
}
