//! Mutable view of the runtime handed to behavior handlers.

use std::collections::HashMap;
use std::time::Duration;

use paperdom::{Document, Layout, TimerId, Timers, Viewport};

use crate::behavior::{has_part, TimerTask};
use crate::events::{EventDetail, WidgetEvent};

/// What a handler may touch while it runs.
///
/// The document is the state store; everything else is plumbing: geometry
/// inputs, the timer queue, the outgoing event queue, the single open-modal
/// slot, and a deferred focus request the runtime applies (and announces as
/// focus events) once the handler returns.
pub struct BehaviorContext<'a> {
    pub doc: &'a mut Document,
    pub layout: &'a Layout,
    pub viewport: &'a mut Viewport,
    pub timers: &'a mut Timers,
    pub(crate) events: &'a mut Vec<WidgetEvent>,
    pub(crate) timer_tasks: &'a mut HashMap<TimerId, TimerTask>,
    pub(crate) open_modal: &'a mut Option<String>,
    pub(crate) focus_request: &'a mut Option<FocusRequest>,
}

/// Deferred focus change requested by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusRequest {
    Focus(String),
    Blur,
}

impl BehaviorContext<'_> {
    /// Queue a widget event for the host.
    pub fn push_event(&mut self, source: impl Into<String>, detail: EventDetail) {
        self.events.push(WidgetEvent::new(source, detail));
    }

    /// Schedule a timer that will be routed back to `task.behavior`.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = self.timers.schedule(delay);
        self.timer_tasks.insert(id, task);
        id
    }

    /// Cancel a pending timer and forget its task.
    pub fn cancel_timer(&mut self, id: TimerId) {
        self.timers.cancel(id);
        self.timer_tasks.remove(&id);
    }

    /// The currently open modal, if any.
    pub fn open_modal(&self) -> Option<&str> {
        self.open_modal.as_deref()
    }

    pub fn set_open_modal(&mut self, id: Option<String>) {
        *self.open_modal = id;
    }

    /// Ask the runtime to move focus after this handler returns.
    /// The change is announced as `FocusOut`/`FocusIn` events.
    pub fn request_focus(&mut self, id: impl Into<String>) {
        *self.focus_request = Some(FocusRequest::Focus(id.into()));
    }

    pub fn request_blur(&mut self) {
        *self.focus_request = Some(FocusRequest::Blur);
    }

    /// Nearest ancestor of `target` (inclusive) tagged with the given part
    /// kind — the widget instance an event belongs to.
    pub fn widget_root(&self, target: &str, kind: &str) -> Option<String> {
        self.doc
            .ancestors(target)
            .into_iter()
            .find(|id| self.doc.get(id).is_some_and(|el| has_part(el, kind)))
    }
}
