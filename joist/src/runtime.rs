//! The dispatcher that ties documents, behaviors, timers, and focus together.
//!
//! The runtime is a thin event loop: it routes each input event along the
//! target's ancestor chain to the first part handler that consumes it, falls
//! back to document-level behaviors, and finally applies default actions
//! (Tab focus navigation). All handlers run to completion synchronously, in
//! the order events are dispatched.

use std::collections::HashMap;
use std::time::Duration;

use paperdom::{
    next_tabbable, prev_tabbable, Document, Event, Key, Layout, TimerId, Timers, Viewport,
};

use crate::behavior::{
    add_part, collect_matching, has_part, part_kinds, remove_part, Behavior, TimerTask,
};
use crate::context::{BehaviorContext, FocusRequest};
use crate::events::{EventResult, WidgetEvent};
use crate::registry::registered_behaviors;

struct Installed {
    behavior: Box<dyn Behavior>,
    root: String,
}

/// Borrow the runtime's state fields as a `BehaviorContext`.
/// A macro so `self.installed` stays independently borrowable.
macro_rules! context {
    ($self:ident) => {
        BehaviorContext {
            doc: &mut $self.doc,
            layout: &$self.layout,
            viewport: &mut $self.viewport,
            timers: &mut $self.timers,
            events: &mut $self.events,
            timer_tasks: &mut $self.timer_tasks,
            open_modal: &mut $self.open_modal,
            focus_request: &mut $self.focus_request,
        }
    };
}

pub struct Runtime {
    doc: Document,
    layout: Layout,
    viewport: Viewport,
    timers: Timers,
    timer_tasks: HashMap<TimerId, TimerTask>,
    events: Vec<WidgetEvent>,
    open_modal: Option<String>,
    focus_request: Option<FocusRequest>,
    installed: Vec<Installed>,
    routes: HashMap<&'static str, usize>,
}

impl Runtime {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            layout: Layout::new(),
            viewport: Viewport::new(80, 24),
            timers: Timers::new(),
            timer_tasks: HashMap::new(),
            events: Vec::new(),
            open_modal: None,
            focus_request: None,
            installed: Vec::new(),
            routes: HashMap::new(),
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The currently open modal wrapper, if any.
    pub fn open_modal(&self) -> Option<&str> {
        self.open_modal.as_deref()
    }

    /// Drain the widget events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Install every inventory-registered behavior at the document root.
    pub fn init_all(&mut self) {
        let mut behaviors: Vec<Box<dyn Behavior>> =
            registered_behaviors().map(|reg| (reg.factory)()).collect();
        behaviors.sort_by(|a, b| a.order().cmp(&b.order()).then(a.name().cmp(b.name())));

        let root = self.doc.root_id().to_string();
        for behavior in behaviors {
            self.install(behavior, &root);
        }
    }

    /// Install a behavior under the given root: tag its parts, mark the root,
    /// run its init. Re-installing on an already-marked root is a silent
    /// no-op, so double initialization cannot double-fire handlers.
    pub fn install(&mut self, behavior: Box<dyn Behavior>, root: &str) -> bool {
        let name = behavior.name();
        let marker = marker_attr(name);

        let Some(root_el) = self.doc.get(root) else {
            log::warn!("cannot install `{name}`: unknown root `{root}`");
            return false;
        };
        if root_el.has_attr(&marker) {
            log::debug!("`{name}` already installed on `{root}`");
            return false;
        }

        let mut tags: Vec<(String, &'static str)> = Vec::new();
        for part in behavior.parts() {
            for id in collect_matching(root_el, |el| part.selector.matches(el)) {
                tags.push((id, part.kind));
            }
        }
        for (id, kind) in &tags {
            if let Some(el) = self.doc.get_mut(id) {
                add_part(el, kind);
            }
        }
        if let Some(el) = self.doc.get_mut(root) {
            el.set_attr(marker, "");
        }

        let idx = self.installed.len();
        for part in behavior.parts() {
            self.routes.entry(part.kind).or_insert(idx);
        }
        self.installed.push(Installed {
            behavior,
            root: root.to_string(),
        });

        log::debug!("installed `{name}` on `{root}` ({} parts tagged)", tags.len());
        let root = root.to_string();
        {
            let mut ctx = context!(self);
            self.installed[idx].behavior.init(&root, &mut ctx);
        }
        self.apply_pending_focus();
        true
    }

    /// Remove a behavior: run its teardown, strip part tags and the install
    /// marker, cancel its timers.
    pub fn uninstall(&mut self, name: &str) -> bool {
        let Some(pos) = self
            .installed
            .iter()
            .position(|i| i.behavior.name() == name)
        else {
            return false;
        };

        let root = self.installed[pos].root.clone();
        {
            let mut ctx = context!(self);
            self.installed[pos].behavior.teardown(&root, &mut ctx);
        }
        self.apply_pending_focus();

        let kinds: Vec<&'static str> = self.installed[pos]
            .behavior
            .parts()
            .iter()
            .map(|p| p.kind)
            .collect();
        let tagged: Vec<String> = match self.doc.get(&root) {
            Some(root_el) => {
                collect_matching(root_el, |el| kinds.iter().any(|&k| has_part(el, k)))
            }
            None => Vec::new(),
        };
        for id in tagged {
            if let Some(el) = self.doc.get_mut(&id) {
                for &kind in &kinds {
                    remove_part(el, kind);
                }
            }
        }
        if let Some(el) = self.doc.get_mut(&root) {
            el.remove_attr(&marker_attr(name));
        }

        let stale: Vec<TimerId> = self
            .timer_tasks
            .iter()
            .filter(|(_, task)| task.behavior == name)
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            self.timers.cancel(id);
            self.timer_tasks.remove(&id);
        }

        self.installed.remove(pos);
        self.rebuild_routes();
        true
    }

    fn rebuild_routes(&mut self) {
        self.routes.clear();
        for (idx, installed) in self.installed.iter().enumerate() {
            for part in installed.behavior.parts() {
                self.routes.entry(part.kind).or_insert(idx);
            }
        }
    }

    /// Dispatch one input event through part routing, document-level
    /// behaviors, and default actions, in that order.
    pub fn dispatch(&mut self, event: Event) -> EventResult {
        log::trace!("dispatch {event:?}");

        if let Event::Scroll { offset } = &event {
            self.viewport.scroll_y = *offset;
        }

        // The input element carries its value before handlers run, as a
        // browser input does.
        if let Event::Input { target, value } = &event {
            match self.doc.get_mut(target) {
                Some(el) => el.set_attr("value", value.clone()),
                None => {
                    log::warn!("input event targets unknown element `{target}`");
                    return EventResult::Ignored;
                }
            }
        }

        if let Event::Click { target } = &event {
            // Disabled elements swallow clicks without routing.
            if self.doc.get(target).is_some_and(|el| el.disabled) {
                return EventResult::Ignored;
            }
            // Pointer presses move focus before the click is routed.
            if self.doc.is_tabbable(target) && self.doc.active_element() != Some(target.as_str())
            {
                self.apply_focus(Some(target.clone()));
            }
        }

        let mut result = self.route(&event);
        if !result.is_handled() {
            result = self.dispatch_document_level(&event);
        }
        if !result.is_handled() {
            result = self.default_action(&event);
        }
        result
    }

    /// Advance virtual time, routing fired timers to their owning behaviors.
    pub fn advance(&mut self, dt: Duration) {
        for id in self.timers.advance(dt) {
            let Some(task) = self.timer_tasks.remove(&id) else {
                continue;
            };
            let Some(idx) = self
                .installed
                .iter()
                .position(|i| i.behavior.name() == task.behavior)
            else {
                log::debug!("timer fired for uninstalled behavior `{}`", task.behavior);
                continue;
            };
            {
                let mut ctx = context!(self);
                self.installed[idx].behavior.on_timer(&task, &mut ctx);
            }
            self.apply_pending_focus();
        }
    }

    /// Programmatically move focus, announcing the change to behaviors.
    pub fn set_focus(&mut self, id: Option<&str>) {
        self.apply_focus(id.map(str::to_string));
    }

    fn route(&mut self, event: &Event) -> EventResult {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };
        let chain = self.doc.ancestors(target);
        if chain.is_empty() {
            log::warn!("event targets unknown element `{target}`");
            return EventResult::Ignored;
        }

        for id in chain {
            let kinds = match self.doc.get(&id) {
                Some(el) => part_kinds(el),
                None => continue,
            };
            for kind in kinds {
                let Some(&idx) = self.routes.get(kind.as_str()) else {
                    continue;
                };
                let result = {
                    let mut ctx = context!(self);
                    self.installed[idx].behavior.handle(&kind, event, &id, &mut ctx)
                };
                self.apply_pending_focus();
                if result.is_handled() {
                    return EventResult::Consumed;
                }
            }
        }
        EventResult::Ignored
    }

    fn dispatch_document_level(&mut self, event: &Event) -> EventResult {
        for idx in 0..self.installed.len() {
            if !self.installed[idx].behavior.document_level() {
                continue;
            }
            let result = {
                let mut ctx = context!(self);
                self.installed[idx].behavior.on_document_event(event, &mut ctx)
            };
            self.apply_pending_focus();
            if result.is_handled() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    /// Default actions for events no behavior consumed. Currently Tab and
    /// Shift+Tab cycle focus through the document's tabbable elements.
    fn default_action(&mut self, event: &Event) -> EventResult {
        let Event::Key { key, modifiers, .. } = event else {
            return EventResult::Ignored;
        };
        let forward = *key == Key::Tab && modifiers.none();
        let backward = *key == Key::BackTab
            || (*key == Key::Tab && modifiers.shift && !modifiers.ctrl && !modifiers.alt);
        if !forward && !backward {
            return EventResult::Ignored;
        }

        let current = self.doc.active_element().map(str::to_string);
        let next = if forward {
            next_tabbable(self.doc.root(), current.as_deref())
        } else {
            prev_tabbable(self.doc.root(), current.as_deref())
        };
        match next {
            Some(next) => {
                self.apply_focus(Some(next));
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn apply_pending_focus(&mut self) {
        while let Some(request) = self.focus_request.take() {
            match request {
                FocusRequest::Focus(id) => self.apply_focus(Some(id)),
                FocusRequest::Blur => self.apply_focus(None),
            }
        }
    }

    fn apply_focus(&mut self, id: Option<String>) {
        let old = self.doc.active_element().map(str::to_string);
        if old.as_deref() == id.as_deref() {
            return;
        }
        match &id {
            Some(new) => {
                if !self.doc.focus(new) {
                    log::debug!("focus request for `{new}` refused (not tabbable)");
                    return;
                }
            }
            None => {
                self.doc.blur();
            }
        }
        if let Some(old) = old {
            self.dispatch(Event::FocusOut {
                target: old,
                related: id.clone(),
            });
        }
        if let Some(new) = id {
            self.dispatch(Event::FocusIn { target: new });
        }
    }
}

fn marker_attr(name: &str) -> String {
    format!("data-{name}-initialized")
}
