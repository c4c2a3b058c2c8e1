//! Tooltip behavior: delayed show/hide and viewport-aware placement.
//!
//! A pending show is cancelled by the opposing leave/blur, and vice versa, so
//! a fast mouse-over never flashes the body. Placement is computed at show
//! time from the trigger's layout rectangle; a preferred side that would
//! overflow the viewport flips to the opposite side.

mod position;

pub use position::Side;

use paperdom::{Element, Event, TimerId};

use crate::behavior::{collect_matching, has_part, Behavior, PartSpec, Selector, TimerTask};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "tooltip";

/// Part kinds.
pub const TRIGGER: &str = "tooltip-trigger";

pub const CLASS_TRIGGER: &str = "usa-tooltip__trigger";
pub const CLASS_BODY: &str = "usa-tooltip__body";
pub const CLASS_SET: &str = "is-set";
pub const CLASS_VISIBLE: &str = "is-visible";

pub const POSITION_ATTR: &str = "data-position";
const SHOW_TIMER_ATTR: &str = "data-show-timer";
const HIDE_TIMER_ATTR: &str = "data-hide-timer";

/// Show waits out quick passes; hide is a little quicker than show.
pub const SHOW_DELAY_MS: u64 = 200;
pub const HIDE_DELAY_MS: u64 = 100;

const PARTS: &[PartSpec] = &[PartSpec::new(TRIGGER, Selector::Class(CLASS_TRIGGER))];

#[derive(Debug, Default)]
pub struct Tooltip;

impl Behavior for Tooltip {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        let triggers = match ctx.doc.get(root) {
            Some(el) => collect_matching(el, |el| has_part(el, TRIGGER)),
            None => return,
        };
        for trigger in triggers {
            enhance(&trigger, ctx);
        }
    }

    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult {
        if kind != TRIGGER {
            return EventResult::Ignored;
        }
        match event {
            Event::PointerEnter { .. } | Event::FocusIn { .. } => schedule_show(target, ctx),
            Event::PointerLeave { .. } | Event::FocusOut { .. } => schedule_hide(target, ctx),
            _ => EventResult::Ignored,
        }
    }

    fn on_timer(&self, task: &TimerTask, ctx: &mut BehaviorContext) -> EventResult {
        match task.action {
            "show" => show(&task.target, ctx),
            "hide" => hide(&task.target, ctx),
            _ => EventResult::Ignored,
        }
    }
}

/// Turn the trigger's `title` into a body element next to it.
fn enhance(trigger: &str, ctx: &mut BehaviorContext) {
    if body_id_of(trigger, ctx).is_some() {
        return;
    }
    let Some(trigger_el) = ctx.doc.get_mut(trigger) else {
        return;
    };
    let Some(title) = trigger_el.remove_attr("title") else {
        log::warn!("[tooltip] trigger `{trigger}` has no title attribute");
        return;
    };
    let body_id = format!("{trigger}__body");
    trigger_el.set_attr("aria-describedby", body_id.clone());

    let body = Element::span(title)
        .id(body_id)
        .class(CLASS_BODY)
        .attr("role", "tooltip")
        .hidden();
    let Some(parent) = ctx.doc.parent(trigger).map(|el| el.id.clone()) else {
        return;
    };
    ctx.doc.append_child(&parent, body);
}

fn schedule_show(trigger: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(body) = body_id_of(trigger, ctx) else {
        return EventResult::Ignored;
    };
    cancel_timer(&body, HIDE_TIMER_ATTR, ctx);

    let already_visible = ctx
        .doc
        .get(&body)
        .is_some_and(|el| el.has_class(CLASS_VISIBLE));
    let already_pending = ctx
        .doc
        .get(&body)
        .is_some_and(|el| el.has_attr(SHOW_TIMER_ATTR));
    if already_visible || already_pending {
        return EventResult::Consumed;
    }

    let id = ctx.schedule(
        std::time::Duration::from_millis(SHOW_DELAY_MS),
        TimerTask {
            behavior: NAME,
            action: "show",
            target: trigger.to_string(),
        },
    );
    if let Some(el) = ctx.doc.get_mut(&body) {
        el.set_attr(SHOW_TIMER_ATTR, id.to_string());
    }
    EventResult::Consumed
}

fn schedule_hide(trigger: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(body) = body_id_of(trigger, ctx) else {
        return EventResult::Ignored;
    };
    cancel_timer(&body, SHOW_TIMER_ATTR, ctx);

    let visible = ctx
        .doc
        .get(&body)
        .is_some_and(|el| el.has_class(CLASS_VISIBLE));
    let already_pending = ctx
        .doc
        .get(&body)
        .is_some_and(|el| el.has_attr(HIDE_TIMER_ATTR));
    if !visible || already_pending {
        return EventResult::Consumed;
    }

    let id = ctx.schedule(
        std::time::Duration::from_millis(HIDE_DELAY_MS),
        TimerTask {
            behavior: NAME,
            action: "hide",
            target: trigger.to_string(),
        },
    );
    if let Some(el) = ctx.doc.get_mut(&body) {
        el.set_attr(HIDE_TIMER_ATTR, id.to_string());
    }
    EventResult::Consumed
}

fn show(trigger: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(body) = body_id_of(trigger, ctx) else {
        return EventResult::Ignored;
    };
    if let Some(el) = ctx.doc.get_mut(&body) {
        el.remove_attr(SHOW_TIMER_ATTR);
    }

    let Some(anchor) = ctx.layout.get(trigger).copied() else {
        log::warn!("[tooltip] no layout rectangle for trigger `{trigger}`");
        return EventResult::Ignored;
    };
    let preferred = ctx
        .doc
        .get(trigger)
        .and_then(|el| el.get_attr(POSITION_ATTR))
        .map(Side::parse)
        .unwrap_or_default();
    let body_text = ctx
        .doc
        .get(&body)
        .map(|el| el.text_content().to_string())
        .unwrap_or_default();
    let width = paperdom::display_width(&body_text).saturating_add(2);

    let (side, rect) = position::place(&anchor, width, 1, ctx.viewport, preferred);

    if let Some(el) = ctx.doc.get_mut(&body) {
        el.set_hidden(false);
        for other in Side::ALL {
            el.remove_class(other.body_class());
        }
        el.add_class(CLASS_SET);
        el.add_class(side.body_class());
        el.add_class(CLASS_VISIBLE);
        el.set_attr("data-left", rect.x.to_string());
        el.set_attr("data-top", rect.y.to_string());
    }

    ctx.push_event(
        trigger,
        EventDetail::TooltipShow {
            position: side.as_str().to_string(),
        },
    );
    EventResult::Consumed
}

fn hide(trigger: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(body) = body_id_of(trigger, ctx) else {
        return EventResult::Ignored;
    };
    if let Some(el) = ctx.doc.get_mut(&body) {
        el.remove_attr(HIDE_TIMER_ATTR);
        el.remove_class(CLASS_VISIBLE);
    }
    ctx.push_event(trigger, EventDetail::TooltipHide);
    EventResult::Consumed
}

fn body_id_of(trigger: &str, ctx: &BehaviorContext) -> Option<String> {
    ctx.doc
        .get(trigger)?
        .get_attr("aria-describedby")
        .map(str::to_string)
        .filter(|id| ctx.doc.contains(id))
}

fn cancel_timer(body: &str, attr: &str, ctx: &mut BehaviorContext) {
    let pending = ctx
        .doc
        .get(body)
        .and_then(|el| el.get_attr(attr))
        .and_then(|value| value.parse::<TimerId>().ok());
    if let Some(id) = pending {
        ctx.cancel_timer(id);
    }
    if let Some(el) = ctx.doc.get_mut(body) {
        el.remove_attr(attr);
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(Tooltip)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
