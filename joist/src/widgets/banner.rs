//! Banner behavior: the "official website" disclosure toggle.

use paperdom::{Event, Key};

use crate::aria;
use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "banner";

/// Part kinds.
pub const ROOT: &str = "banner";
pub const BUTTON: &str = "banner-button";

pub const CLASS_ROOT: &str = "usa-banner";
pub const CLASS_BUTTON: &str = "usa-banner__button";
pub const CLASS_HEADER: &str = "usa-banner__header";
pub const CLASS_HEADER_EXPANDED: &str = "usa-banner__header--expanded";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(BUTTON, Selector::Class(CLASS_BUTTON)),
];

#[derive(Debug, Default)]
pub struct Banner;

impl Behavior for Banner {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
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
        on_button_activate(target, ctx)
    }
}

fn on_button_activate(button: &str, ctx: &mut BehaviorContext) -> EventResult {
    let content = match aria::resolve_controls(ctx.doc, button) {
        Ok(content) => content,
        Err(error) => {
            aria::warn_defect(NAME, &error);
            return EventResult::Ignored;
        }
    };

    let expanded = !aria::is_expanded(ctx.doc, button);
    aria::apply_expanded(ctx.doc, button, &content, expanded);

    // The header row mirrors the state with a class modifier.
    let header = ctx
        .doc
        .ancestors(button)
        .into_iter()
        .find(|id| ctx.doc.get(id).is_some_and(|el| el.has_class(CLASS_HEADER)));
    if let Some(header) = header {
        if let Some(el) = ctx.doc.get_mut(&header) {
            el.toggle_class(CLASS_HEADER_EXPANDED, expanded);
        }
    }

    let source = ctx
        .widget_root(button, ROOT)
        .unwrap_or_else(|| button.to_string());
    ctx.push_event(source, EventDetail::BannerToggle { expanded });
    EventResult::Consumed
}

fn build() -> Box<dyn Behavior> {
    Box::new(Banner)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
