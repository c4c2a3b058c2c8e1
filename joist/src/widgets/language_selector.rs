//! Language selector behavior: submenu toggle plus document language switch.

use paperdom::{Event, Key};

use crate::aria;
use crate::behavior::{collect_matching, Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "language-selector";

/// Part kinds.
pub const ROOT: &str = "language-selector";
pub const BUTTON: &str = "language-button";
pub const LINK: &str = "language-link";

pub const CLASS_ROOT: &str = "usa-language-container";
pub const CLASS_BUTTON: &str = "usa-language__link";
pub const CLASS_SUBMENU: &str = "usa-language__submenu";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(BUTTON, Selector::Class(CLASS_BUTTON)),
    PartSpec::new(LINK, Selector::Attr("hreflang")),
];

#[derive(Debug, Default)]
pub struct LanguageSelector;

impl Behavior for LanguageSelector {
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
            BUTTON => on_button_activate(target, ctx),
            LINK => on_link_activate(target, ctx),
            _ => EventResult::Ignored,
        }
    }
}

fn on_button_activate(button: &str, ctx: &mut BehaviorContext) -> EventResult {
    let submenu = match aria::resolve_controls(ctx.doc, button) {
        Ok(submenu) => submenu,
        Err(error) => {
            aria::warn_defect(NAME, &error);
            return EventResult::Ignored;
        }
    };
    let expanded = !aria::is_expanded(ctx.doc, button);
    aria::apply_expanded(ctx.doc, button, &submenu, expanded);
    EventResult::Consumed
}

fn on_link_activate(link: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(lang) = ctx
        .doc
        .get(link)
        .and_then(|el| el.get_attr("hreflang"))
        .map(str::to_string)
    else {
        return EventResult::Ignored;
    };

    ctx.doc.root_mut().set_attr("lang", lang.clone());
    collapse_menu_of(link, ctx);

    let source = ctx
        .widget_root(link, ROOT)
        .unwrap_or_else(|| link.to_string());
    ctx.push_event(source, EventDetail::LanguageSelect { lang });
    EventResult::Consumed
}

/// Collapse the submenu the link lives in, and reset its toggle button.
fn collapse_menu_of(link: &str, ctx: &mut BehaviorContext) {
    let submenu = ctx
        .doc
        .ancestors(link)
        .into_iter()
        .find(|id| ctx.doc.get(id).is_some_and(|el| el.has_class(CLASS_SUBMENU)));
    let Some(submenu) = submenu else {
        return;
    };

    let button = collect_matching(ctx.doc.root(), |el| {
        el.has_class(CLASS_BUTTON) && el.get_attr("aria-controls") == Some(submenu.as_str())
    })
    .into_iter()
    .next();
    if let Some(button) = button {
        aria::apply_expanded(ctx.doc, &button, &submenu, false);
    } else if let Some(el) = ctx.doc.get_mut(&submenu) {
        el.set_hidden(true);
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(LanguageSelector)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
