//! In-page navigation behavior: generated section nav plus scroll spy.
//!
//! The nav list is generated from the content region's headings at init.
//! Scroll events move an observation line down the document; the last heading
//! at or above it is the current section, projected as the `usa-current`
//! class on exactly one link.

mod state;

pub use state::{current_section, sections, Section};

use paperdom::Event;

use crate::behavior::{collect_matching, has_part, Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::{EventDetail, EventResult};
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "in-page-nav";

/// Part kinds.
pub const ROOT: &str = "in-page-nav";
pub const LINK: &str = "in-page-nav-link";

pub const CLASS_ROOT: &str = "usa-in-page-nav";
pub const CLASS_LIST: &str = "usa-in-page-nav__list";
pub const CLASS_ITEM: &str = "usa-in-page-nav__item";
pub const CLASS_LINK: &str = "usa-in-page-nav__link";
pub const CLASS_CURRENT: &str = "usa-current";

/// ID of the observed content region.
pub const CONTENT_ATTR: &str = "data-content";
/// Space-separated heading tags to index, `h2 h3` by default.
pub const HEADINGS_ATTR: &str = "data-heading-elements";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(LINK, Selector::Class(CLASS_LINK)),
];

#[derive(Debug, Default)]
pub struct InPageNav;

impl Behavior for InPageNav {
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
        let navs = match ctx.doc.get(root) {
            Some(el) => collect_matching(el, |el| has_part(el, ROOT)),
            None => return,
        };
        for nav in navs {
            state::build_nav(&nav, ctx);
        }
    }

    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult {
        if kind != LINK || !matches!(event, Event::Click { .. }) {
            return EventResult::Ignored;
        }
        on_link_click(target, ctx)
    }

    fn on_document_event(&self, event: &Event, ctx: &mut BehaviorContext) -> EventResult {
        if !matches!(event, Event::Scroll { .. }) {
            return EventResult::Ignored;
        }
        let navs = collect_matching(ctx.doc.root(), |el| has_part(el, ROOT));
        for nav in navs {
            update_current(&nav, ctx);
        }
        // Scrolling is never consumed; every nav on the page gets to react.
        EventResult::Ignored
    }
}

fn on_link_click(link: &str, ctx: &mut BehaviorContext) -> EventResult {
    let Some(nav) = ctx.widget_root(link, ROOT) else {
        return EventResult::Ignored;
    };
    let Some(heading) = ctx
        .doc
        .get(link)
        .and_then(|el| el.get_attr("data-target"))
        .map(str::to_string)
    else {
        return EventResult::Ignored;
    };
    let Some(rect) = ctx.layout.get(&heading).copied() else {
        log::warn!("[in-page-nav] no layout rectangle for heading `{heading}`");
        return EventResult::Ignored;
    };

    ctx.viewport.scroll_to(rect.y);
    mark_current(&nav, link, ctx);
    ctx.push_event(nav, EventDetail::InPageNavChange { section: heading });
    EventResult::Consumed
}

fn update_current(nav: &str, ctx: &mut BehaviorContext) {
    let sections = sections(ctx.doc, nav);
    let Some(active) = current_section(&sections, ctx.layout, ctx.viewport) else {
        return;
    };
    let was_current = ctx
        .doc
        .get(&active.link)
        .is_some_and(|el| el.has_class(CLASS_CURRENT));
    if was_current {
        return;
    }
    let link = active.link.clone();
    let heading = active.heading.clone();
    mark_current(nav, &link, ctx);
    ctx.push_event(
        nav.to_string(),
        EventDetail::InPageNavChange { section: heading },
    );
}

/// Exactly one link carries `usa-current`.
fn mark_current(nav: &str, link: &str, ctx: &mut BehaviorContext) {
    let links = match ctx.doc.get(nav) {
        Some(el) => collect_matching(el, |el| has_part(el, LINK)),
        None => return,
    };
    for other in links {
        if let Some(el) = ctx.doc.get_mut(&other) {
            el.toggle_class(CLASS_CURRENT, other == link);
        }
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(InPageNav)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
