//! Nav generation and scroll-spy math.

use paperdom::{Document, Element, Layout, Viewport};

use crate::aria;
use crate::behavior::{collect_matching, has_part, PART_ATTR};
use crate::context::BehaviorContext;
use crate::error::Error;

/// One heading/link pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub link: String,
}

/// Generate the nav list from the content region's headings.
pub(super) fn build_nav(nav: &str, ctx: &mut BehaviorContext) {
    let Some(nav_el) = ctx.doc.get(nav) else {
        return;
    };
    let Some(content) = nav_el.get_attr(super::CONTENT_ATTR).map(str::to_string) else {
        aria::warn_defect(
            super::NAME,
            &Error::MissingControls {
                trigger: nav.to_string(),
            },
        );
        return;
    };
    let Some(content_el) = ctx.doc.get(&content) else {
        aria::warn_defect(
            super::NAME,
            &Error::MissingTarget {
                trigger: nav.to_string(),
                controls: content,
            },
        );
        return;
    };

    let tags: Vec<String> = ctx
        .doc
        .get(nav)
        .and_then(|el| el.get_attr(super::HEADINGS_ATTR))
        .unwrap_or("h2 h3")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let headings = collect_matching(content_el, |el| tags.iter().any(|t| *t == el.tag));

    let mut items = Vec::new();
    for (index, heading) in headings.iter().enumerate() {
        let label = ctx
            .doc
            .get(heading)
            .map(|el| el.text_content().to_string())
            .unwrap_or_default();
        let mut link = Element::link(label, format!("#{heading}"))
            .id(format!("{nav}__link-{index}"))
            .class(super::CLASS_LINK)
            .attr(PART_ATTR, super::LINK)
            .attr("data-target", heading.clone());
        if index == 0 {
            link = link.class(super::CLASS_CURRENT);
        }
        items.push(
            Element::item()
                .id(format!("{nav}__item-{index}"))
                .class(super::CLASS_ITEM)
                .child(link),
        );
    }

    let list = Element::list()
        .id(format!("{nav}__list"))
        .class(super::CLASS_LIST)
        .children(items);
    ctx.doc.replace_children(nav, vec![list]);
}

/// Heading/link pairs in document order, re-derived from the generated list.
pub fn sections(doc: &Document, nav: &str) -> Vec<Section> {
    let Some(nav_el) = doc.get(nav) else {
        return Vec::new();
    };
    collect_matching(nav_el, |el| has_part(el, super::LINK))
        .into_iter()
        .filter_map(|link| {
            let heading = doc.get(&link)?.get_attr("data-target")?.to_string();
            Some(Section { heading, link })
        })
        .collect()
}

/// The section the viewport is currently inside: the last heading at or
/// above the observation line (viewport top plus one sixth of its height).
/// Before the first heading, the first section is current.
pub fn current_section<'a>(
    sections: &'a [Section],
    layout: &Layout,
    viewport: &Viewport,
) -> Option<&'a Section> {
    let line = viewport.scroll_y.saturating_add(viewport.height / 6);
    let mut current = None;
    for section in sections {
        let Some(rect) = layout.get(&section.heading) else {
            continue;
        };
        if rect.y <= line {
            current = Some(section);
        }
    }
    current.or_else(|| sections.first())
}
