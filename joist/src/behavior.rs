//! The event delegation core.
//!
//! Each behavior declares a static table of *parts*: the kinds of interactive
//! elements it owns and how to find them. At install time the runtime queries
//! the tree once per selector and tags every match with `data-part`, so event
//! routing is an attribute lookup along the target's ancestor chain instead
//! of re-matching selectors per event.

use paperdom::{Content, Element, Event};

use crate::context::BehaviorContext;
use crate::events::EventResult;

/// Attribute carrying the part kinds an element was tagged with.
/// Space-separated, because independent behaviors may claim one element
/// (a time picker root is also a combo box root).
pub const PART_ATTR: &str = "data-part";

/// How a part's elements are found at install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying a class.
    Class(&'static str),
    /// Elements carrying an attribute, any value.
    Attr(&'static str),
    /// Elements with a tag name and an attribute.
    TagAttr(&'static str, &'static str),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Class(name) => element.has_class(name),
            Selector::Attr(name) => element.has_attr(name),
            Selector::TagAttr(tag, attr) => element.tag == *tag && element.has_attr(attr),
        }
    }
}

/// One entry in a behavior's static part table.
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    /// Globally unique part kind, e.g. `accordion-button`.
    pub kind: &'static str,
    pub selector: Selector,
}

impl PartSpec {
    pub const fn new(kind: &'static str, selector: Selector) -> Self {
        Self { kind, selector }
    }
}

/// A timer owned by a behavior, routed back to it when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerTask {
    /// Name of the behavior that scheduled the timer.
    pub behavior: &'static str,
    /// Behavior-defined action, e.g. `show`.
    pub action: &'static str,
    /// Element the action applies to.
    pub target: String,
}

/// One widget's interaction logic.
///
/// Behaviors are stateless: widget state lives in the document (attributes,
/// classes, generated children), read into an explicit state struct at the
/// top of a handler and projected back before it returns. Handlers must not
/// mutate anything when a precondition fails; they warn and return
/// `Ignored` so sibling widgets keep working.
pub trait Behavior {
    fn name(&self) -> &'static str;

    /// The static part table resolved at install time.
    fn parts(&self) -> &'static [PartSpec];

    /// Install ordering; lower runs first. The time picker must enhance its
    /// markup before the combo box tags it.
    fn order(&self) -> i8 {
        0
    }

    /// Whether this behavior receives events that no part consumed
    /// (document-scoped listeners: modal escape/trap, scroll spy).
    fn document_level(&self) -> bool {
        false
    }

    /// One-time setup after parts are tagged: reconcile declarative state,
    /// generate missing structural elements.
    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        let _ = (root, ctx);
    }

    /// Extra cleanup on uninstall. Part tags and the install marker are
    /// removed by the runtime.
    fn teardown(&self, root: &str, ctx: &mut BehaviorContext) {
        let _ = (root, ctx);
    }

    /// Handle an event routed to one of this behavior's parts.
    /// `target` is the tagged element the route matched, not necessarily the
    /// innermost event target.
    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult;

    /// Handle an event at document scope (only called when `document_level`).
    fn on_document_event(&self, event: &Event, ctx: &mut BehaviorContext) -> EventResult {
        let _ = (event, ctx);
        EventResult::Ignored
    }

    /// Handle a timer scheduled by this behavior.
    fn on_timer(&self, task: &TimerTask, ctx: &mut BehaviorContext) -> EventResult {
        let _ = (task, ctx);
        EventResult::Ignored
    }
}

/// Append a part kind to an element's tag attribute.
pub fn add_part(element: &mut Element, kind: &str) {
    match element.get_attr(PART_ATTR) {
        None => element.set_attr(PART_ATTR, kind),
        Some(existing) => {
            if !existing.split_whitespace().any(|k| k == kind) {
                let combined = format!("{existing} {kind}");
                element.set_attr(PART_ATTR, combined);
            }
        }
    }
}

/// Remove a part kind from an element's tag attribute.
pub fn remove_part(element: &mut Element, kind: &str) {
    let Some(existing) = element.get_attr(PART_ATTR) else {
        return;
    };
    let remaining: Vec<&str> = existing
        .split_whitespace()
        .filter(|k| *k != kind)
        .collect();
    if remaining.is_empty() {
        element.remove_attr(PART_ATTR);
    } else {
        let joined = remaining.join(" ");
        element.set_attr(PART_ATTR, joined);
    }
}

/// Whether an element is tagged with the given part kind.
pub fn has_part(element: &Element, kind: &str) -> bool {
    element
        .get_attr(PART_ATTR)
        .is_some_and(|tags| tags.split_whitespace().any(|k| k == kind))
}

/// Part kinds an element is tagged with.
pub fn part_kinds(element: &Element) -> Vec<String> {
    element
        .get_attr(PART_ATTR)
        .map(|tags| tags.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Visit every element in a subtree, in tree order.
pub fn for_each_element(element: &Element, visit: &mut impl FnMut(&Element)) {
    visit(element);
    if let Content::Children(children) = &element.content {
        for child in children {
            for_each_element(child, visit);
        }
    }
}

/// Collect IDs of elements in a subtree matching a predicate, in tree order.
pub fn collect_matching(element: &Element, matches: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    for_each_element(element, &mut |el| {
        if matches(el) {
            out.push(el.id.clone());
        }
    });
    out
}
