//! Sortable table behavior: per-column sort cycling with comparator
//! selection and original-order restoration.

mod events;
mod sort;

pub use sort::{select_comparator, Comparator, SortDirection};

use paperdom::{Event, Key};

use crate::behavior::{Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;

pub const NAME: &str = "table";

/// Part kinds.
pub const ROOT: &str = "table";
pub const HEADER: &str = "table-header";

pub const CLASS_ROOT: &str = "usa-table";
pub const CLASS_ANNOUNCEMENT: &str = "usa-table__announcement-region";

pub const SORTABLE_ATTR: &str = "data-sortable";
/// Declares a column's cells as dates for comparator selection.
pub const TYPE_ATTR: &str = "data-type";
/// Per-cell override of the sort key.
pub const SORT_VALUE_ATTR: &str = "data-sort-value";
/// Row position stamped at init; restoring the unsorted state sorts by it.
pub const ORIGINAL_ORDER_ATTR: &str = "data-sort-original-order";

const PARTS: &[PartSpec] = &[
    PartSpec::new(ROOT, Selector::Class(CLASS_ROOT)),
    PartSpec::new(HEADER, Selector::TagAttr("th", SORTABLE_ATTR)),
];

#[derive(Debug, Default)]
pub struct Table;

impl Behavior for Table {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        events::prepare_all(root, ctx);
    }

    fn handle(
        &self,
        kind: &str,
        event: &Event,
        target: &str,
        ctx: &mut BehaviorContext,
    ) -> EventResult {
        if kind != HEADER {
            return EventResult::Ignored;
        }
        match event {
            Event::Click { .. } => events::on_header_activate(target, ctx),
            Event::Key { key, modifiers, .. }
                if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) =>
            {
                events::on_header_activate(target, ctx)
            }
            _ => EventResult::Ignored,
        }
    }
}

fn build() -> Box<dyn Behavior> {
    Box::new(Table)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}
