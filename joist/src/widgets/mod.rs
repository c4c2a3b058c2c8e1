//! Widget behavior modules.
//!
//! Each module reproduces one interactive pattern: a static part table, an
//! explicit state struct derived from the widget's subtree, handlers that
//! mutate the tree, and a registration entry so `Runtime::init_all` picks the
//! behavior up.

pub mod accordion;
pub mod banner;
pub mod combo_box;
pub mod date_picker;
pub mod in_page_nav;
pub mod language_selector;
pub mod modal;
pub mod table;
pub mod time_picker;
pub mod tooltip;
