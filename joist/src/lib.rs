pub mod aria;
pub mod behavior;
pub mod context;
pub mod error;
pub mod events;
pub mod registry;
pub mod runtime;
pub mod widgets;

pub use joist_derive::*;
pub use runtime::Runtime;

pub mod prelude {
    pub use crate::behavior::{Behavior, PartSpec, Selector, TimerTask};
    pub use crate::context::BehaviorContext;
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventDetail, EventResult, WidgetEvent};
    pub use crate::registry::{registered_behaviors, BehaviorRegistration};
    pub use crate::runtime::Runtime;
    pub use crate::widgets::table::SortDirection;

    pub use joist_derive::*;
    pub use paperdom::{Document, Element, Event, Key, Layout, Modifiers, Rect, Viewport};
}
