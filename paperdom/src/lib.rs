pub mod attrs;
pub mod clock;
pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod text;

pub use attrs::FromAttrs;
pub use clock::{TimerId, Timers};
pub use document::Document;
pub use element::{find_element, find_element_mut, find_parent, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_tabbable, first_tabbable, last_tabbable, next_tabbable, prev_tabbable};
pub use geometry::{Layout, Rect, Viewport};
pub use text::display_width;
