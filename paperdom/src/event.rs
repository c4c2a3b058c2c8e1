/// High-level input events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer press on an element.
    Click { target: String },
    /// Key press, targeted at the focused element when there is one.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Text entered into an input element; `value` is the full new value.
    Input { target: String, value: String },
    /// Pointer moved onto an element.
    PointerEnter { target: String },
    /// Pointer left an element.
    PointerLeave { target: String },
    /// Element gained focus.
    FocusIn { target: String },
    /// Element lost focus. `related` is the element receiving focus, if any.
    FocusOut {
        target: String,
        related: Option<String>,
    },
    /// Vertical document scroll to the given offset.
    Scroll { offset: u16 },
}

impl Event {
    /// The target element ID this event is anchored to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target }
            | Event::Input { target, .. }
            | Event::PointerEnter { target }
            | Event::PointerLeave { target }
            | Event::FocusIn { target }
            | Event::FocusOut { target, .. } => Some(target),
            Event::Key { target, .. } => target.as_deref(),
            Event::Scroll { .. } => None,
        }
    }
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}
