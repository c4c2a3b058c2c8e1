//! Widget events emitted toward the host application.
//!
//! Every widget announces its state transitions with a named event carrying a
//! serializable detail payload, the way the wrapped custom elements dispatch
//! `CustomEvent`s. Hosts drain them from the runtime after dispatching input.

use serde::Serialize;

use crate::widgets::table::SortDirection;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, keep bubbling to outer parts and defaults.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// An emitted widget event: which widget instance, and what happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetEvent {
    /// ID of the widget root that emitted the event.
    pub source: String,
    pub detail: EventDetail,
}

impl WidgetEvent {
    pub fn new(source: impl Into<String>, detail: EventDetail) -> Self {
        Self {
            source: source.into(),
            detail,
        }
    }

    /// The event name a host would listen for.
    pub fn name(&self) -> &'static str {
        self.detail.name()
    }
}

/// Detail payloads, one variant per widget event name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventDetail {
    AccordionChange {
        button: String,
        expanded: bool,
    },
    ModalOpen {
        opener: Option<String>,
    },
    ModalClose,
    DatePickerSelect {
        /// ISO `YYYY-MM-DD`.
        value: String,
    },
    ComboBoxChange {
        query: String,
        matches: usize,
    },
    ComboBoxSelect {
        value: String,
        label: String,
    },
    TooltipShow {
        position: String,
    },
    TooltipHide,
    TableSort {
        column: String,
        direction: Option<SortDirection>,
    },
    InPageNavChange {
        section: String,
    },
    BannerToggle {
        expanded: bool,
    },
    TimePickerSelect {
        value: String,
    },
    LanguageSelect {
        lang: String,
    },
}

impl EventDetail {
    pub fn name(&self) -> &'static str {
        match self {
            EventDetail::AccordionChange { .. } => "accordion-change",
            EventDetail::ModalOpen { .. } => "modal-open",
            EventDetail::ModalClose => "modal-close",
            EventDetail::DatePickerSelect { .. } => "date-picker-select",
            EventDetail::ComboBoxChange { .. } => "combo-box-change",
            EventDetail::ComboBoxSelect { .. } => "combo-box-select",
            EventDetail::TooltipShow { .. } => "tooltip-show",
            EventDetail::TooltipHide => "tooltip-hide",
            EventDetail::TableSort { .. } => "table-sort",
            EventDetail::InPageNavChange { .. } => "in-page-nav-change",
            EventDetail::BannerToggle { .. } => "banner-toggle",
            EventDetail::TimePickerSelect { .. } => "time-picker-select",
            EventDetail::LanguageSelect { .. } => "language-select",
        }
    }
}
