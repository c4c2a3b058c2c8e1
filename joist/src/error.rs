//! Error types for behavior configuration defects.
//!
//! A thrown error inside a delegated handler would abort sibling widgets, so
//! these never cross the dispatch boundary: resolution helpers return
//! `Result`, and the dispatch layer downgrades failures to a logged warning
//! plus a no-op. Broken markup degrades one widget to inert HTML, nothing
//! more.

/// Configuration defects detected while resolving widget markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A trigger lacks the `aria-controls` link to its target.
    #[error("`{trigger}` has no aria-controls attribute")]
    MissingControls { trigger: String },

    /// A trigger's `aria-controls` points at a nonexistent element.
    #[error("`{trigger}` controls `{controls}`, which does not exist")]
    MissingTarget { trigger: String, controls: String },

    /// A widget root lacks a structural descendant the behavior needs.
    #[error("widget `{widget}` has no `{part}` descendant")]
    MissingPart { widget: String, part: &'static str },

    /// A second modal tried to open while one holds the document.
    #[error("modal `{requested}` cannot open while `{open}` is open")]
    ModalAlreadyOpen { requested: String, open: String },

    /// An event referenced an element that is not in the document.
    #[error("unknown element `{0}`")]
    UnknownElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
