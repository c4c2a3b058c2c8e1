//! Modal state projection.

use paperdom::Document;

use crate::behavior::{collect_matching, has_part};
use crate::error::{Error, Result};

/// Resolved structure of one modal instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    /// The wrapper that triggers point at via `aria-controls`.
    pub wrapper: String,
    /// The dialog element inside the wrapper.
    pub modal: String,
    /// When set, escape and overlay clicks do not close the modal.
    pub force_action: bool,
}

impl ModalState {
    /// Resolve a wrapper ID to the full modal structure.
    pub fn resolve(doc: &Document, wrapper: &str) -> Result<Self> {
        let wrapper_el = doc
            .get(wrapper)
            .ok_or_else(|| Error::UnknownElement(wrapper.to_string()))?;

        let modal = collect_matching(wrapper_el, |el| has_part(el, super::ROOT))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: wrapper.to_string(),
                part: super::ROOT,
            })?;

        let force_action = doc
            .get(&modal)
            .is_some_and(|el| el.has_attr(super::FORCE_ACTION_ATTR));

        Ok(Self {
            wrapper: wrapper.to_string(),
            modal,
            force_action,
        })
    }

    /// Resolve from any element inside the wrapper (closer, overlay).
    pub fn from_member(doc: &Document, member: &str) -> Result<Self> {
        let wrapper = doc
            .ancestors(member)
            .into_iter()
            .find(|id| doc.get(id).is_some_and(|el| has_part(el, super::WRAPPER)))
            .ok_or_else(|| Error::UnknownElement(member.to_string()))?;
        Self::resolve(doc, &wrapper)
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.get(&self.wrapper)
            .is_some_and(|el| el.has_class(super::CLASS_VISIBLE))
    }
}
