//! Shared helpers for the trigger/target ARIA contract.
//!
//! A trigger's `aria-expanded` must always agree with its target's
//! visibility; these helpers write both sides in one step so no handler can
//! leave them disagreeing.

use paperdom::Document;

use crate::error::{Error, Result};

/// Resolve a trigger's `aria-controls` link to its target element ID.
pub fn resolve_controls(doc: &Document, trigger: &str) -> Result<String> {
    let el = doc
        .get(trigger)
        .ok_or_else(|| Error::UnknownElement(trigger.to_string()))?;
    let controls = el
        .get_attr("aria-controls")
        .ok_or_else(|| Error::MissingControls {
            trigger: trigger.to_string(),
        })?
        .to_string();
    if !doc.contains(&controls) {
        return Err(Error::MissingTarget {
            trigger: trigger.to_string(),
            controls,
        });
    }
    Ok(controls)
}

/// Whether a trigger currently reports `aria-expanded="true"`.
pub fn is_expanded(doc: &Document, trigger: &str) -> bool {
    doc.get(trigger)
        .and_then(|el| el.get_attr("aria-expanded"))
        == Some("true")
}

/// Set `aria-expanded` on the trigger and `hidden` on the target together.
pub fn apply_expanded(doc: &mut Document, trigger: &str, target: &str, expanded: bool) {
    if let Some(el) = doc.get_mut(trigger) {
        el.set_attr("aria-expanded", if expanded { "true" } else { "false" });
    }
    if let Some(el) = doc.get_mut(target) {
        el.set_hidden(!expanded);
    }
}

/// Log a configuration defect and carry on; one broken widget must not take
/// its siblings down.
pub fn warn_defect(widget: &str, error: &Error) {
    log::warn!("[{widget}] configuration defect: {error}");
}
