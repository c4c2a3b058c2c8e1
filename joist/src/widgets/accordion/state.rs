//! Accordion state projection.

use joist_derive::Options;
use paperdom::{Document, FromAttrs};

use crate::aria;
use crate::behavior::{collect_matching, has_part};

/// Root-level configuration attributes.
#[derive(Options, Debug, Default)]
pub struct AccordionOptions {
    /// Multi-open mode; single-open is the default.
    pub allow_multiple: bool,
}

/// One button/panel pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub button: String,
    pub panel: String,
    pub expanded: bool,
}

/// State of one accordion instance, derived from its subtree on every
/// interaction and projected back after the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    pub root: String,
    pub allow_multiple: bool,
    pub panels: Vec<PanelState>,
}

impl AccordionState {
    /// Read projection. Buttons with a broken panel link are warned about and
    /// left out, so the rest of the accordion keeps working.
    pub fn read(doc: &Document, root: &str) -> Self {
        let allow_multiple = doc
            .get(root)
            .map(AccordionOptions::from_attrs)
            .unwrap_or_default()
            .allow_multiple;

        let mut panels = Vec::new();
        if let Some(root_el) = doc.get(root) {
            for button in collect_matching(root_el, |el| has_part(el, super::BUTTON)) {
                match aria::resolve_controls(doc, &button) {
                    Ok(panel) => panels.push(PanelState {
                        expanded: aria::is_expanded(doc, &button),
                        button,
                        panel,
                    }),
                    Err(error) => aria::warn_defect(super::NAME, &error),
                }
            }
        }

        Self {
            root: root.to_string(),
            allow_multiple,
            panels,
        }
    }

    /// Toggle the panel owned by `button`; in single-open mode expanding one
    /// panel collapses the rest. Returns the new expanded state, or `None`
    /// when the button is not part of this accordion.
    pub fn toggle(&mut self, button: &str) -> Option<bool> {
        let idx = self.panels.iter().position(|p| p.button == button)?;
        let expanding = !self.panels[idx].expanded;
        if expanding && !self.allow_multiple {
            for panel in &mut self.panels {
                panel.expanded = false;
            }
        }
        self.panels[idx].expanded = expanding;
        Some(expanding)
    }

    /// Write projection. Collapsed panels are written first: in single-open
    /// mode the outgoing panel must close before the incoming one opens.
    pub fn apply(&self, doc: &mut Document) {
        for panel in self.panels.iter().filter(|p| !p.expanded) {
            aria::apply_expanded(doc, &panel.button, &panel.panel, false);
        }
        for panel in self.panels.iter().filter(|p| p.expanded) {
            aria::apply_expanded(doc, &panel.button, &panel.panel, true);
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.panels.iter().filter(|p| p.expanded).count()
    }
}
