//! Combo box state projection.

use paperdom::Document;

use crate::behavior::{collect_matching, has_part};
use crate::error::{Error, Result};

use super::filter::FilterMode;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

/// Resolved structure of one combo box instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboBoxState {
    pub root: String,
    pub input: String,
    pub list: String,
    pub select: String,
    pub status: Option<String>,
    pub committed: Option<String>,
    pub filter_mode: FilterMode,
}

impl ComboBoxState {
    pub fn read(doc: &Document, root: &str) -> Result<Self> {
        let root_el = doc
            .get(root)
            .ok_or_else(|| Error::UnknownElement(root.to_string()))?;

        let input = collect_matching(root_el, |el| has_part(el, super::INPUT))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: super::INPUT,
            })?;
        let select = collect_matching(root_el, |el| el.has_class(super::CLASS_SELECT))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: "select",
            })?;
        let list = collect_matching(root_el, |el| el.has_class(super::CLASS_LIST))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: super::LIST,
            })?;
        let status = collect_matching(root_el, |el| el.has_class(super::CLASS_STATUS))
            .into_iter()
            .next();

        let committed = root_el.get_attr(super::VALUE_ATTR).map(str::to_string);
        let filter_mode = match root_el.get_attr(super::FILTER_ATTR) {
            Some("fuzzy") => FilterMode::Fuzzy,
            _ => FilterMode::Substring,
        };

        Ok(Self {
            root: root.to_string(),
            input,
            list,
            select,
            status,
            committed,
            filter_mode,
        })
    }

    /// Re-read the option source from the document. The source list is never
    /// cached or mutated, so the same query always filters the same options.
    pub fn options(&self, doc: &Document) -> Vec<OptionItem> {
        let Some(select) = doc.get(&self.select) else {
            return Vec::new();
        };
        select
            .child_elements()
            .iter()
            .map(|el| {
                let label = el.text_content().to_string();
                let value = el
                    .get_attr("data-value")
                    .map(str::to_string)
                    .unwrap_or_else(|| label.clone());
                OptionItem { value, label }
            })
            .collect()
    }

    /// Label of the committed option, when one is committed.
    pub fn committed_label(&self, doc: &Document) -> Option<String> {
        let committed = self.committed.as_deref()?;
        self.options(doc)
            .into_iter()
            .find(|o| o.value == committed)
            .map(|o| o.label)
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.get(&self.list).is_some_and(|el| !el.is_hidden())
    }

    pub fn input_value(&self, doc: &Document) -> String {
        doc.get(&self.input)
            .and_then(|el| el.get_attr("value"))
            .unwrap_or("")
            .to_string()
    }

    /// Index of the active suggestion within the rendered list, derived from
    /// `aria-activedescendant`.
    pub fn active_index(&self, doc: &Document) -> Option<usize> {
        let descendant = doc.get(&self.input)?.get_attr("aria-activedescendant")?;
        descendant
            .rsplit_once('-')
            .and_then(|(_, index)| index.parse().ok())
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}--option-{index}", self.list)
    }
}
