use crate::element::{ancestor_chain, find_element, find_element_mut, find_parent, Content, Element};

/// An owned element tree plus the focus cursor.
///
/// The document is the only state store for widget behaviors: handlers read
/// attributes, mutate them, and the mutation *is* the state transition.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    active: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root, active: None }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: &str) -> Option<&Element> {
        find_parent(&self.root, id)
    }

    /// IDs from `id` up to and including the root; empty for unknown IDs.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        ancestor_chain(&self.root, id)
    }

    /// Whether `inner` is `outer` itself or a descendant of it.
    pub fn is_within(&self, inner: &str, outer: &str) -> bool {
        self.ancestors(inner).iter().any(|a| a == outer)
    }

    /// Replace the children of the element with the given ID.
    /// Clears focus when the focused element is discarded by the swap.
    pub fn replace_children(&mut self, id: &str, children: Vec<Element>) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.content = Content::Children(children);
        if let Some(active) = self.active.clone() {
            if !self.contains(&active) {
                self.active = None;
            }
        }
        true
    }

    pub fn append_child(&mut self, id: &str, child: Element) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.child_elements_mut().push(child);
                true
            }
            None => false,
        }
    }

    /// Detach the element with the given ID from its parent.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let parent_id = self.parent(id)?.id.clone();
        let parent = self.get_mut(&parent_id)?;
        let children = parent.child_elements_mut();
        let index = children.iter().position(|c| c.id == id)?;
        let removed = children.remove(index);
        if let Some(active) = self.active.clone() {
            if !self.contains(&active) {
                self.active = None;
            }
        }
        Some(removed)
    }

    /// Whether the element and all of its ancestors are un-hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        let chain = self.ancestors(id);
        if chain.is_empty() {
            return false;
        }
        chain
            .iter()
            .all(|ancestor| self.get(ancestor).is_some_and(|el| !el.is_hidden()))
    }

    /// Whether the element can currently take focus.
    pub fn is_tabbable(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|el| el.focusable && !el.disabled)
            && self.is_visible(id)
    }

    pub fn active_element(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Move focus to the element. Only tabbable elements accept focus;
    /// returns false (and leaves focus alone) otherwise.
    pub fn focus(&mut self, id: &str) -> bool {
        if !self.is_tabbable(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Clear focus, returning the previously focused ID.
    pub fn blur(&mut self) -> Option<String> {
        self.active.take()
    }
}
