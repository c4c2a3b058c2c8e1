mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of the element with the given ID.
/// Returns `None` for the root itself or an unknown ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &root.content {
        for child in children {
            if child.id == id {
                return Some(root);
            }
            if let Some(found) = find_parent(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from the element with the given ID up to and including the root.
/// The first entry is the element itself. Empty when the ID is unknown.
pub fn ancestor_chain(root: &Element, id: &str) -> Vec<String> {
    let mut chain = Vec::new();
    collect_chain(root, id, &mut chain);
    chain
}

fn collect_chain(element: &Element, id: &str, chain: &mut Vec<String>) -> bool {
    if element.id == id {
        chain.push(element.id.clone());
        return true;
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_chain(child, id, chain) {
                chain.push(element.id.clone());
                return true;
            }
        }
    }
    false
}
