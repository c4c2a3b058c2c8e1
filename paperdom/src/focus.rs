use crate::element::{Content, Element};

/// Collect the IDs of all tabbable elements under `element`, in tree order.
///
/// An element is tabbable when it is focusable, not disabled, and not inside
/// a `hidden` subtree. The tabbable set is recomputed on every call because
/// handlers may have shown, hidden, or rebuilt parts of the tree since the
/// last keypress.
pub fn collect_tabbable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_tabbable_recursive(element, &mut result);
    result
}

fn collect_tabbable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.is_hidden() {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_tabbable_recursive(child, result);
        }
    }
}

/// First tabbable element under `element`, in tree order.
pub fn first_tabbable(element: &Element) -> Option<String> {
    collect_tabbable(element).into_iter().next()
}

/// Last tabbable element under `element`, in tree order.
pub fn last_tabbable(element: &Element) -> Option<String> {
    collect_tabbable(element).into_iter().last()
}

/// The tabbable element after `current` within `element`, wrapping at the end.
/// With no current element, the first tabbable wins.
pub fn next_tabbable(element: &Element, current: Option<&str>) -> Option<String> {
    let tabbable = collect_tabbable(element);
    if tabbable.is_empty() {
        return None;
    }

    match current {
        None => Some(tabbable[0].clone()),
        Some(current) => {
            let idx = tabbable.iter().position(|id| id == current);
            match idx {
                Some(i) => Some(tabbable[(i + 1) % tabbable.len()].clone()),
                None => Some(tabbable[0].clone()),
            }
        }
    }
}

/// The tabbable element before `current` within `element`, wrapping at the
/// start. With no current element, the last tabbable wins.
pub fn prev_tabbable(element: &Element, current: Option<&str>) -> Option<String> {
    let tabbable = collect_tabbable(element);
    if tabbable.is_empty() {
        return None;
    }

    match current {
        None => Some(tabbable[tabbable.len() - 1].clone()),
        Some(current) => {
            let idx = tabbable.iter().position(|id| id == current);
            match idx {
                Some(0) => Some(tabbable[tabbable.len() - 1].clone()),
                Some(i) => Some(tabbable[i - 1].clone()),
                None => Some(tabbable[tabbable.len() - 1].clone()),
            }
        }
    }
}
