mod rect;

pub use rect::Rect;

use std::collections::HashMap;

/// Screen rectangles for elements, keyed by element ID.
///
/// Layout is an input supplied by the host; the library never computes it.
/// Behaviors that need geometry (tooltip placement, scroll spy) read from
/// here and treat a missing entry as "not rendered".
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rects: HashMap<String, Rect>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.rects.remove(id)
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// The visible window over the document, with a vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll_y: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
        }
    }

    /// Scroll so the given document-space Y coordinate sits at the top.
    pub fn scroll_to(&mut self, y: u16) {
        self.scroll_y = y;
    }

    /// The document-space rectangle currently visible.
    pub fn visible(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.width, self.height)
    }

    /// Whether a document-space rectangle fits entirely inside the viewport
    /// without scrolling (used for tooltip overflow checks).
    pub fn fits(&self, rect: &Rect) -> bool {
        rect.right() <= self.width && rect.bottom() <= self.scroll_y.saturating_add(self.height)
            && rect.y >= self.scroll_y
    }
}
