//! Tooltip placement.

use paperdom::{Rect, Viewport};

/// Placement side relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Unknown values fall back to the default side.
    pub fn parse(value: &str) -> Self {
        match value {
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => Side::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Side::Top => "usa-tooltip__body--top",
            Side::Bottom => "usa-tooltip__body--bottom",
            Side::Left => "usa-tooltip__body--left",
            Side::Right => "usa-tooltip__body--right",
        }
    }
}

/// Choose a side and a rectangle for the body. The preferred side wins when
/// it fits; otherwise the opposite side is tried; when neither fits, the
/// preferred side is kept and clamped into the viewport.
pub(super) fn place(
    anchor: &Rect,
    width: u16,
    height: u16,
    viewport: &Viewport,
    preferred: Side,
) -> (Side, Rect) {
    if let Some(rect) = candidate(preferred, anchor, width, height, viewport) {
        return (preferred, rect);
    }
    let flipped = preferred.opposite();
    if let Some(rect) = candidate(flipped, anchor, width, height, viewport) {
        return (flipped, rect);
    }
    (preferred, clamped(preferred, anchor, width, height, viewport))
}

fn candidate(
    side: Side,
    anchor: &Rect,
    width: u16,
    height: u16,
    viewport: &Viewport,
) -> Option<Rect> {
    let rect = match side {
        Side::Top => {
            let y = anchor.y.checked_sub(height + 1)?;
            Rect::new(centered_x(anchor, width), y, width, height)
        }
        Side::Bottom => Rect::new(centered_x(anchor, width), anchor.bottom() + 1, width, height),
        Side::Left => {
            let x = anchor.x.checked_sub(width + 1)?;
            Rect::new(x, centered_y(anchor, height), width, height)
        }
        Side::Right => Rect::new(anchor.right() + 1, centered_y(anchor, height), width, height),
    };
    viewport.fits(&rect).then_some(rect)
}

fn clamped(side: Side, anchor: &Rect, width: u16, height: u16, viewport: &Viewport) -> Rect {
    let x = centered_x(anchor, width).min(viewport.width.saturating_sub(width));
    let y = match side {
        Side::Top => anchor.y.saturating_sub(height + 1).max(viewport.scroll_y),
        _ => anchor.bottom() + 1,
    };
    Rect::new(x, y, width, height)
}

fn centered_x(anchor: &Rect, width: u16) -> u16 {
    let (cx, _) = anchor.center();
    cx.saturating_sub(width / 2)
}

fn centered_y(anchor: &Rect, height: u16) -> u16 {
    let (_, cy) = anchor.center();
    cy.saturating_sub(height / 2)
}
