use unicode_width::UnicodeWidthStr;

/// Display width of a string in cells.
///
/// Used for intrinsic sizing of generated elements (tooltip bodies) when no
/// host-supplied layout rectangle exists for them yet.
pub fn display_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}
