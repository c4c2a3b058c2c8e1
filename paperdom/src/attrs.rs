//! Typed access to `data-*` configuration attributes.
//!
//! Widget options are declared in markup as attributes on the widget root.
//! `FromAttrs` (usually derived via `#[derive(Options)]`) pulls them into a
//! plain struct once per operation.

use std::str::FromStr;

use crate::element::Element;

/// Build a value from an element's attributes.
pub trait FromAttrs: Sized {
    fn from_attrs(element: &Element) -> Self;
}

/// Boolean attribute: present counts as true unless the value is literally
/// `"false"`.
pub fn bool_attr(element: &Element, name: &str) -> bool {
    match element.get_attr(name) {
        Some(value) => value != "false",
        None => false,
    }
}

/// Attribute parsed via `FromStr`; `None` when absent or unparsable.
pub fn parse_attr<T: FromStr>(element: &Element, name: &str) -> Option<T> {
    element.get_attr(name).and_then(|value| value.parse().ok())
}

/// String attribute, `None` when absent.
pub fn string_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attr(name).map(str::to_string)
}
