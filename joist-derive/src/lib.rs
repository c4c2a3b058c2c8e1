mod macros;

use proc_macro::TokenStream;

/// Derive `paperdom::FromAttrs` for a widget options struct.
///
/// Each field is read from a `data-*` attribute on the widget root. The
/// attribute name defaults to `data-` plus the kebab-cased field name and can
/// be overridden with `#[attr(name = "data-whatever")]`.
///
/// Field type handling:
/// - `bool`: attribute presence (a literal `"false"` value counts as unset)
/// - `Option<T>`: `None` when absent or unparsable
/// - `String`: the raw attribute value, empty when absent
/// - any other `T: FromStr + Default`: parsed, falling back to `T::default()`
#[proc_macro_derive(Options, attributes(attr))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    macros::options::expand(input.into()).into()
}
