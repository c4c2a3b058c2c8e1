use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Data, DeriveInput, Fields, LitStr, Type};

/// Derive macro for `paperdom::FromAttrs`.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Options)] requires named struct fields",
                )
                .to_compile_error();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input.ident, "#[derive(Options)] requires a struct")
                .to_compile_error();
        }
    };

    let mut initializers = Vec::new();
    for field in fields {
        let ident = field.ident.as_ref().expect("named field");
        let attr_name = match attribute_name(field) {
            Ok(name) => name,
            Err(e) => return e.to_compile_error(),
        };

        let reader = reader_for(&field.ty, &attr_name);
        initializers.push(quote! { #ident: #reader });
    }

    quote! {
        impl paperdom::FromAttrs for #name {
            fn from_attrs(element: &paperdom::Element) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    }
}

/// The `data-*` attribute a field reads from: explicit `#[attr(name = "…")]`
/// or `data-` plus the kebab-cased field name.
fn attribute_name(field: &syn::Field) -> syn::Result<String> {
    for attr in &field.attrs {
        if !attr.path().is_ident("attr") {
            continue;
        }
        let mut name = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"…\"`"))
            }
        })?;
        if let Some(name) = name {
            return Ok(name);
        }
    }

    let ident = field.ident.as_ref().expect("named field");
    Ok(format!("data-{}", ident.to_string().replace('_', "-")))
}

fn reader_for(ty: &Type, attr_name: &str) -> TokenStream {
    if is_plain(ty, "bool") {
        return quote! { paperdom::attrs::bool_attr(element, #attr_name) };
    }
    if let Some(inner) = option_inner(ty) {
        return quote! { paperdom::attrs::parse_attr::<#inner>(element, #attr_name) };
    }
    if is_plain(ty, "String") {
        return quote! {
            paperdom::attrs::string_attr(element, #attr_name).unwrap_or_default()
        };
    }
    quote! {
        paperdom::attrs::parse_attr::<#ty>(element, #attr_name).unwrap_or_default()
    }
}

fn is_plain(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(name),
        _ => false,
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
