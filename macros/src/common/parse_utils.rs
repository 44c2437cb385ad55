//! Common parsing utilities
//!
//! Marker attributes are bare paths (`#[truthy]`, `#[falsy]`); anything
//! after the name is rejected so typos like `#[truthy(no)]` do not pass
//! silently.

use syn::{Attribute, Meta};

/// Find the marker attribute `name` in `attrs`.
///
/// Returns `Ok(None)` when absent, the attribute when present as a bare
/// path, and an error when it carries arguments.
pub fn find_marker<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<Option<&'a Attribute>> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                format!("`#[{name}]` takes no arguments"),
            ));
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, format!("duplicate `#[{name}]`")));
        }
        found = Some(attr);
    }
    Ok(found)
}

/// Reject `name` anywhere in `attrs`.
pub fn forbid_marker(attrs: &[Attribute], name: &str, context: &str) -> syn::Result<()> {
    match find_marker(attrs, name)? {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("`#[{name}]` is not allowed on {context}"),
        )),
        None => Ok(()),
    }
}
