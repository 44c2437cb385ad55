//! Procedural macros for tola-seq
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Truthy)]` | struct/enum | Default stencil predicate support |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Truthy)]
//! struct Weight(u32);            // truthy iff the field is
//!
//! #[derive(Truthy)]
//! struct Sample {
//!     label: &'static str,
//!     #[truthy]
//!     keep: bool,                // decides for the whole struct
//! }
//!
//! #[derive(Truthy)]
//! enum Flag {
//!     #[falsy]
//!     Off,
//!     On,
//!     Auto(u8),                  // any unmarked variant is truthy
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Derive `tola_seq::Truthy`.
///
/// - single-field struct: delegates to the field;
/// - multi-field struct: delegates to the one field marked `#[truthy]`;
/// - unit struct: always truthy;
/// - enum: variants marked `#[falsy]` are falsy, all others truthy.
#[proc_macro_derive(Truthy, attributes(truthy, falsy))]
pub fn derive_truthy(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_truthy(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
