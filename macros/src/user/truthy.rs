use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DataEnum, DeriveInput, Fields, Index, Member, Type};

use crate::common::{find_marker, forbid_marker};

/// #[derive(Truthy)] expands to a `tola_seq::Truthy` impl.
///
/// Structs delegate to one field (adding `Field: Truthy` to the where
/// clause); enums match on the variant.
pub fn expand_derive_truthy(input: DeriveInput) -> syn::Result<TokenStream2> {
    forbid_marker(&input.attrs, "truthy", "the type itself")?;
    forbid_marker(&input.attrs, "falsy", "the type itself")?;

    let ident = &input.ident;
    let mut generics = input.generics.clone();

    let body = match &input.data {
        Data::Struct(data) => match deciding_field(&data.fields, ident)? {
            Some((member, ty)) => {
                generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(#ty: ::tola_seq::Truthy));
                quote! { ::tola_seq::Truthy::is_truthy(&self.#member) }
            }
            None => quote! { true },
        },
        Data::Enum(data) => enum_body(data)?,
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "`Truthy` cannot be derived for unions",
            ));
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::tola_seq::Truthy for #ident #ty_generics #where_clause {
            #[inline]
            fn is_truthy(&self) -> bool {
                #body
            }
        }
    })
}

/// The field a struct delegates to, or `None` for a struct without fields.
fn deciding_field<'a>(fields: &'a Fields, ident: &syn::Ident) -> syn::Result<Option<(Member, &'a Type)>> {
    let mut marked = None;
    for (index, field) in fields.iter().enumerate() {
        forbid_marker(&field.attrs, "falsy", "struct fields")?;
        if let Some(attr) = find_marker(&field.attrs, "truthy")? {
            if marked.is_some() {
                return Err(syn::Error::new_spanned(attr, "only one field may be `#[truthy]`"));
            }
            marked = Some(index);
        }
    }

    let index = match (marked, fields.len()) {
        (Some(index), _) => index,
        (None, 0) => return Ok(None),
        (None, 1) => 0,
        (None, _) => {
            return Err(syn::Error::new_spanned(
                ident,
                "mark the field that decides truthiness with `#[truthy]`",
            ));
        }
    };

    let Some(field) = fields.iter().nth(index) else {
        return Ok(None);
    };
    let member = match &field.ident {
        Some(name) => Member::Named(name.clone()),
        None => Member::Unnamed(Index::from(index)),
    };
    Ok(Some((member, &field.ty)))
}

fn enum_body(data: &DataEnum) -> syn::Result<TokenStream2> {
    let arms = data
        .variants
        .iter()
        .map(|variant| {
            forbid_marker(&variant.attrs, "truthy", "enum variants")?;
            for field in &variant.fields {
                forbid_marker(&field.attrs, "truthy", "enum fields")?;
                forbid_marker(&field.attrs, "falsy", "enum fields")?;
            }

            let name = &variant.ident;
            let pattern = match &variant.fields {
                Fields::Named(_) => quote! { Self::#name { .. } },
                Fields::Unnamed(_) => quote! { Self::#name(..) },
                Fields::Unit => quote! { Self::#name },
            };
            let value = find_marker(&variant.attrs, "falsy")?.is_none();
            Ok(quote! { #pattern => #value })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        match *self {
            #(#arms,)*
        }
    })
}
