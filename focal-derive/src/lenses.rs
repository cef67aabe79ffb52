//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, &input.generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => syn::Error::new_spanned(name, "Lenses cannot be derived for unions.")
            .to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods = named_fields.named.iter().filter_map(generate_field_lens);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn generate_field_lens(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let documentation = format!(" Returns a lens focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::Lens<Self, #field_type> + ::core::clone::Clone
        where
            #field_type: ::core::clone::Clone,
        {
            ::focal::optics::FunctionLens::new(
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_one_method_per_field() {
        let input: DeriveInput = syn::parse_quote! {
            struct Point { x: i32, y: i32 }
        };
        let Data::Struct(data_struct) = &input.data else {
            unreachable!("parsed a struct");
        };
        let generated =
            generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields).to_string();

        assert!(generated.contains("fn x_lens"));
        assert!(generated.contains("fn y_lens"));
    }

    #[test]
    fn test_tuple_struct_is_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(i32, i32);
        };
        let Data::Struct(data_struct) = &input.data else {
            unreachable!("parsed a struct");
        };
        let generated =
            generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields).to_string();

        assert!(generated.contains("compile_error"));
    }
}
