//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(
            &input.ident,
            &input.generics,
            data_enum.variants.iter(),
        ),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// How one variant is matched, read and rebuilt.
struct VariantShape<'a> {
    bindings: Vec<Ident>,
    types: Vec<&'a Type>,
    braced: bool,
}

impl<'a> VariantShape<'a> {
    fn of(fields: &'a Fields) -> Self {
        match fields {
            Fields::Unit => Self {
                bindings: Vec::new(),
                types: Vec::new(),
                braced: false,
            },
            Fields::Unnamed(unnamed) => Self {
                bindings: (0..unnamed.unnamed.len())
                    .map(|position| format_ident!("field_{}", position))
                    .collect(),
                types: unnamed.unnamed.iter().map(|field| &field.ty).collect(),
                braced: false,
            },
            Fields::Named(named) => Self {
                bindings: named
                    .named
                    .iter()
                    .filter_map(|field| field.ident.clone())
                    .collect(),
                types: named.named.iter().map(|field| &field.ty).collect(),
                braced: true,
            },
        }
    }

    /// `()` for no fields, the field type for one, a tuple otherwise.
    fn target_type(&self) -> TokenStream2 {
        match self.types.as_slice() {
            [single] => quote! { #single },
            types => quote! { (#(#types),*) },
        }
    }

    /// The binding pattern for the focused part, matching `target_type`.
    /// Also the expression that moves the bound fields back out.
    fn part_pattern(&self) -> TokenStream2 {
        match self.bindings.as_slice() {
            [single] => quote! { #single },
            bindings => quote! { (#(#bindings),*) },
        }
    }

    /// A `Clone` bound for every field type, empty for unit variants.
    fn clone_bounds(&self) -> TokenStream2 {
        if self.types.is_empty() {
            return TokenStream2::new();
        }
        let types = &self.types;
        quote! { where #(#types: ::core::clone::Clone),* }
    }

    fn cloned_part(&self) -> TokenStream2 {
        let clones = self
            .bindings
            .iter()
            .map(|binding| quote! { ::core::clone::Clone::clone(#binding) });
        match self.bindings.len() {
            1 => quote! { #(#clones)* },
            _ => quote! { (#(#clones),*) },
        }
    }

    fn variant_pattern(&self, variant_name: &Ident) -> TokenStream2 {
        let bindings = &self.bindings;
        if self.braced {
            quote! { Self::#variant_name { #(#bindings),* } }
        } else if bindings.is_empty() {
            quote! { Self::#variant_name }
        } else {
            quote! { Self::#variant_name(#(#bindings),*) }
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let shape = VariantShape::of(&variant.fields);

    let target_type = shape.target_type();
    let part_pattern = shape.part_pattern();
    let cloned_part = shape.cloned_part();
    let variant_pattern = shape.variant_pattern(variant_name);
    let clone_bounds = shape.clone_bounds();
    let documentation = format!(" Returns a prism focusing on the `{variant_name}` variant.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::Prism<Self, #target_type> + ::core::clone::Clone
        #clone_bounds
        {
            ::focal::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #variant_pattern => ::core::option::Option::Some(#cloned_part),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |#part_pattern: #target_type| #variant_pattern,
                |source: Self| match source {
                    #variant_pattern => ::core::result::Result::Ok(#part_pattern),
                    #[allow(unreachable_patterns)]
                    other => ::core::result::Result::Err(other),
                },
            )
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase one (`KeyPress` -> `key_press`) or that starts a word after an
/// acronym (`XMLParser` -> `xml_parser`).
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (position, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            let previous = position
                .checked_sub(1)
                .and_then(|previous_position| characters.get(previous_position));
            let next_is_lowercase = characters
                .get(position + 1)
                .is_some_and(|next| next.is_lowercase());
            let starts_word = previous.is_some_and(|previous| {
                previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase)
            });

            if starts_word {
                result.push('_');
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
