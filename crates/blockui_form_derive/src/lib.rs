use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `blockui::form::FormFields` for a struct with named fields.
///
/// Every field becomes one form field keyed by its identifier, in declaration
/// order. Field types must convert from and into `SharedString`.
#[proc_macro_derive(FormFields)]
pub fn derive_form_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "FormFields derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let model_ident = input.ident;

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "FormFields derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "FormFields derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let blockui = blockui_path();
    let mut keys = Vec::new();
    let mut readers = Vec::new();
    let mut writers = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let field_name = field_ident.to_string();

        keys.push(quote! {
            #blockui::form::FieldKey::new(#field_name)
        });
        readers.push(quote! {
            #field_ident: values
                .get(#blockui::form::FieldKey::new(#field_name))
                .cloned()
                .unwrap_or_default()
                .into()
        });
        writers.push(quote! {
            (
                #blockui::form::FieldKey::new(#field_name),
                <#blockui::form::SharedString as ::core::convert::From<_>>::from(
                    ::core::clone::Clone::clone(&self.#field_ident),
                ),
            )
        });
    }

    quote! {
        impl #blockui::form::FormFields for #model_ident {
            const KEYS: &'static [#blockui::form::FieldKey] = &[#(#keys),*];

            fn from_values(values: &#blockui::form::FieldValues) -> Self {
                Self {
                    #(#readers),*
                }
            }

            fn to_values(&self) -> #blockui::form::FieldValues {
                #blockui::form::FieldValues::from_entries([#(#writers),*])
            }
        }
    }
    .into()
}

fn blockui_path() -> TokenStream2 {
    match crate_name("blockui") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::blockui),
    }
}
