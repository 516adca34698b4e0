//! Implementation of the `#[derive(SemiIsos)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, parse_macro_input, parse_quote};

/// Entry point of the derive.
pub fn derive_semi_isos_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = with_static_bounds(&input.generics);

    let methods = match &input.data {
        Data::Enum(data_enum) => data_enum
            .variants
            .iter()
            .map(|variant| generate_variant_semi_iso(name, &variant.ident, &variant.fields))
            .collect::<Vec<_>>(),
        Data::Struct(data_struct) => vec![generate_fields_semi_iso(name, &data_struct.fields)],
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "SemiIsos cannot be derived for unions.")
                .to_compile_error()
                .into();
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    })
}

/// Adds a `'static` bound to every type parameter; embedded primitives are
/// `'static`.
fn with_static_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let parameters: Vec<Ident> = generics
        .params
        .iter()
        .filter_map(|parameter| match parameter {
            GenericParam::Type(type_parameter) => Some(type_parameter.ident.clone()),
            GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for parameter in parameters {
        where_clause.predicates.push(parse_quote!(#parameter: 'static));
    }
    generics
}

/// The pieces needed to move between a value and the tuple of its fields.
struct FieldsShape {
    /// Destructures (or constructs) the value, binding `field_0`, `field_1`, ...
    value: TokenStream2,
    /// The type of the field tuple: `()`, the single field type, or a tuple.
    target_type: TokenStream2,
    /// Constructs (or destructures) the field tuple from the bindings.
    target: TokenStream2,
}

fn fields_shape(path: &TokenStream2, fields: &Fields) -> FieldsShape {
    let bindings: Vec<Ident> = (0..fields.len())
        .map(|index| format_ident!("field_{}", index))
        .collect();
    let types: Vec<&syn::Type> = fields.iter().map(|field| &field.ty).collect();

    let value = match fields {
        Fields::Unit => quote! { #path },
        Fields::Unnamed(_) => quote! { #path(#(#bindings),*) },
        Fields::Named(named) => {
            let names = named.named.iter().map(|field| &field.ident);
            quote! { #path { #(#names: #bindings),* } }
        }
    };

    let (target_type, target) = match (types.as_slice(), bindings.as_slice()) {
        ([], _) => (quote! { () }, quote! { () }),
        ([single_type], [single_binding]) => (quote! { #single_type }, quote! { #single_binding }),
        _ => (quote! { (#(#types),*) }, quote! { (#(#bindings),*) }),
    };

    FieldsShape {
        value,
        target_type,
        target,
    }
}

/// `{variant}_semi_iso()`: the variant against the tuple of its fields.
fn generate_variant_semi_iso(enum_name: &Ident, variant_name: &Ident, fields: &Fields) -> TokenStream2 {
    let method_name = format_ident!("{}_semi_iso", to_snake_case(&variant_name.to_string()));
    let label = format!("{enum_name}::{variant_name}");
    let message = format!("expected variant `{variant_name}`");
    let documentation =
        format!("Semi-isomorphism between this enum and the fields of the `{variant_name}` variant.");
    let FieldsShape {
        value,
        target_type,
        target,
    } = fields_shape(&quote! { Self::#variant_name }, fields);

    quote! {
        #[doc = #documentation]
        ///
        /// Forward fails on every other variant.
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::siarrow::semi_iso::Primitive<Self, #target_type> {
            ::siarrow::semi_iso::FunctionSemiIso::labelled(
                #label,
                |source: Self| match source {
                    #value => ::core::result::Result::Ok(#target),
                    #[allow(unreachable_patterns)]
                    _ => ::core::result::Result::Err(::siarrow::Failure::new(#message)),
                },
                |#target: #target_type| ::core::result::Result::Ok(#value),
            )
        }
    }
}

/// `fields_semi_iso()`: the struct against the tuple of its fields.
fn generate_fields_semi_iso(struct_name: &Ident, fields: &Fields) -> TokenStream2 {
    let label = format!("{struct_name} fields");
    let FieldsShape {
        value,
        target_type,
        target,
    } = fields_shape(&quote! { Self }, fields);

    let forward = if fields.is_empty() {
        quote! { |_: Self| ::core::result::Result::Ok(()) }
    } else {
        quote! {
            |source: Self| {
                let #value = source;
                ::core::result::Result::Ok(#target)
            }
        }
    };

    quote! {
        /// Semi-isomorphism between this struct and the tuple of its fields.
        ///
        /// Both directions always succeed.
        #[inline]
        #[must_use]
        pub fn fields_semi_iso() -> impl ::siarrow::semi_iso::Primitive<Self, #target_type> {
            ::siarrow::semi_iso::FunctionSemiIso::labelled(
                #label,
                #forward,
                |#target: #target_type| ::core::result::Result::Ok(#value),
            )
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// An uppercase letter starts a new word after a lowercase letter, and after
/// an uppercase letter when a lowercase one follows (`XMLParser` becomes
/// `xml_parser`).
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, &character) in characters.iter().enumerate() {
        if !character.is_uppercase() {
            result.push(character);
            continue;
        }
        if let Some(&previous) = index.checked_sub(1).and_then(|before| characters.get(before)) {
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                result.push('_');
            }
        }
        result.extend(character.to_lowercase());
    }

    result
}
