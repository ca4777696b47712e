use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Path};

struct Options {
    kind: String,
    krate: Path,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FlagSet cannot be derived for generic types",
        ));
    }

    let options = parse_options(input)?;
    match &input.data {
        Data::Enum(data) => expand_enum(&input.ident, data, &options),
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                Ok(expand_bitflags(&input.ident, &options))
            }
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "FlagSet on a struct expects a `bitflags!` type (single-field tuple struct)",
            )),
        },
        Data::Union(_) => {
            Err(syn::Error::new_spanned(&input.ident, "FlagSet cannot be derived for unions"))
        }
    }
}

fn parse_options(input: &DeriveInput) -> syn::Result<Options> {
    let mut kind = input.ident.to_string();
    let mut krate: Path = syn::parse_quote!(::flagkit_kernel);

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("flagset")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(meta.error("kind must not be empty"));
                }
                kind = value.value();
                Ok(())
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                krate = value.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported flagset option, expected `kind` or `crate`"))
            }
        })?;
    }

    Ok(Options { kind, krate })
}

fn expand_enum(name: &Ident, data: &DataEnum, options: &Options) -> syn::Result<TokenStream> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "FlagSet requires at least one member"));
    }
    if let Some(variant) = data.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(
            variant,
            "FlagSet members must be unit variants",
        ));
    }

    let Options { kind, krate } = options;
    let idents: Vec<&Ident> = data.variants.iter().map(|v| &v.ident).collect();
    let names = idents.iter().map(|ident| ident.to_string());

    Ok(quote! {
        #[automatically_derived]
        impl #krate::FlagSetType for #name {
            const KIND: &'static str = #kind;

            fn definitions() -> ::std::borrow::Cow<'static, [#krate::domain::FlagDefinition]> {
                const MEMBERS: &[#krate::domain::FlagDefinition] = &[
                    #( #krate::domain::FlagDefinition::new(#names, #name::#idents as i64), )*
                ];
                ::std::borrow::Cow::Borrowed(MEMBERS)
            }

            #[inline]
            fn to_raw(self) -> i64 {
                self as i64
            }

            fn from_raw(raw: i64) -> ::std::option::Option<Self> {
                #( if raw == #name::#idents as i64 { return ::std::option::Option::Some(#name::#idents); } )*
                ::std::option::Option::None
            }
        }
    })
}

fn expand_bitflags(name: &Ident, options: &Options) -> TokenStream {
    let Options { kind, krate } = options;
    let flags = quote! { #krate::__private::bitflags::Flags };

    quote! {
        #[automatically_derived]
        impl #krate::FlagSetType for #name {
            const KIND: &'static str = #kind;

            fn definitions() -> ::std::borrow::Cow<'static, [#krate::domain::FlagDefinition]> {
                ::std::borrow::Cow::Owned(
                    <#name as #flags>::FLAGS
                        .iter()
                        .filter(|flag| !flag.name().is_empty())
                        .map(|flag| {
                            #krate::domain::FlagDefinition::new(
                                flag.name(),
                                #krate::RawBits::to_raw(<#name as #flags>::bits(flag.value())),
                            )
                        })
                        .collect(),
                )
            }

            #[inline]
            fn to_raw(self) -> i64 {
                #krate::RawBits::to_raw(<#name as #flags>::bits(&self))
            }

            fn from_raw(raw: i64) -> ::std::option::Option<Self> {
                let bits = <<#name as #flags>::Bits as #krate::RawBits>::from_raw(raw)?;
                <#name as #flags>::from_bits(bits)
            }
        }
    }
}
