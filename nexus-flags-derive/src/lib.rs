use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Token, Variant,
    bracketed, parse_macro_input, punctuated::Punctuated,
};

// =============================================================================
// Flags derive
// =============================================================================

/// Derives `nexus_flags::Flags` and `nexus_flags::IntoBits<Self>` for a
/// fieldless enum with an unsigned `#[repr]`.
///
/// Container attribute `#[flags(default = Variant)]` or
/// `#[flags(default = [A, B])]` sets the default bits. Variant attribute
/// `#[flag(name = "...")]` overrides the declared name.
#[proc_macro_derive(Flags, attributes(flags, flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_flags_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_flags_impl(input: DeriveInput) -> Result<TokenStream2> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Flags can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Flags cannot be derived for generic enums",
        ));
    }

    let repr = parse_repr(&input)?;
    let attr = parse_flags_attr(&input.attrs)?;

    let flags: Vec<FlagDef> = variants.iter().map(parse_flag).collect::<Result<_>>()?;
    validate_flags(&flags)?;

    for ident in &attr.default {
        if !flags.iter().any(|flag| flag.variant == *ident) {
            return Err(Error::new_spanned(
                ident,
                format!("default flag `{}` is not a variant", ident),
            ));
        }
    }

    let name = &input.ident;

    let entries = flags.iter().map(|flag| {
        let variant = &flag.variant;
        let flag_name = &flag.name;
        quote! {
            (#flag_name, #name::#variant as #repr),
        }
    });

    let default = attr.default.iter().map(|variant| {
        quote! { | #name::#variant as #repr }
    });

    let resolve_arms = flags.iter().map(|flag| {
        let variant = &flag.variant;
        quote! {
            #name::#variant => #name::#variant as #repr,
        }
    });

    Ok(quote! {
        impl nexus_flags::Flags for #name {
            type Bits = #repr;

            const FLAGS: &'static [(&'static str, #repr)] = &[
                #(#entries)*
            ];

            const DEFAULT: #repr = 0 #(#default)*;
        }

        impl nexus_flags::IntoBits<#name> for #name {
            #[inline]
            fn resolve(&self) -> #repr {
                match *self {
                    #(#resolve_arms)*
                }
            }
        }
    })
}

// =============================================================================
// Attribute types
// =============================================================================

/// Parsed #[flags(default = ...)]
#[derive(Default)]
struct FlagsAttr {
    default: Vec<Ident>,
}

/// Parsed enum variant
struct FlagDef {
    variant: Ident,
    name: LitStr,
}

// =============================================================================
// Attribute parsing
// =============================================================================

fn parse_repr(input: &DeriveInput) -> Result<Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("repr") {
            let repr: Ident = attr.parse_args()?;
            match repr.to_string().as_str() {
                "u8" | "u16" | "u32" | "u64" | "u128" | "usize" => {
                    return Ok(repr);
                }
                _ => {
                    return Err(Error::new_spanned(
                        repr,
                        "Flags requires repr(u8), repr(u16), repr(u32), repr(u64), repr(u128), or repr(usize)",
                    ));
                }
            }
        }
    }

    Err(Error::new_spanned(
        input,
        "Flags requires a #[repr(u8/u16/u32/u64/u128/usize)] attribute",
    ))
}

fn parse_flags_attr(attrs: &[Attribute]) -> Result<FlagsAttr> {
    let mut parsed = FlagsAttr::default();

    for attr in attrs {
        if !attr.path().is_ident("flags") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                meta.input.parse::<Token![=]>()?;
                if meta.input.peek(syn::token::Bracket) {
                    let content;
                    bracketed!(content in meta.input);
                    let idents = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                    parsed.default.extend(idents);
                } else {
                    parsed.default.push(meta.input.parse()?);
                }
                Ok(())
            } else {
                Err(meta.error("expected `default`"))
            }
        })?;
    }

    Ok(parsed)
}

fn parse_flag(variant: &Variant) -> Result<FlagDef> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(Error::new_spanned(
            variant,
            "Flags variants cannot have fields",
        ));
    }

    let ident = variant.ident.clone();
    let mut name = LitStr::new(&ident.to_string(), ident.span());

    for attr in &variant.attrs {
        if attr.path().is_ident("flag") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = meta.value()?.parse()?;
                    Ok(())
                } else {
                    Err(meta.error("expected `name`"))
                }
            })?;
        }
    }

    Ok(FlagDef {
        variant: ident,
        name,
    })
}

// =============================================================================
// Validation
// =============================================================================

fn validate_flags(flags: &[FlagDef]) -> Result<()> {
    // Check no duplicate names (simple O(n²), flag sets are small)
    for (i, a) in flags.iter().enumerate() {
        for b in flags.iter().skip(i + 1) {
            if a.name.value() == b.name.value() {
                return Err(Error::new_spanned(
                    &b.name,
                    format!("flag name '{}' is declared twice", b.name.value()),
                ));
            }
        }
    }

    Ok(())
}
