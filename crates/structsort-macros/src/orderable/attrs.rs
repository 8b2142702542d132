//! Attribute parsing for the Orderable derive macro.
//!
//! This module provides parsers for the `#[order(...)]` attributes used by
//! the `Orderable` derive macro, both on the struct and on its fields.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Meta, Result, Token,
};

/// Struct-level attributes from `#[order(...)]`.
#[derive(Debug, Clone)]
pub struct ContainerAttr {
    /// Order the single field's value directly: `#[order(transparent)]`
    pub transparent: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for ContainerAttr {
    fn default() -> Self {
        ContainerAttr {
            transparent: false,
            span: Span::call_site(),
        }
    }
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("transparent") => {
                    attr.transparent = true;
                    attr.span = p.span();
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown order attribute on struct. Expected: transparent",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Field-level attributes from `#[order(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    /// The field keeps its position but decides nothing: `#[order(skip)]`
    pub skip: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            skip: false,
            span: Span::call_site(),
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                    attr.span = p.span();
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown order attribute on field. Expected: skip",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[order(...)]` attributes from a struct's attributes.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("order") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}

/// Extract `#[order(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("order") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
