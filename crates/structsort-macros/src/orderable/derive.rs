//! Implementation of the `#[derive(Orderable)]` macro.
//!
//! Records get an `Orderable` impl reporting `Shape::Record` plus a
//! `Compound` impl exposing the fields in declaration order. Transparent
//! newtypes report their single field as an indirection instead.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Index, Member, Result, Type};

use super::attrs::{parse_container_attrs, parse_field_attrs};

/// One field of the derived struct, in declaration order.
struct Component<'a> {
    member: Member,
    ty: &'a Type,
    /// Span of `#[order(skip)]`, if present.
    skip: Option<Span>,
}

/// Main implementation of the Orderable derive macro.
pub fn orderable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let container = parse_container_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new(
                input.span(),
                "Orderable can only be derived for structs",
            ))
        }
    };

    let components = collect_components(fields)?;

    if container.transparent {
        transparent_impl(&input, &components, container.span)
    } else {
        record_impl(&input, &components)
    }
}

fn collect_components(fields: &Fields) -> Result<Vec<Component<'_>>> {
    let mut components = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let attrs = parse_field_attrs(&field.attrs)?;
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        components.push(Component {
            member,
            ty: &field.ty,
            skip: attrs.skip.then_some(attrs.span),
        });
    }
    Ok(components)
}

fn record_impl(input: &DeriveInput, components: &[Component<'_>]) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = bounded_where_clause(input, components);

    let count = components.len();
    let arms = components.iter().enumerate().map(|(index, component)| {
        let member = &component.member;
        if component.skip.is_some() {
            quote! { #index => ::structsort::Shape::Unorderable, }
        } else {
            quote! { #index => ::structsort::Orderable::shape(&self.#member), }
        }
    });

    Ok(quote! {
        impl #impl_generics ::structsort::Compound for #struct_name #ty_generics #where_clause {
            fn component_count(&self) -> usize {
                #count
            }

            #[allow(clippy::match_single_binding)]
            fn component(&self, index: usize) -> ::structsort::Shape<'_> {
                match index {
                    #(#arms)*
                    _ => ::structsort::Shape::Unorderable,
                }
            }
        }

        impl #impl_generics ::structsort::Orderable for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::structsort::Shape<'_> {
                ::structsort::Shape::Record(self)
            }

            fn declared_class() -> ::structsort::Class {
                ::structsort::Class::Compound(::structsort::CompoundKind::Record)
            }
        }
    })
}

fn transparent_impl(
    input: &DeriveInput,
    components: &[Component<'_>],
    span: Span,
) -> Result<TokenStream> {
    let component = match components {
        [only] => match only.skip {
            Some(skip) => {
                return Err(Error::new(
                    skip,
                    "the field of an #[order(transparent)] struct cannot be skipped",
                ))
            }
            None => only,
        },
        _ => {
            return Err(Error::new(span, "#[order(transparent)] requires exactly one field"))
        }
    };

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = bounded_where_clause(input, components);
    let member = &component.member;
    let ty = component.ty;

    Ok(quote! {
        impl #impl_generics ::structsort::Orderable for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::structsort::Shape<'_> {
                ::structsort::Shape::Indirect(&self.#member)
            }

            fn declared_class() -> ::structsort::Class {
                <#ty as ::structsort::Orderable>::declared_class()
            }
        }
    })
}

/// The struct's own where clause plus `Orderable` bounds on compared fields.
fn bounded_where_clause(input: &DeriveInput, components: &[Component<'_>]) -> TokenStream {
    let existing = input
        .generics
        .where_clause
        .as_ref()
        .map(|clause| {
            let predicates = clause.predicates.iter();
            quote! { #(#predicates,)* }
        })
        .unwrap_or_default();

    if input.generics.params.is_empty() {
        return match input.generics.where_clause {
            Some(_) => quote! { where #existing },
            None => TokenStream::new(),
        };
    }

    let bounds = components.iter().filter(|c| c.skip.is_none()).map(|c| {
        let ty = c.ty;
        quote! { #ty: ::structsort::Orderable, }
    });

    quote! { where #existing #(#bounds)* }
}
