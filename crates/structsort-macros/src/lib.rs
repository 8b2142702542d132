//! Proc macros for structsort.
//!
//! # Available Macros
//!
//! - [`Orderable`] - Derive natural ordering for structs

mod orderable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Orderable` and `Compound` traits for a struct.
///
/// Fields are compared in declaration order, for named, tuple and unit
/// structs alike. The generated code refers to the `structsort` crate.
///
/// # Attributes
///
/// | Attribute | Where | Description |
/// |-----------|-------|-------------|
/// | `skip` | field | The field keeps its position but never decides the order; its type needs no `Orderable` impl |
/// | `transparent` | struct | A single-field struct orders exactly like its field |
///
/// # Example
///
/// ```ignore
/// use structsort::Orderable;
///
/// #[derive(Orderable)]
/// struct Task {
///     priority: u8,
///     name: String,
///     #[order(skip)]
///     on_done: fn(),
/// }
///
/// #[derive(Orderable)]
/// #[order(transparent)]
/// struct Meters(f64);
/// ```
///
/// # Generic Structs
///
/// Each compared field type gets an `Orderable` bound, so
/// `struct Tagged<T> { tag: T }` is orderable whenever `T` is.
///
/// # Compile-Time Errors
///
/// - Enums and unions are rejected
/// - `#[order(transparent)]` on a struct without exactly one compared field
/// - Unknown `#[order(...)]` options
#[proc_macro_derive(Orderable, attributes(order))]
pub fn orderable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    orderable::orderable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
