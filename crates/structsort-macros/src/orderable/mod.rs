//! Implementation of the `#[derive(Orderable)]` macro.
//!
//! This module provides derive macro support for the structsort ordering
//! engine, generating structural accessors from struct definitions.

mod attrs;
mod derive;

pub use derive::orderable_derive_impl;
