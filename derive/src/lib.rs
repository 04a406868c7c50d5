//! Derive support for `tagmap`.
//!
//! See [`Record`].

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod record;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits for a named-field
/// struct:
///
/// - `tagmap::info::Described` — the static descriptor, built once
/// - `tagmap::Record` — field access by name and by declaration index
/// - `tagmap::Field` — classification as a record during walks
///
/// Enums, tuple structs, unit structs, and generic structs are rejected.
///
/// ## Field attributes
///
/// ### Tags
///
/// `#[tag(name = "value", ...)]` attaches tag values under one or more tag
/// names. The attribute may be repeated; entries accumulate in order.
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct Server {
///     #[tag(env = "HOST", db = "host")]
///     host: String,
///     #[tag(env = "-")]
///     secret: String,
/// }
/// ```
///
/// A `"-"` value conventionally marks the field as excluded; extraction
/// honors it under `without_minus`.
///
/// ### Embedding
///
/// `#[record(embedded)]` promotes a record-typed field into its parent's
/// namespace: its leaves keep the parent's path prefix instead of adding a
/// segment. Every field type must implement `tagmap::Field` — leaf kinds
/// are covered out of the box, other record types through this derive.
#[proc_macro_derive(Record, attributes(record, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
