#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the glzig crates.
//!
//! Every library crate in the workspace reports failures through a single error enum whose
//! variants carry an optional, human readable `context`. [`glzig_error`] removes the wiring
//! that pattern needs (derives, `From` conversions and a `.context(..)` extension trait).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! glzig-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a context-carrying error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext<T>` trait with `.context(..)` implemented for `Result<T, ErrorName>` and,
///   for every variant with a source, for `Result<T, SourceError>`.
/// * `From<SourceError>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), except `Internal`.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper usable from `#[error(...)]` format arguments.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants must use named fields.
/// 3. A variant with a source must also declare `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use glzig_derive::glzig_error;
/// use std::borrow::Cow;
///
/// #[glzig_error]
/// pub enum RegistryError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, RegistryError> {
///     std::fs::read_to_string(path).context("Reading the registry document")
/// }
/// ```
#[proc_macro_attribute]
pub fn glzig_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
