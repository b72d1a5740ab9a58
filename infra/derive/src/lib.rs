#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Ordum workspace.
//! This crate turns constant declarations into registry-backed enumerations and
//! removes the boilerplate around the workspace's error enums.
//!
//! ## Usage
//! Consumers normally reach these macros through the `ordum` facade:
//! ```toml
//! [dependencies]
//! ordum = { path = "../crates/ordum" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but the registry crate's `tests/ui` directory compiles equivalent cases.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

/// Attribute macro that turns an impl block of constants into a closed enumeration.
///
/// Every associated `const` in the block becomes one enumerator: the constant's
/// identifier is the enumerator name, its value (anything convertible into
/// `Scalar`) is the enumerator value, and its position is the ordinal.
///
/// # Generated Items
///
/// * `impl Enumeration for Type` with `TYPE_ID` and the ordered declaration table.
/// * One snake_case accessor per constant (`HEARTS` becomes `Type::hearts()`),
///   looking the enumerator up in the global registry.
///
/// # Arguments
///
/// * `id = "..."` - Overrides the type identifier (defaults to `module_path!()::Type`).
/// * `crate = "..."` - Path to the crate exporting the registry API (defaults to `::ordum`).
/// * `accessors = false` - Skips accessor generation.
///
/// Put `#[enumeration(skip)]` on a constant to keep it out of the enumeration.
///
/// # Errors
/// Emits a compile-time error when two constants share the same literal value,
/// or when applied to a trait impl or a generic type.
///
/// # Example
///
/// ```rust,ignore
/// use ordum::prelude::*;
///
/// pub struct Suit;
///
/// #[enumeration]
/// impl Suit {
///     pub const HEARTS: &'static str = "H";
///     pub const SPADES: &'static str = "S";
///     pub const CLUBS: &'static str = "C";
///     pub const DIAMONDS: &'static str = "D";
/// }
///
/// assert_eq!(Suit::hearts()?.ordinal(), 0);
/// assert_eq!(Suit::for_value("D")?.name(), "DIAMONDS");
/// ```
#[proc_macro_attribute]
pub fn enumeration(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    macros::enumeration::expand_enumeration(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context carry `context: Option<Cow<'static, str>>`.
/// 3. Variants wrapping external errors use a `source` field (or `#[source]`/`#[from]`)
///    and must also carry a context field.
///
/// # Example
///
/// ```rust,ignore
/// use ordum_derive::ordum_error;
/// use std::borrow::Cow;
///
/// #[ordum_error]
/// pub enum CatalogError {
///     #[error("Catalog error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn ordum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
