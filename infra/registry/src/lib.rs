//! # Registry
//!
//! Closed enumerations for values that are not Rust enums: a fixed, named,
//! ordered set of singleton enumerators, each carrying a unique [`Scalar`].
//!
//! ## Overview
//!
//! An enumeration is declared as an ordered table of `name = value` pairs,
//! either in code (`#[enumeration]` or a hand-written [`Enumeration`] impl) or
//! at runtime through a [`DeclarationSource`] such as a catalog entry. On first
//! access the [`Registry`] validates the table, assigns ordinals in declaration
//! order, builds one [`Enumerator`] per declaration and caches the resulting
//! [`EnumSet`]. Every later lookup is served from the cache and returns the
//! identical `Arc<Enumerator>`.
//!
//! ## Features
//!
//! * **Strict values**: `1`, `1.0` and `"1"` are different values; ambiguous
//!   tables fail with [`RegistryError::Configuration`] before anything is built.
//! * **Singletons**: enumerators are neither `Clone` nor deserializable.
//! * **Thread-safe**: `FxHashMap` + `parking_lot::RwLock`, read-only after first build.
//!
//! # Example
//!
//! ```rust
//! use ordum_registry::{EnumerationExt, RegistryError, enumeration};
//!
//! pub struct Suit;
//!
//! #[enumeration(crate = "ordum_registry")]
//! impl Suit {
//!     pub const HEARTS: &'static str = "H";
//!     pub const SPADES: &'static str = "S";
//!     pub const CLUBS: &'static str = "C";
//!     pub const DIAMONDS: &'static str = "D";
//! }
//!
//! fn main() -> Result<(), RegistryError> {
//!     assert_eq!(Suit::hearts()?.ordinal(), 0);
//!     assert_eq!(Suit::for_value("D")?.name(), "DIAMONDS");
//!     assert!(Suit::for_ordinal(4).is_err());
//!     assert!(!Suit::has_ordinal(4));
//!     Ok(())
//! }
//! ```

mod enumerator;
mod error;
mod ext;
mod registry;
mod set;
mod source;
mod validate;

pub use enumerator::Enumerator;
pub use error::{LookupKind, RegistryError, RegistryErrorExt};
pub use ext::EnumerationExt;
pub use ordum_derive::enumeration;
pub use ordum_domain::{Declaration, Scalar};
pub use registry::Registry;
pub use set::EnumSet;
pub use source::{DeclarationSource, Enumeration, StaticSource};
