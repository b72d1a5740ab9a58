//! Facade crate for ordum: closed enumerations of named singleton constants.
//! Re-exports the registry, the `#[enumeration]` macro and the shared data types,
//! and wires catalogs from configuration into the global registry.
//! Keep this crate thin: it should compose other crates, not implement registry logic.
//!
//! ## Usage
//!
//! ```rust
//! use ordum::prelude::*;
//!
//! pub struct Suit;
//!
//! #[enumeration]
//! impl Suit {
//!     pub const HEARTS: &'static str = "H";
//!     pub const SPADES: &'static str = "S";
//!     pub const CLUBS: &'static str = "C";
//!     pub const DIAMONDS: &'static str = "D";
//! }
//!
//! # fn main() -> Result<(), RegistryError> {
//! assert_eq!(Suit::for_name("HEARTS")?.ordinal(), 0);
//! assert_eq!(Suit::for_value("D")?.name(), "DIAMONDS");
//! assert!(Suit::for_ordinal(4).is_err());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub use ordum_domain as domain;
#[cfg(feature = "catalog")]
pub use ordum_kernel as kernel;
#[cfg(feature = "logger")]
pub use ordum_logger as logger;
pub use ordum_registry as registry;

pub use ordum_domain::{Declaration, Scalar};
pub use ordum_registry::{
    DeclarationSource, EnumSet, Enumeration, EnumerationExt, Enumerator, LookupKind, Registry,
    RegistryError, StaticSource, enumeration,
};

/// Everything needed to declare and query enumerations.
pub mod prelude {
    pub use crate::{
        Declaration, EnumSet, Enumeration, EnumerationExt, Enumerator, Registry, RegistryError,
        Scalar, enumeration,
    };
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "catalog")]
        "catalog",
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[ordum_derive::ordum_error]
pub enum InitError {
    #[cfg(feature = "catalog")]
    #[error("Catalog initialization failed{}: {source}", format_context(.context))]
    Catalog { source: ordum_kernel::catalog::CatalogError, context: Option<Cow<'static, str>> },
    #[error("Enumeration preload failed{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}

/// Declares every catalog named in `config.registry.catalogs` in `registry`
/// and, when `config.registry.preload` is set, builds all of them eagerly.
///
/// Returns the number of enumerations declared.
///
/// # Errors
/// Returns [`InitError::Catalog`] if a catalog cannot be loaded or declared
/// and [`InitError::Registry`] if preloading finds an invalid enumeration.
#[cfg(feature = "catalog")]
pub fn init(
    config: &domain::config::OrdumConfig,
    registry: &Registry,
) -> Result<usize, InitError> {
    let catalog = kernel::catalog::load_catalogs(&config.registry.catalogs)?;
    let declared = catalog.declare_into(registry)?;

    if config.registry.preload {
        let built = registry.preload().context("while preloading declared catalogs")?;
        tracing::info!(declared, built, "Registry initialized");
    } else {
        tracing::info!(declared, "Registry initialized lazily");
    }

    Ok(declared)
}
