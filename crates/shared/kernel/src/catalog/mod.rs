//! Enumerations declared in data files rather than code.
//!
//! A catalog lists enumerations as ordered member tables:
//!
//! ```toml
//! [[enumerations]]
//! id = "cards::Suit"
//! members = [
//!   { name = "HEARTS", value = "H" },
//!   { name = "SPADES", value = "S" },
//! ]
//! ```
//!
//! Declared entries behave exactly like `#[enumeration]` types: they are
//! validated and built on first access and served from the registry cache.

use crate::config::{self, ConfigError};
use ordum_domain::catalog::{CatalogDocument, EnumerationDecl};
use ordum_registry::{Registry, RegistryError};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

#[ordum_derive::ordum_error]
pub enum CatalogError {
    #[error("Catalog could not be loaded{}: {source}", format_context(.context))]
    Load { source: ConfigError, context: Option<Cow<'static, str>> },
    #[error("Catalog could not be declared{}: {source}", format_context(.context))]
    Declare { source: RegistryError, context: Option<Cow<'static, str>> },
}

/// An in-memory set of enumeration declarations, possibly merged from several files.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<EnumerationDecl>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumerationDecl> {
        self.entries.iter()
    }

    /// Identifiers in file order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Appends the entries of `other` after this catalog's entries.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Declares every entry in `registry`, returning how many were declared.
    ///
    /// Nothing is built here; invalid member tables surface on first access
    /// or through [`Registry::preload`].
    ///
    /// # Errors
    /// Returns [`CatalogError::Declare`] for the first identifier that is
    /// already declared or built. Entries before it stay declared.
    pub fn declare_into(&self, registry: &Registry) -> Result<usize, CatalogError> {
        for entry in &self.entries {
            registry
                .declare(entry.clone())
                .context(format!("while declaring {}", entry.id))?;
        }
        debug!(declared = self.entries.len(), "Catalog declared");
        Ok(self.entries.len())
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        Self { entries: document.enumerations }
    }
}

impl FromIterator<EnumerationDecl> for Catalog {
    fn from_iter<I: IntoIterator<Item = EnumerationDecl>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EnumerationDecl;
    type IntoIter = std::slice::Iter<'a, EnumerationDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Loads one catalog file, layered with `ORDUM__` environment overrides.
///
/// # Errors
/// Returns [`CatalogError::Load`] if the file is missing, unreadable or
/// does not describe a list of enumerations.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let document: CatalogDocument = config::load_config(Some(path))
        .context(format!("from {}", path.display()))?;

    debug!(path = %path.display(), entries = document.enumerations.len(), "Catalog loaded");
    Ok(document.into())
}

/// Loads and merges several catalog files in order.
///
/// # Errors
/// Returns the first [`CatalogError::Load`] encountered.
pub fn load_catalogs<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Catalog, CatalogError> {
    paths.into_iter().try_fold(Catalog::new(), |mut catalog, path| {
        catalog.merge(load_catalog(path)?);
        Ok(catalog)
    })
}
