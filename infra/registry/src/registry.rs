use crate::error::{LookupKind, RegistryError};
use crate::set::EnumSet;
use crate::source::{DeclarationSource, Enumeration, StaticSource};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Lazily builds, validates and caches enumerations keyed by type identifier.
///
/// The first access to an enumeration takes the write lock, builds the set
/// and publishes it; every later access only takes the read lock. Failed
/// builds are not cached, so a broken declaration fails every access.
#[derive(Debug, Default)]
pub struct Registry {
    sets: RwLock<FxHashMap<Arc<str>, Arc<EnumSet>>>,
    sources: RwLock<FxHashMap<Arc<str>, Arc<dyn DeclarationSource>>>,
}

impl Registry {
    /// Creates an empty registry, independent of [`Registry::global`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`EnumerationExt`](crate::EnumerationExt)
    /// and the accessors generated by `#[enumeration]`.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Builds (once) and returns the enumerators of `T`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Configuration`] if `T`'s declarations are
    /// ambiguous or its identifier is already bound to another type.
    ///
    /// # Examples
    /// ```rust
    /// use ordum_registry::{Declaration, Enumeration, Registry};
    ///
    /// struct Level;
    ///
    /// impl Enumeration for Level {
    ///     const TYPE_ID: &'static str = "docs::Level";
    ///
    ///     fn declarations() -> Vec<Declaration> {
    ///         vec![Declaration::new("LOW", 1), Declaration::new("HIGH", 10)]
    ///     }
    /// }
    ///
    /// # fn main() -> Result<(), ordum_registry::RegistryError> {
    /// let registry = Registry::new();
    /// let levels = registry.enumerators::<Level>()?;
    /// assert_eq!(levels.len(), 2);
    /// assert!(std::sync::Arc::ptr_eq(&levels, &registry.enumerators::<Level>()?));
    /// # Ok(())
    /// # }
    /// ```
    pub fn enumerators<T: Enumeration>(&self) -> Result<Arc<EnumSet>, RegistryError> {
        self.build_or_get(&StaticSource::<T>::new())
    }

    /// Returns the cached set for the source's identifier, building it on first access.
    ///
    /// The set is built without holding any lock, so a declaration table may
    /// itself read other enumerations. Concurrent first accesses may each
    /// build a candidate; only the first one published is ever handed out.
    ///
    /// # Errors
    /// Returns [`RegistryError::Configuration`] for invalid declarations or
    /// when the identifier is already bound to a different declaration source.
    pub fn build_or_get(&self, source: &dyn DeclarationSource) -> Result<Arc<EnumSet>, RegistryError> {
        let type_id = source.type_id();

        let cached = self.sets.read().get(type_id).cloned();
        if let Some(set) = cached {
            trace!(type_id, "Enumeration served from cache");
            return check_origin(set, source);
        }

        let declared = self.sources.read().get(type_id).cloned();
        if let Some(declared) = declared
            && !same_source(declared.as_ref(), source)
        {
            return Err(RegistryError::configuration(
                &Arc::from(type_id),
                "type identifier is already declared by another source",
            ));
        }

        let built = EnumSet::build(Arc::from(type_id), source.origin(), source.declarations())
            .inspect_err(|err| warn!(type_id, %err, "Enumeration failed to build"))?;
        let key = Arc::clone(built.type_key());
        let members = built.len();

        let mut published = false;
        let set = {
            let mut sets = self.sets.write();
            Arc::clone(sets.entry(key).or_insert_with(|| {
                published = true;
                Arc::new(built)
            }))
        };

        if published {
            debug!(type_id, members, "Enumeration built");
            Ok(set)
        } else {
            trace!(type_id, "Enumeration published concurrently, discarding local build");
            check_origin(set, source)
        }
    }

    /// Registers a runtime declaration source (e.g. a catalog entry) under its identifier.
    ///
    /// # Errors
    /// Returns [`RegistryError::Configuration`] if the identifier is already
    /// declared or already built from another source.
    pub fn declare(&self, source: impl DeclarationSource + 'static) -> Result<(), RegistryError> {
        let type_id: Arc<str> = Arc::from(source.type_id());

        if self.sets.read().contains_key(&type_id) {
            return Err(RegistryError::configuration(
                &type_id,
                "type identifier is already bound to a built enumeration",
            ));
        }

        let mut sources = self.sources.write();
        if sources.contains_key(&type_id) {
            return Err(RegistryError::configuration(&type_id, "type identifier is already declared"));
        }
        trace!(type_id = &*type_id, "Enumeration declared");
        sources.insert(type_id, Arc::new(source));
        Ok(())
    }

    /// Returns the enumerators for a type identifier: a cached set, or a set
    /// built from a source registered with [`Registry::declare`].
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the known identifiers when
    /// nothing is declared under `type_id`, or the build error otherwise.
    pub fn enumerators_of(&self, type_id: &str) -> Result<Arc<EnumSet>, RegistryError> {
        if let Some(set) = self.sets.read().get(type_id).cloned() {
            return Ok(set);
        }

        let source = self.sources.read().get(type_id).cloned();
        let Some(source) = source else {
            return Err(RegistryError::not_found(
                &Arc::from("registry"),
                LookupKind::Type,
                format!("{type_id:?}"),
                self.type_ids().iter().map(ToString::to_string).collect(),
            ));
        };

        self.build_or_get(source.as_ref())
    }

    /// Whether `type_id` is declared or already built.
    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.sets.read().contains_key(type_id) || self.sources.read().contains_key(type_id)
    }

    /// Whether the enumeration for `type_id` has been built and cached.
    #[must_use]
    pub fn is_built(&self, type_id: &str) -> bool {
        self.sets.read().contains_key(type_id)
    }

    /// Every declared or built identifier, sorted.
    #[must_use]
    pub fn type_ids(&self) -> Vec<Arc<str>> {
        let mut ids: Vec<Arc<str>> = self.sets.read().keys().cloned().collect();
        ids.extend(self.sources.read().keys().cloned());
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Eagerly builds every declared enumeration so invalid declarations fail
    /// at start-up instead of on first use. Returns the number of sets built.
    ///
    /// # Errors
    /// Returns the first build error encountered; later sources are still
    /// attempted and logged.
    pub fn preload(&self) -> Result<usize, RegistryError> {
        let sources: Vec<Arc<dyn DeclarationSource>> =
            self.sources.read().values().cloned().collect();

        let mut first_error = None;
        let mut built = 0;
        for source in sources {
            match self.build_or_get(source.as_ref()) {
                Ok(_) => built += 1,
                Err(err) => {
                    first_error.get_or_insert(err);
                },
            }
        }

        debug!(built, "Registry preloaded");
        first_error.map_or(Ok(built), Err)
    }
}

/// The same registered source, or two adapters of the same Rust type.
fn same_source(declared: &dyn DeclarationSource, source: &dyn DeclarationSource) -> bool {
    std::ptr::addr_eq(declared, source)
        || matches!((declared.origin(), source.origin()), (Some(a), Some(b)) if a == b)
}

fn check_origin(
    set: Arc<EnumSet>,
    source: &dyn DeclarationSource,
) -> Result<Arc<EnumSet>, RegistryError> {
    match source.origin() {
        Some(origin) if set.origin() != Some(origin) => Err(RegistryError::configuration(
            set.type_key(),
            "type identifier is already bound to a different declaration source",
        )),
        _ => Ok(set),
    }
}
