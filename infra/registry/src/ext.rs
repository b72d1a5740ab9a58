use crate::enumerator::Enumerator;
use crate::error::RegistryError;
use crate::registry::Registry;
use crate::set::EnumSet;
use crate::source::Enumeration;
use ordum_domain::Scalar;
use std::sync::Arc;

/// Lookups on an [`Enumeration`] type, served by [`Registry::global`].
///
/// Implemented for every `Enumeration`; bring it into scope (or use the
/// prelude) to call `Suit::for_name("HEARTS")` and friends.
pub trait EnumerationExt: Enumeration + Sized {
    /// The cached enumerator set, built on first access.
    ///
    /// # Errors
    /// Returns [`RegistryError::Configuration`] if the declarations are ambiguous.
    fn enum_set() -> Result<Arc<EnumSet>, RegistryError> {
        Registry::global().enumerators::<Self>()
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid names, or the build error.
    fn for_name(name: &str) -> Result<Arc<Enumerator>, RegistryError> {
        Self::enum_set()?.for_name(name)
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid values, or the build error.
    fn for_value(value: impl Into<Scalar>) -> Result<Arc<Enumerator>, RegistryError> {
        Self::enum_set()?.for_value(&value.into())
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid ordinals, or the build error.
    fn for_ordinal(ordinal: usize) -> Result<Arc<Enumerator>, RegistryError> {
        Self::enum_set()?.for_ordinal(ordinal)
    }

    /// All enumerators in declaration order.
    ///
    /// # Errors
    /// Returns the build error if the declarations are ambiguous.
    fn enumerators() -> Result<Vec<Arc<Enumerator>>, RegistryError> {
        Ok(Self::enum_set()?.enumerators().to_vec())
    }

    /// # Errors
    /// Returns the build error if the declarations are ambiguous.
    fn names() -> Result<Vec<String>, RegistryError> {
        Ok(Self::enum_set()?.names().map(str::to_owned).collect())
    }

    /// Values in ordinal order.
    ///
    /// # Errors
    /// Returns the build error if the declarations are ambiguous.
    fn values() -> Result<Vec<Scalar>, RegistryError> {
        Ok(Self::enum_set()?.values().cloned().collect())
    }

    /// # Errors
    /// Returns the build error if the declarations are ambiguous.
    fn ordinals() -> Result<Vec<usize>, RegistryError> {
        Ok(Self::enum_set()?.ordinals().collect())
    }

    /// Never fails: an enumeration that cannot be built has no names.
    fn has_name(name: &str) -> bool {
        Self::enum_set().is_ok_and(|set| set.has_name(name))
    }

    fn has_value(value: impl Into<Scalar>) -> bool {
        let value = value.into();
        Self::enum_set().is_ok_and(|set| set.has_value(&value))
    }

    fn has_ordinal(ordinal: usize) -> bool {
        Self::enum_set().is_ok_and(|set| set.has_ordinal(ordinal))
    }
}

impl<T: Enumeration> EnumerationExt for T {}
