use crate::error::RegistryError;
use crate::source::Enumeration;
use ordum_domain::{Declaration, Scalar};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One immutable member of a closed enumeration.
///
/// Instances are only created by the [`Registry`](crate::Registry) and handed
/// out as `Arc<Enumerator>`. There is no `Clone`, and equality is identity:
/// two enumerators are equal only if they are the same instance.
#[derive(Debug)]
pub struct Enumerator {
    type_id: Arc<str>,
    name: Cow<'static, str>,
    value: Scalar,
    ordinal: usize,
}

impl Enumerator {
    pub(crate) fn new(type_id: Arc<str>, ordinal: usize, declaration: Declaration) -> Self {
        Self { type_id, name: declaration.name, value: declaration.value, ordinal }
    }

    /// The declaration name, unique within the enumeration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared scalar, unique within the enumeration.
    #[must_use]
    pub const fn value(&self) -> &Scalar {
        &self.value
    }

    /// Zero-based position in declaration order.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Identifier of the owning enumeration.
    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Whether this enumerator belongs to the enumeration `T`.
    #[must_use]
    pub fn is<T: Enumeration>(&self) -> bool {
        &*self.type_id == T::TYPE_ID
    }
}

impl fmt::Display for Enumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Enumerator {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Enumerator {}

impl Hash for Enumerator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

/// Serializes as the enumerator's value.
impl Serialize for Enumerator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// Always fails: the registry is the only source of enumerators. Deserialize
/// a [`Scalar`] and look it up with `for_value` instead.
impl<'de> Deserialize<'de> for Enumerator {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(D::Error::custom(RegistryError::Logic {
            message: "enumerators cannot be reconstructed from serialized state".into(),
            context: None,
        }))
    }
}
