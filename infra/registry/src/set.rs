use crate::enumerator::Enumerator;
use crate::error::{LookupKind, RegistryError};
use crate::validate::validate;
use fxhash::FxHashMap;
use ordum_domain::{Declaration, Scalar};
use std::any::TypeId;
use std::borrow::Cow;
use std::sync::Arc;

/// The built, immutable enumerator collection of one enumeration.
///
/// Members are kept in ordinal order; a name index backs `for_name`.
/// Value and ordinal lookups scan the members, which are few by nature.
#[derive(Debug)]
pub struct EnumSet {
    type_id: Arc<str>,
    origin: Option<TypeId>,
    members: Vec<Arc<Enumerator>>,
    by_name: FxHashMap<Cow<'static, str>, usize>,
}

impl EnumSet {
    /// Validates the full declaration table, then constructs one enumerator
    /// per declaration with ordinals in declaration order.
    pub(crate) fn build(
        type_id: Arc<str>,
        origin: Option<TypeId>,
        declarations: Vec<Declaration>,
    ) -> Result<Self, RegistryError> {
        if let Some(message) = validate(&declarations) {
            return Err(RegistryError::configuration(&type_id, message));
        }

        let mut by_name = FxHashMap::default();
        let members = declarations
            .into_iter()
            .enumerate()
            .map(|(ordinal, declaration)| {
                by_name.insert(declaration.name.clone(), ordinal);
                Arc::new(Enumerator::new(Arc::clone(&type_id), ordinal, declaration))
            })
            .collect();

        Ok(Self { type_id, origin, members, by_name })
    }

    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub(crate) fn type_key(&self) -> &Arc<str> {
        &self.type_id
    }

    pub(crate) const fn origin(&self) -> Option<TypeId> {
        self.origin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All enumerators in declaration order.
    #[must_use]
    pub fn enumerators(&self) -> &[Arc<Enumerator>] {
        &self.members
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Enumerator>> {
        self.members.iter()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.members.iter().map(|e| e.name())
    }

    /// Values ordered by ordinal.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Scalar> {
        self.members.iter().map(|e| e.value())
    }

    pub fn ordinals(&self) -> std::ops::Range<usize> {
        0..self.members.len()
    }

    #[must_use]
    pub fn get_name(&self, name: &str) -> Option<&Arc<Enumerator>> {
        self.by_name.get(name).map(|&ordinal| &self.members[ordinal])
    }

    #[must_use]
    pub fn get_value(&self, value: &Scalar) -> Option<&Arc<Enumerator>> {
        self.members.iter().find(|e| e.value() == value)
    }

    #[must_use]
    pub fn get_ordinal(&self, ordinal: usize) -> Option<&Arc<Enumerator>> {
        self.members.get(ordinal)
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid names.
    pub fn for_name(&self, name: &str) -> Result<Arc<Enumerator>, RegistryError> {
        self.get_name(name).cloned().ok_or_else(|| {
            RegistryError::not_found(
                &self.type_id,
                LookupKind::Name,
                format!("{name:?}"),
                self.names().map(str::to_owned).collect(),
            )
        })
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid values.
    pub fn for_value(&self, value: &Scalar) -> Result<Arc<Enumerator>, RegistryError> {
        self.get_value(value).cloned().ok_or_else(|| {
            RegistryError::not_found(
                &self.type_id,
                LookupKind::Value,
                value.to_string(),
                self.values().map(ToString::to_string).collect(),
            )
        })
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] listing the valid ordinals.
    pub fn for_ordinal(&self, ordinal: usize) -> Result<Arc<Enumerator>, RegistryError> {
        self.get_ordinal(ordinal).cloned().ok_or_else(|| {
            RegistryError::not_found(
                &self.type_id,
                LookupKind::Ordinal,
                ordinal.to_string(),
                self.ordinals().map(|o| o.to_string()).collect(),
            )
        })
    }

    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn has_value(&self, value: &Scalar) -> bool {
        self.get_value(value).is_some()
    }

    /// Exact bounds check: `0 <= ordinal < len`.
    #[must_use]
    pub fn has_ordinal(&self, ordinal: usize) -> bool {
        ordinal < self.members.len()
    }
}

impl<'a> IntoIterator for &'a EnumSet {
    type Item = &'a Arc<Enumerator>;
    type IntoIter = std::slice::Iter<'a, Arc<Enumerator>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
