use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One declared `name = value` pair of an enumeration.
///
/// An enumeration's declaration table is an ordered list of these; the
/// position in the list becomes the enumerator's ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: Cow<'static, str>,
    pub value: Scalar,
}

impl Declaration {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Scalar>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}
