//! Declaration catalogs: enumerations declared in data files rather than code.

use crate::declaration::Declaration;
use serde::{Deserialize, Serialize};

/// A document holding any number of enumeration declarations.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub enumerations: Vec<EnumerationDecl>,
}

/// A single enumeration: its stable type identifier and ordered members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationDecl {
    pub id: String,
    #[serde(default)]
    pub members: Vec<Declaration>,
}
