//! Declaration sources: where an enumeration's ordered `name = value` table comes from.

use ordum_domain::Declaration;
use ordum_domain::catalog::EnumerationDecl;
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

/// A closed enumeration declared in Rust.
///
/// Usually generated by the `#[enumeration]` attribute, but a hand-written
/// impl works the same way.
///
/// # Examples
/// ```rust
/// use ordum_registry::{Declaration, Enumeration, EnumerationExt};
///
/// struct Answer;
///
/// impl Enumeration for Answer {
///     const TYPE_ID: &'static str = "docs::Answer";
///
///     fn declarations() -> Vec<Declaration> {
///         vec![Declaration::new("NO", false), Declaration::new("YES", true)]
///     }
/// }
///
/// # fn main() -> Result<(), ordum_registry::RegistryError> {
/// assert_eq!(Answer::for_value(true)?.name(), "YES");
/// assert_eq!(Answer::for_name("NO")?.ordinal(), 0);
/// # Ok(())
/// # }
/// ```
pub trait Enumeration: 'static {
    /// Stable identifier used as the registry key.
    const TYPE_ID: &'static str;

    /// The declared members, in declaration order.
    fn declarations() -> Vec<Declaration>;
}

/// Anything the registry can build an enumeration from.
pub trait DeclarationSource: fmt::Debug + Send + Sync {
    fn type_id(&self) -> &str;

    fn declarations(&self) -> Vec<Declaration>;

    /// The Rust type behind the declarations, if any. Used to reject two
    /// different types claiming the same identifier.
    fn origin(&self) -> Option<TypeId> {
        None
    }
}

/// Adapts a Rust [`Enumeration`] into a [`DeclarationSource`].
pub struct StaticSource<T>(PhantomData<fn() -> T>);

impl<T: Enumeration> StaticSource<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Enumeration> Default for StaticSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Enumeration> fmt::Debug for StaticSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticSource").field(&T::TYPE_ID).finish()
    }
}

impl<T: Enumeration> DeclarationSource for StaticSource<T> {
    fn type_id(&self) -> &str {
        T::TYPE_ID
    }

    fn declarations(&self) -> Vec<Declaration> {
        T::declarations()
    }

    fn origin(&self) -> Option<TypeId> {
        Some(TypeId::of::<T>())
    }
}

/// Catalog entries are declared at runtime under their `id`.
impl DeclarationSource for EnumerationDecl {
    fn type_id(&self) -> &str {
        &self.id
    }

    fn declarations(&self) -> Vec<Declaration> {
        self.members.clone()
    }
}
