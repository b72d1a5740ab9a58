use std::borrow::Cow;
use std::sync::Arc;

/// What a failed lookup was searching by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LookupKind {
    Name,
    Value,
    Ordinal,
    #[strum(serialize = "enumeration type")]
    Type,
}

/// Errors raised while building or querying enumerations.
#[ordum_derive::ordum_error]
pub enum RegistryError {
    /// The declarations of an enumeration are unusable (ambiguous values,
    /// duplicate names, or a type identifier bound twice). Raised on every
    /// build attempt until the declarations are fixed.
    #[error("Invalid enumeration {type_id}{}: {message}", format_context(.context))]
    Configuration { type_id: Arc<str>, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The requested name, value, ordinal or type does not exist.
    #[error(
        "Unknown {kind} {input} in {type_id}{}; expected one of [{}]",
        format_context(.context),
        format_candidates(.candidates)
    )]
    NotFound {
        type_id: Arc<str>,
        kind: LookupKind,
        input: String,
        candidates: Vec<String>,
        context: Option<Cow<'static, str>>,
    },

    /// Programmer error, such as trying to reconstruct an enumerator from serialized state.
    #[error("Enumerators are singletons{}: {message}", format_context(.context))]
    Logic { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_candidates(candidates: &[String]) -> String {
    candidates.join(", ")
}

impl RegistryError {
    pub(crate) fn configuration(type_id: &Arc<str>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Configuration { type_id: Arc::clone(type_id), message: message.into(), context: None }
    }

    pub(crate) fn not_found(
        type_id: &Arc<str>,
        kind: LookupKind,
        input: impl Into<String>,
        candidates: Vec<String>,
    ) -> Self {
        Self::NotFound {
            type_id: Arc::clone(type_id),
            kind,
            input: input.into(),
            candidates,
            context: None,
        }
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The legal alternatives of a failed lookup; empty for other errors.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        match self {
            Self::NotFound { candidates, .. } => candidates,
            _ => &[],
        }
    }
}
