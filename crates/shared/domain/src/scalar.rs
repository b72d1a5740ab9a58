use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The scalar value carried by an enumerator.
///
/// Equality is strict: the variant and the payload must both match, so
/// `Int(1)`, `Float(1.0)` and `Str("1")` are three distinct values.
/// Floats compare with IEEE semantics, so `NaN` never equals anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'static, str>),
}

impl Scalar {
    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Strings are quoted and floats always carry a fraction, so `1`, `1.0` and
/// `"1"` stay distinguishable in error messages.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<()> for Scalar {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! scalar_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(i: $ty) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&'static str> for Scalar {
    fn from(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for Scalar {
    fn from(s: Cow<'static, str>) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_strict_across_variants() {
        assert_ne!(Scalar::Int(1), Scalar::from("1"));
        assert_ne!(Scalar::Int(1), Scalar::Float(1.0));
        assert_ne!(Scalar::Bool(false), Scalar::Null);
        assert_eq!(Scalar::from(7_u8), Scalar::Int(7));
        assert_eq!(Scalar::from("H"), Scalar::Str("H".to_owned().into()));
    }

    #[test]
    fn nan_never_matches() {
        let nan = Scalar::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn display_keeps_kinds_apart() {
        assert_eq!(Scalar::Int(1).to_string(), "1");
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::from("1").to_string(), "\"1\"");
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::from(None::<i32>).to_string(), "null");
    }
}
