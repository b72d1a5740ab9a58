use anyhow::Result;
use ordum::{Enumerator, Registry, Scalar};

/// Interprets a command-line value: JSON scalars keep their kind (`1`, `1.5`,
/// `true`, `null`, `"1"`), anything else is taken as a plain string.
#[must_use]
pub fn parse_scalar(raw: &str) -> Scalar {
    serde_json::from_str::<Scalar>(raw).unwrap_or_else(|_| Scalar::from(raw.to_owned()))
}

pub fn render(enumerator: &Enumerator) -> String {
    format!("{}\t{}\t{}", enumerator.ordinal(), enumerator.name(), enumerator.value())
}

pub fn types(registry: &Registry) {
    for type_id in registry.type_ids() {
        println!("{type_id}");
    }
}

/// # Errors
/// Returns the registry error for unknown or invalid types.
pub fn list(registry: &Registry, type_id: &str) -> Result<()> {
    for enumerator in registry.enumerators_of(type_id)?.iter() {
        println!("{}", render(enumerator));
    }
    Ok(())
}

/// # Errors
/// Returns the registry error, listing the valid names.
pub fn by_name(registry: &Registry, type_id: &str, name: &str) -> Result<()> {
    let enumerator = registry.enumerators_of(type_id)?.for_name(name)?;
    println!("{}", render(&enumerator));
    Ok(())
}

/// # Errors
/// Returns the registry error, listing the valid values.
pub fn by_value(registry: &Registry, type_id: &str, raw: &str) -> Result<()> {
    let value = parse_scalar(raw);
    let enumerator = registry.enumerators_of(type_id)?.for_value(&value)?;
    println!("{}", render(&enumerator));
    Ok(())
}

/// # Errors
/// Returns the registry error, listing the valid ordinals.
pub fn by_ordinal(registry: &Registry, type_id: &str, ordinal: usize) -> Result<()> {
    let enumerator = registry.enumerators_of(type_id)?.for_ordinal(ordinal)?;
    println!("{}", render(&enumerator));
    Ok(())
}
