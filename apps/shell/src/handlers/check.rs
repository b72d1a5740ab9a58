use anyhow::{Result, bail};
use ordum::Registry;
use tracing::debug;

/// Builds every declared enumeration, printing one status line per type.
///
/// # Errors
/// Fails when at least one enumeration is invalid.
pub fn check(registry: &Registry) -> Result<()> {
    let type_ids = registry.type_ids();
    let mut invalid = 0usize;

    for type_id in &type_ids {
        match registry.enumerators_of(type_id) {
            Ok(set) => println!("ok\t{type_id}\t{} members", set.len()),
            Err(err) => {
                invalid += 1;
                println!("invalid\t{type_id}\t{err}");
            },
        }
    }

    debug!(checked = type_ids.len(), invalid, "Check finished");
    if invalid > 0 {
        bail!("{invalid} of {} enumerations are invalid", type_ids.len());
    }
    Ok(())
}
