use ordum_domain::{Declaration, Scalar};
use std::fmt::Write as _;

/// Groups declaration names by strictly equal value and keeps only the
/// groups with more than one name. Groups follow first-declaration order.
pub(crate) fn ambiguous_values(declarations: &[Declaration]) -> Vec<(&Scalar, Vec<&str>)> {
    let mut groups: Vec<(&Scalar, Vec<&str>)> = Vec::new();

    for declaration in declarations {
        if let Some(i) = groups.iter().position(|(value, _)| **value == declaration.value) {
            groups[i].1.push(&*declaration.name);
        } else {
            groups.push((&declaration.value, vec![&*declaration.name]));
        }
    }

    groups.retain(|(_, names)| names.len() > 1);
    groups
}

/// Names declared more than once, each reported once.
pub(crate) fn duplicate_names(declarations: &[Declaration]) -> Vec<&str> {
    let mut seen = fxhash::FxHashSet::default();
    let mut duplicates = Vec::new();

    for declaration in declarations {
        let name: &str = &declaration.name;
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }

    duplicates
}

/// Checks the whole table before anything is constructed. Returns a
/// description of every problem found, or `None` when the table is valid.
pub(crate) fn validate(declarations: &[Declaration]) -> Option<String> {
    let mut problems = Vec::new();

    let ambiguous = ambiguous_values(declarations);
    if !ambiguous.is_empty() {
        let mut message = String::from("ambiguous enumerator values: ");
        for (i, (value, names)) in ambiguous.iter().enumerate() {
            if i > 0 {
                message.push_str("; ");
            }
            let _ = write!(message, "{value} => [{}]", names.join(", "));
        }
        problems.push(message);
    }

    let duplicates = duplicate_names(declarations);
    if !duplicates.is_empty() {
        problems.push(format!("duplicate enumerator names: [{}]", duplicates.join(", ")));
    }

    if problems.is_empty() { None } else { Some(problems.join("; ")) }
}
