use ordum_derive::ordum_error;
use std::borrow::Cow;

#[ordum_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing value")]
    Missing {},
}

fn parse(raw: &str) -> Result<i64, DemoError> {
    Ok(raw.parse::<i64>().context("reading ordinal")?)
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (reading ordinal): "));

    let missing: Result<(), DemoError> = Err(DemoError::Missing {});
    assert_eq!(missing.context("ignored").unwrap_err().to_string(), "Missing value");
}
