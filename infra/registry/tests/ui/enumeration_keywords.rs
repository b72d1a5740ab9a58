use ordum_registry::{RegistryError, enumeration};

pub struct Token;

#[enumeration(crate = "ordum_registry")]
impl Token {
    pub const TYPE: &'static str = "type";
    pub const SELF: &'static str = "self";
    pub const MATCH_ARM: &'static str = "match-arm";
}

fn main() -> Result<(), RegistryError> {
    assert_eq!(Token::r#type()?.name(), "TYPE");
    assert_eq!(Token::self_()?.name(), "SELF");
    assert_eq!(Token::match_arm()?.ordinal(), 2);
    Ok(())
}
