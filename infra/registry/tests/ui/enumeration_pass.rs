use ordum_registry::{Enumeration, EnumerationExt, RegistryError, enumeration};

pub struct Planet;

#[enumeration(crate = "ordum_registry", id = "solar::Planet")]
impl Planet {
    pub const MERCURY: u8 = 1;
    pub const VENUS: u8 = 2;
    pub const EARTH: u8 = 3;

    #[enumeration(skip)]
    pub const COUNT: usize = 3;
}

struct Quiet;

#[enumeration(crate = "ordum_registry", accessors = false)]
impl Quiet {
    const LOW: f64 = -0.5;
    const HIGH: f64 = 0.5;
}

pub struct Precision;

#[enumeration(crate = "ordum_registry")]
impl Precision {
    pub const SINGLE: f32 = 0.1;
    pub const DOUBLE: f64 = 0.1;
}

fn main() -> Result<(), RegistryError> {
    assert_eq!(Planet::TYPE_ID, "solar::Planet");
    assert_eq!(Planet::earth()?.ordinal(), 2);
    assert_eq!(Planet::enumerators()?.len(), Planet::COUNT);

    assert_eq!(Quiet::for_value(-0.5)?.name(), "LOW");
    assert_eq!(Quiet::HIGH, 0.5);

    assert_eq!(Precision::for_value(Precision::SINGLE)?.name(), "SINGLE");
    assert_eq!(Precision::for_value(0.1)?.name(), "DOUBLE");
    assert!(!Precision::has_value(f64::from(0.2_f32)));
    Ok(())
}
