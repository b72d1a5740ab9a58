use ordum::domain::config::OrdumConfig;
use ordum::prelude::*;
use std::io::Write;
use std::sync::Arc;

pub struct Weekday;

#[enumeration]
impl Weekday {
    pub const MONDAY: u8 = 1;
    pub const TUESDAY: u8 = 2;
    pub const WEDNESDAY: u8 = 3;
}

pub struct Mood;

#[enumeration(id = "facade::Mood")]
impl Mood {
    pub const HAPPY: &'static str = ":)";
    pub const SAD: &'static str = ":(";
    pub const ALSO_HAPPY: &'static str = Self::HAPPY;
}

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn default_crate_path_resolves_through_the_facade() -> Result<(), RegistryError> {
    assert_eq!(Weekday::tuesday()?.ordinal(), 1);
    assert_eq!(Weekday::for_value(3_u8)?.name(), "WEDNESDAY");
    assert!(Arc::ptr_eq(&Weekday::monday()?, &Weekday::for_ordinal(0)?));
    assert_eq!(Weekday::TYPE_ID, concat!(module_path!(), "::Weekday"));
    Ok(())
}

#[test]
fn computed_duplicates_are_configuration_errors() {
    let err = Mood::happy().unwrap_err();
    assert!(err.is_configuration());

    let message = err.to_string();
    assert!(message.contains("facade::Mood"), "{message}");
    assert!(message.contains("[HAPPY, ALSO_HAPPY]"), "{message}");
}

#[test]
fn init_declares_and_preloads_configured_catalogs() {
    let catalog = catalog_file(
        r##"
[[enumerations]]
id = "facade::Color"
members = [ { name = "RED", value = "#f00" }, { name = "GREEN", value = "#0f0" } ]
"##,
    );

    let mut config = OrdumConfig::default();
    config.registry.catalogs.push(catalog.path().to_path_buf());

    let registry = Registry::new();
    assert_eq!(ordum::init(&config, &registry).unwrap(), 1);
    assert!(registry.is_built("facade::Color"));
    assert_eq!(
        registry.enumerators_of("facade::Color").unwrap().for_value(&Scalar::from("#0f0")).unwrap().name(),
        "GREEN"
    );
}

#[test]
fn init_reports_invalid_catalogs_when_preloading() {
    let catalog = catalog_file(
        r#"
[[enumerations]]
id = "facade::Broken"
members = [ { name = "A", value = 1.5 }, { name = "B", value = 1.5 } ]
"#,
    );

    let mut config = OrdumConfig::default();
    config.registry.catalogs.push(catalog.path().to_path_buf());

    let err = ordum::init(&config, &Registry::new()).unwrap_err();
    assert!(matches!(err, ordum::InitError::Registry { .. }), "{err}");

    config.registry.preload = false;
    let registry = Registry::new();
    assert_eq!(ordum::init(&config, &registry).unwrap(), 1);
    assert!(registry.enumerators_of("facade::Broken").is_err());
}

#[test]
fn enumerators_serialize_as_their_value() {
    let monday = Weekday::monday().unwrap();
    assert_eq!(serde_json::to_value(&*monday).unwrap(), serde_json::json!(1));
    assert!(ordum::features::is_enabled("catalog"));
}
