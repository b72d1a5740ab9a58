use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CARDS: &str = r#"
[[enumerations]]
id = "cards::Suit"
members = [
  { name = "HEARTS", value = "H" },
  { name = "SPADES", value = "S" },
  { name = "CLUBS", value = "C" },
  { name = "DIAMONDS", value = "D" },
]

[[enumerations]]
id = "cards::Rank"
members = [ { name = "ACE", value = 1 }, { name = "TEN", value = "1" } ]
"#;

const BROKEN: &str = r#"
[[enumerations]]
id = "broken::Dup"
members = [ { name = "A", value = 1 }, { name = "B", value = 1 } ]
"#;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn ordum(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ordum").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn lists_declared_types_sorted() {
    let dir = workspace(&[("cards.toml", CARDS)]);
    ordum(&dir)
        .args(["--catalog", "cards.toml", "types"])
        .assert()
        .success()
        .stdout("cards::Rank\ncards::Suit\n");
}

#[test]
fn lists_members_in_ordinal_order() {
    let dir = workspace(&[("cards.toml", CARDS)]);
    ordum(&dir)
        .args(["--catalog", "cards.toml", "list", "cards::Suit"])
        .assert()
        .success()
        .stdout("0\tHEARTS\t\"H\"\n1\tSPADES\t\"S\"\n2\tCLUBS\t\"C\"\n3\tDIAMONDS\t\"D\"\n");
}

#[test]
fn looks_up_by_name_value_and_ordinal() {
    let dir = workspace(&[("cards.toml", CARDS)]);

    ordum(&dir)
        .args(["--catalog", "cards.toml", "name", "cards::Suit", "CLUBS"])
        .assert()
        .success()
        .stdout("2\tCLUBS\t\"C\"\n");

    ordum(&dir)
        .args(["--catalog", "cards.toml", "value", "cards::Suit", "D"])
        .assert()
        .success()
        .stdout("3\tDIAMONDS\t\"D\"\n");

    ordum(&dir)
        .args(["--catalog", "cards.toml", "ordinal", "cards::Suit", "0"])
        .assert()
        .success()
        .stdout("0\tHEARTS\t\"H\"\n");
}

#[test]
fn value_lookups_are_kind_strict() {
    let dir = workspace(&[("cards.toml", CARDS)]);

    ordum(&dir)
        .args(["--catalog", "cards.toml", "value", "cards::Rank", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACE"));

    ordum(&dir)
        .args(["--catalog", "cards.toml", "value", "cards::Rank", "\"1\""])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEN"));
}

#[test]
fn out_of_range_ordinal_fails_with_candidates() {
    let dir = workspace(&[("cards.toml", CARDS)]);
    ordum(&dir)
        .args(["--catalog", "cards.toml", "ordinal", "cards::Suit", "4"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Unknown ordinal 4 in cards::Suit; expected one of [0, 1, 2, 3]",
        ));
}

#[test]
fn unknown_type_lists_known_identifiers() {
    let dir = workspace(&[("cards.toml", CARDS)]);
    ordum(&dir)
        .args(["--catalog", "cards.toml", "list", "cards::Joker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cards::Rank, cards::Suit"));
}

#[test]
fn check_reports_invalid_enumerations() {
    let dir = workspace(&[("cards.toml", CARDS), ("broken.toml", BROKEN)]);

    ordum(&dir).args(["--catalog", "cards.toml", "check"]).assert().success();

    ordum(&dir)
        .args(["--catalog", "cards.toml", "--catalog", "broken.toml", "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid\tbroken::Dup"))
        .stdout(predicate::str::contains("ok\tcards::Suit\t4 members"))
        .stderr(predicate::str::contains("1 of 3 enumerations are invalid"));
}

#[test]
fn catalogs_can_come_from_the_config_file() {
    let dir = workspace(&[
        ("cards.toml", CARDS),
        ("settings.toml", "[logging]\nlevel = \"warn\"\n\n[registry]\ncatalogs = [\"cards.toml\"]\n"),
    ]);

    ordum(&dir)
        .args(["--config", "settings.toml", "name", "cards::Rank", "ACE"])
        .assert()
        .success()
        .stdout("0\tACE\t1\n");
}

#[test]
fn missing_catalog_is_reported() {
    let dir = workspace(&[]);
    ordum(&dir)
        .args(["--catalog", "nope.toml", "types"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn preload_rejects_invalid_catalogs_up_front() {
    let dir = workspace(&[
        ("cards.toml", CARDS),
        ("broken.toml", BROKEN),
        ("eager.toml", "[registry]\ncatalogs = [\"cards.toml\", \"broken.toml\"]\npreload = true\n"),
        ("lazy.toml", "[registry]\ncatalogs = [\"cards.toml\", \"broken.toml\"]\npreload = false\n"),
    ]);

    ordum(&dir)
        .args(["--config", "eager.toml", "list", "cards::Suit"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Enumeration preload failed"))
        .stderr(predicate::str::contains("broken::Dup"));

    ordum(&dir)
        .args(["--config", "lazy.toml", "name", "cards::Suit", "CLUBS"])
        .assert()
        .success()
        .stdout("2\tCLUBS\t\"C\"\n");
}

#[test]
fn command_line_catalogs_add_to_configured_ones() {
    let dir = workspace(&[
        ("cards.toml", CARDS),
        ("broken.toml", BROKEN),
        ("settings.toml", "[registry]\ncatalogs = [\"broken.toml\"]\npreload = false\n"),
    ]);

    ordum(&dir)
        .args(["--config", "settings.toml", "--catalog", "cards.toml", "types"])
        .assert()
        .success()
        .stdout("broken::Dup\ncards::Rank\ncards::Suit\n");
}
