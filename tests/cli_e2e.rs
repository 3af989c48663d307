use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn homestock(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("homestock").unwrap();
    cmd.env("HOMESTOCK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("HOMESTOCK_LOG")
        .current_dir(home);
    cmd
}

fn add_fixture_items(home: &Path) {
    homestock(home)
        .args(["add", "Perceuse", "--room", "garage", "-q", "1", "-t", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added (1): Perceuse"));

    homestock(home)
        .args([
            "add",
            "Confiture",
            "--type",
            "food",
            "--room",
            "cuisine",
            "-q",
            "3",
            "--expiry",
            "2099-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added (2): Confiture"));
}

#[test]
fn test_add_and_list_grouped_by_room() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_fixture_items(temp_dir.path());

    homestock(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cuisine"))
        .stdout(predicate::str::contains("2. Confiture"))
        .stdout(predicate::str::contains("Expire le: 2099-01-01"))
        .stdout(predicate::str::contains("1. Perceuse"))
        .stdout(predicate::str::contains("Pièce: 🔧 Garage"));

    homestock(temp_dir.path())
        .args(["list", "--type", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Confiture"))
        .stdout(predicate::str::contains("Perceuse").not());

    assert!(temp_dir.path().join("inventoryItems.json").exists());
}

#[test]
fn test_shopping_list_and_stats() {
    let temp_dir = tempfile::tempdir().unwrap();

    homestock(temp_dir.path())
        .arg("shop")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Votre stock est complet ! Aucune suggestion pour le moment.",
        ));

    add_fixture_items(temp_dir.path());

    homestock(temp_dir.path())
        .arg("shop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perceuse (1 restants)"))
        .stdout(predicate::str::contains("Confiture").not());

    homestock(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total des articles: 2"))
        .stdout(predicate::str::contains("🔧 Garage - 🏠 Objets"))
        .stdout(predicate::str::contains("Stock faible: 1"));
}

#[test]
fn test_export_then_import_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_fixture_items(temp_dir.path());

    homestock(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 items"));
    let export_file = temp_dir.path().join("mon-inventaire.json");
    assert!(export_file.exists());

    homestock(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item deleted: Perceuse"));

    homestock(temp_dir.path())
        .args(["import", export_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 items"));

    homestock(temp_dir.path())
        .args(["export", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Perceuse\""))
        .stdout(predicate::str::contains("\"type\": \"objects\""));
}

#[test]
fn test_import_rejects_non_array() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_fixture_items(temp_dir.path());

    let bad = temp_dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"items": []}"#).unwrap();

    homestock(temp_dir.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    homestock(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perceuse"));
}

#[test]
fn test_delete_without_yes_on_pipe_keeps_item() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_fixture_items(temp_dir.path());

    homestock(temp_dir.path())
        .args(["delete", "1"])
        .write_stdin("o\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    homestock(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Perceuse"));
}

#[test]
fn test_unknown_index_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    homestock(temp_dir.path())
        .args(["view", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 4 not found"));
}

#[test]
fn test_config_default_room_used_by_add() {
    let temp_dir = tempfile::tempdir().unwrap();

    homestock(temp_dir.path())
        .args(["config", "default-room", "cave"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-room set to cave"));

    homestock(temp_dir.path())
        .args(["add", "Bordeaux"])
        .assert()
        .success();

    homestock(temp_dir.path())
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Cave\s+1").unwrap());
}

#[test]
fn test_edit_changes_room() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_fixture_items(temp_dir.path());

    homestock(temp_dir.path())
        .args(["edit", "1", "--room", "bureau"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated: Perceuse"));

    homestock(temp_dir.path())
        .args(["list", "--room", "bureau"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Perceuse"));
}

#[test]
fn test_import_replaces_corrupt_inventory() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("inventoryItems.json"), "{broken").unwrap();

    homestock(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    homestock(temp_dir.path())
        .args(["config", "export-file", "backup.json"])
        .assert()
        .success();

    let good = temp_dir.path().join("good.json");
    std::fs::write(
        &good,
        r#"[{"id": "7", "name": "Tabouret", "type": "objects", "room": "salon"},
            {"id": "1", "name": "Lanterne", "type": "objects", "room": "garage",
             "status": "perime"}]"#,
    )
    .unwrap();

    homestock(temp_dir.path())
        .args(["import", good.to_str().unwrap()])
        .assert()
        .success();

    homestock(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanterne"));
}

#[test]
fn test_id_prefix_selects_numeric_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = temp_dir.path().join("items.json");
    std::fs::write(
        &items,
        r#"[{"id": "7", "name": "Tabouret", "type": "objects", "room": "salon"},
            {"id": "1", "name": "Lanterne", "type": "objects", "room": "garage"}]"#,
    )
    .unwrap();

    homestock(temp_dir.path())
        .args(["import", items.to_str().unwrap()])
        .assert()
        .success();

    homestock(temp_dir.path())
        .args(["view", "id:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanterne"))
        .stdout(predicate::str::contains("Tabouret").not());
}
