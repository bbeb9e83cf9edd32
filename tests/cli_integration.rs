use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn lunchvote(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lunchvote").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn list_seeds_the_store_on_first_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("성수족발 본점"))
        .stdout(predicate::str::contains("소문난성수감자탕"));

    assert!(db.exists());

    // The seeded file reads back unchanged.
    lunchvote(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("꿉당 성수점"));
}

#[test]
fn vote_acknowledges_and_rerenders_the_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .arg("vote")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vote recorded for 성수족발 본점!"))
        .stdout(predicate::str::contains("Top picks"))
        .stdout(predicate::str::contains("Current results"));

    // Seed row 1 had 10 votes; the results table now shows 11.
    lunchvote(&db)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("11"));
}

#[test]
fn vote_out_of_range_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .arg("vote")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No restaurant at position 99"));
}

#[test]
fn board_shows_only_the_requested_count() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .arg("board")
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("소문난성수감자탕"))
        .stdout(predicate::str::contains("성수족발 본점"))
        .stdout(predicate::str::contains("꿉당 성수점").not());
}

#[test]
fn admin_rejects_a_wrong_password() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .args(["admin", "--password", "nope", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong password."));
}

#[test]
fn admin_requires_a_password_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .args(["admin", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin password required"));
}

#[test]
fn admin_shows_the_editor_grid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    lunchvote(&db)
        .args(["admin", "--password", "admin", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin access granted."))
        .stdout(predicate::str::contains("RESTAURANT"));
}

#[test]
fn admin_save_replaces_the_table() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("restaurant_db.csv");

    // An edited table without ids: the parse edge assigns them.
    let edited = temp_dir.path().join("edited.csv");
    std::fs::write(
        &edited,
        "name,menu,distance,map_link,photo_url,votes\n\
         Pho Corner,Pho,350m,https://maps.example/pho,,2\n",
    )
    .unwrap();

    lunchvote(&db)
        .args(["admin", "--password", "admin", "save"])
        .arg(&edited)
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurant table saved."));

    lunchvote(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pho Corner"))
        .stdout(predicate::str::contains("성수족발 본점").not());
}
