//! End-to-end tests driving the compiled binary through its stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn addrbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("ADDRBOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list() {
    let data_dir = TempDir::new().unwrap();

    addrbook(&data_dir)
        .write_stdin("1\nJohn\nDoe\n555-0100\njohn@example.com\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact John_Doe."));

    addrbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("555-0100"));
}

#[test]
fn contacts_survive_restart() {
    let data_dir = TempDir::new().unwrap();

    addrbook(&data_dir)
        .write_stdin("1\nJane\nSmith\n555-0101\njane@example.com\n5\n")
        .assert()
        .success();

    // Fresh process, same data dir: search is case-insensitive
    addrbook(&data_dir)
        .write_stdin("2\nJANE\nsmith\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Key:        Jane_Smith"));
}

#[test]
fn delete_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();

    addrbook(&data_dir)
        .write_stdin("1\nJohn\nDoe\n555\nj@x.com\n5\n")
        .assert()
        .success();

    addrbook(&data_dir)
        .write_stdin("4\nJohn\nDoe\nno\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."));

    addrbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John_Doe"));

    addrbook(&data_dir)
        .write_stdin("4\nJohn\nDoe\nyes\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted John_Doe."));

    addrbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn corrupt_store_is_fatal() {
    let data_dir = TempDir::new().unwrap();
    let contacts_file = data_dir.path().join("data").join("contacts.json");
    std::fs::create_dir_all(contacts_file.parent().unwrap()).unwrap();
    std::fs::write(&contacts_file, "{ this is not json").unwrap();

    addrbook(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    addrbook(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.json"))
        .stdout(predicate::str::contains("Confirm max retries: 3"))
        .stdout(predicate::str::contains("Date format:         %Y-%m-%d"));
}

#[test]
fn empty_input_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    addrbook(&data_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address Book Menu:"));
}
