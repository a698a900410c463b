use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn book(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json").env("CONTACTS_FILE", file);
    cmd
}

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    for (name, phone, email) in [
        ("Alice", "08031234567", "alice@example.com"),
        ("Bob", "08037654321", "bob@example.com"),
    ] {
        book(&file)
            .args(["add", "--name", name, "--phone", phone, "--email", email])
            .assert()
            .success();
    }

    // Search ignores case but needs the whole name
    book(&file)
        .args(["search", "--name", "ALICE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice | 08031234567 | alice@example.com"));

    book(&file)
        .args(["search", "--name", "Ali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact found with that name."));

    // Edit the phone only; name and email are kept
    book(&file)
        .args(["edit", "--index", "1", "--phone", "(080) 9123-4567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully!"));

    book(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Alice | (080) 9123-4567 | alice@example.com"))
        .stdout(predicate::str::contains("  2. Bob | 08037654321 | bob@example.com"));

    // A rejected edit leaves the record alone
    book(&file)
        .args(["edit", "--index", "2", "--email", "bob-at-example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please enter a valid email address"));

    book(&file)
        .args(["edit", "--index", "3", "--name", "Carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact at position 3"));

    book(&file)
        .args(["search", "--name", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob | 08037654321 | bob@example.com"));

    Ok(())
}
