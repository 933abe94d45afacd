// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for roster management

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::Project;
use predicates::prelude::*;

#[test]
fn empty_roster_lists_nothing() {
    let project = Project::empty();

    project
        .tally(&["roster", "list"])
        .assert()
        .success()
        .stdout("Roster is empty.\n");
}

#[test]
fn add_canonicalizes_username() {
    let project = Project::empty();

    project
        .tally(&["roster", "add", "  @Carol_X ", "--first", "Carol"])
        .assert()
        .success()
        .stdout("Added 'carol_x' to the roster\n");

    project
        .tally(&["roster", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carol_x"))
        .stdout(predicate::str::contains("Carol"));
}

#[test]
fn duplicate_member_is_rejected() {
    let project = Project::with_roster();

    project
        .tally(&["roster", "add", "ALICE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("member already on roster: alice"))
        .stderr(predicate::str::contains("tally roster list"));
}

#[test]
fn removing_unknown_member_fails() {
    let project = Project::with_roster();

    project
        .tally(&["roster", "remove", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("member not found: ghost"));
}

#[test]
fn remove_drops_member_from_listing() {
    let project = Project::with_roster();

    project
        .tally(&["roster", "remove", "bob"])
        .assert()
        .success()
        .stdout("Removed 'bob' from the roster\n");

    let listing = project.stdout(&["roster", "list"]);
    assert!(listing.contains("alice"));
    assert!(!listing.contains("bob"));
}

#[test]
fn import_replaces_roster() {
    let project = Project::with_roster();
    let file = project.file(
        "members.json",
        r#"[
            {"username": "@Dave", "first_name": "Dave"},
            {"username": "erin", "last_name": "Jones"},
            {"username": "dave"}
        ]"#,
    );

    project
        .tally(&["roster", "import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Imported 2 members\n");

    let members: serde_json::Value =
        serde_json::from_str(&project.stdout(&["--format", "json", "roster", "list"])).unwrap();
    let usernames: Vec<&str> = members
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, ["dave", "erin"]);
}

#[test]
fn import_rejects_malformed_file() {
    let project = Project::with_roster();
    let file = project.file("members.json", r#"{"username": "dave"}"#);

    project
        .tally(&["roster", "import", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid roster file"))
        .stderr(predicate::str::contains("JSON array of members"));

    // Existing roster is untouched
    assert!(project.stdout(&["roster", "list"]).contains("alice"));
}
