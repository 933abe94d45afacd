// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_match_club_rules() {
    let settings = Settings::default();
    assert_eq!(settings.rules.likes, 1);
    assert_eq!(settings.rules.comments, 1);
    assert_eq!(settings.rules.tags, 5);
    assert_eq!(settings.rules.comment_cap, 4);
    assert_eq!(settings.threshold, 0.8);
}

#[test]
fn empty_file_yields_defaults() {
    assert_eq!(Settings::parse("").unwrap(), Settings::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let settings = Settings::parse(
        r#"
        [points]
        tags = 10

        [matching]
        threshold = 0.9
        "#,
    )
    .unwrap();

    assert_eq!(settings.rules.tags, 10);
    assert_eq!(settings.rules.comment_cap, 4);
    assert_eq!(settings.threshold, 0.9);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    for bad in ["0.0", "1.5", "-0.2"] {
        let content = format!("[matching]\nthreshold = {}\n", bad);
        assert!(matches!(
            Settings::parse(&content),
            Err(TallyError::InvalidSettings(_))
        ));
    }
}

#[test]
fn invalid_toml_is_rejected() {
    assert!(matches!(
        Settings::parse("[points\nlikes = "),
        Err(TallyError::InvalidSettings(_))
    ));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("tally.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.toml");
    std::fs::write(&path, "[points]\ncomment_cap = 2\n").unwrap();

    assert_eq!(Settings::load(&path).unwrap().rules.comment_cap, 2);
}

#[test]
fn point_value_by_kind() {
    let rules = PointRules::default();
    assert_eq!(rules.value(InteractionKind::Likes), 1);
    assert_eq!(rules.value(InteractionKind::Comments), 1);
    assert_eq!(rules.value(InteractionKind::Tags), 5);
}
