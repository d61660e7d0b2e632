//! Integration tests: load a dataset from disk and look up items by date.

use std::io::Write;

use vana_calendar::VanaDate;
use vana_guild::{Guild, GuildData, GuildError, Pattern, SkillRank, build_schedule};

const DATASET: &str = r#"{
    "0": {
        "1": {
            "0": [ { "id": 4401, "name": "Moat Carp", "points": 100, "max": 1000 } ],
            "2": [ { "id": 4443, "name": "Cobalt Jellyfish", "points": 150, "max": 1200 } ]
        }
    },
    "8": {
        "1": {
            "0": [
                { "id": 4489, "name": "Tortilla", "points": 60, "max": 2200 },
                { "id": 4490, "name": "Pickled Herring", "points": 80, "max": 2200 }
            ]
        }
    }
}"#;

fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write dataset");
    file
}

#[test]
fn load_from_path() {
    let file = write_dataset(DATASET);
    let data = GuildData::from_path(file.path()).expect("dataset loads");
    assert_eq!(data.n_guilds(), 2);
    let pattern = Pattern::new(1).unwrap();
    assert_eq!(data.items(Guild::Cooking, pattern, 0).len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");
    let err = GuildData::from_path(&path).unwrap_err();
    assert!(matches!(err, GuildError::Io { path: p, .. } if p == path));
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_dataset("{ not json");
    let err = GuildData::from_path(file.path()).unwrap_err();
    assert!(matches!(err, GuildError::Parse { .. }));
}

#[test]
fn schedule_for_calendar_date() {
    let file = write_dataset(DATASET);
    let data = GuildData::from_path(file.path()).unwrap();
    let pattern = Pattern::new(1).unwrap();

    // 886/03/21 is 80 Vana'diel days in: 3 Earth days.
    let date = VanaDate::new(886, 3, 21).unwrap();
    let earth_days = date.day_count().earth_days;
    assert_eq!(earth_days, 3);

    let schedule = build_schedule(
        &data,
        &[Guild::Fishing, Guild::Cooking],
        pattern,
        earth_days,
        SkillRank::Novice,
    );
    assert_eq!(schedule.earth_days, 3);

    // Every period from Novice (4 days) up is longer than 3 days, so each
    // rank sits in slot 3, and the dataset stores nothing there.
    let fishing = &schedule.guilds[0];
    assert!(fishing.available);
    assert!(fishing.ranks.iter().all(|r| r.rotation_day == 3));
    assert!(fishing.ranks.iter().all(|r| r.items.is_empty()));

    let cooking = &schedule.guilds[1];
    assert!(cooking.ranks.iter().all(|r| r.rotation_day == 3));
}

#[test]
fn slot_zero_on_epoch() {
    let file = write_dataset(DATASET);
    let data = GuildData::from_path(file.path()).unwrap();
    let pattern = Pattern::new(1).unwrap();
    let date = VanaDate::new(886, 1, 1).unwrap();

    let schedule = build_schedule(
        &data,
        &[Guild::Cooking],
        pattern,
        date.day_count().earth_days,
        SkillRank::Novice,
    );
    for row in &schedule.guilds[0].ranks {
        assert_eq!(row.rotation_day, 0);
        assert_eq!(row.items.len(), 2);
        assert_eq!(row.items[0].item.name, "Tortilla");
        // ceil(2200 / 60)
        assert_eq!(row.items[0].quantity, 37);
    }
}

#[test]
fn slot_two_for_fishing() {
    let file = write_dataset(DATASET);
    let data = GuildData::from_path(file.path()).unwrap();
    let pattern = Pattern::new(1).unwrap();

    let schedule = build_schedule(&data, &[Guild::Fishing], pattern, 2, SkillRank::Novice);
    for row in &schedule.guilds[0].ranks {
        assert_eq!(row.rotation_day, 2);
        assert_eq!(row.items[0].item.name, "Cobalt Jellyfish");
        assert_eq!(row.items[0].quantity, 8);
    }
}
