use gardenist::entities::ModuleId;
use gardenist::storage::{load_or_empty, load_snapshot, parse_snapshot, StorageError};
use std::io::Write;

const SNAPSHOT: &str = r#"{
    "plants": [
        {"id": "p1", "common_name": "Basil", "scientific_name": "Ocimum basilicum", "image": "basil.jpg", "image_position": 30},
        {"id": "p2", "common_name": "Mint", "scientific_name": "Mentha"}
    ],
    "fertilizers": [
        {"id": "f1", "fertilizer_name": "Organic Kelp", "is_organic": true}
    ],
    "calendar": [
        {"id": "t1", "module": "florapedia", "entity_id": "p1", "date": "2025-06-10", "title": "Water basil"},
        {"id": "t2", "module": "growinggrounds", "entity_id": "g1", "date": "2025-06-11T18:45:00Z", "title": "Weed", "completed": true, "color": "amber"},
        {"id": "t3", "module": "nutribase", "entity_id": "f1", "date": "2025-06-12 07:30:00", "title": "Feed"}
    ],
    "recent_views": [
        {"item_id": "p1", "item_type": "plant", "module": "florapedia", "viewed_at": "2025-06-10T08:00:00Z"}
    ]
}"#;

#[test]
fn test_parse_snapshot_with_defaults() {
    let snapshot = parse_snapshot(SNAPSHOT).unwrap();

    assert_eq!(snapshot.collections.plants.len(), 2);
    assert_eq!(snapshot.collections.plants[0].image_position, 30);
    assert_eq!(snapshot.collections.plants[1].image_position, 50);
    assert!(snapshot.collections.fertilizers[0].is_organic);
    assert!(snapshot.collections.seasonal_tips.is_empty());

    let first = &snapshot.calendar[0];
    assert!(!first.completed);
    assert_eq!(first.color, "green");
    assert_eq!(first.module, ModuleId::Florapedia);
    assert_eq!(snapshot.recent_views.len(), 1);
}

#[test]
fn test_calendar_dates_drop_time_of_day() {
    let snapshot = parse_snapshot(SNAPSHOT).unwrap();
    let dates: Vec<String> = snapshot.calendar.iter().map(|t| t.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-06-10", "2025-06-11", "2025-06-12"]);
}

#[test]
fn test_duplicate_ids_rejected() {
    let json = r#"{"growing_grounds": [
        {"id": "g1", "name": "North bed"},
        {"id": "g1", "name": "South bed"}
    ]}"#;

    match parse_snapshot(json) {
        Err(StorageError::DuplicateId { module, id }) => {
            assert_eq!(module, ModuleId::GrowingGrounds);
            assert_eq!(id, "g1");
        }
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_same_id_in_different_collections_is_fine() {
    let json = r#"{
        "plants": [{"id": "x", "common_name": "A", "scientific_name": "B"}],
        "seasonal_tips": [{"id": "x", "title": "T", "description": "D"}]
    }"#;
    assert!(parse_snapshot(json).is_ok());
}

#[test]
fn test_image_position_out_of_range() {
    let json = r#"{"plants": [{"id": "p", "common_name": "A", "scientific_name": "B", "image_position": 140}]}"#;
    assert!(matches!(
        parse_snapshot(json),
        Err(StorageError::InvalidImagePosition { position: 140, .. })
    ));
}

#[test]
fn test_invalid_calendar_date() {
    let json = r#"{"calendar": [{"id": "t", "module": "home", "entity_id": "e", "date": "June 10", "title": "x"}]}"#;
    assert!(matches!(parse_snapshot(json), Err(StorageError::Json(_))));
}

#[test]
fn test_load_snapshot_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();

    let snapshot = load_snapshot(file.path()).unwrap();
    assert_eq!(snapshot.calendar.len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(matches!(load_snapshot(&path), Err(StorageError::Io { .. })));
    let empty = load_or_empty(&path).unwrap();
    assert!(empty.collections.plants.is_empty());
    assert!(empty.calendar.is_empty());
}
