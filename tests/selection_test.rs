mod common;

use common::sample_collections;
use gardenist::entities::{ItemRef, ModuleId};
use gardenist::ui::selection::{find_item, resolve_detail};

#[test]
fn test_resolves_selected_item() {
    let collections = sample_collections();
    let detail = resolve_detail(&collections, ModuleId::GrowingGrounds, Some("g2"));
    match detail {
        Some(ItemRef::GrowingGround(ground)) => assert_eq!(ground.name, "Balcony Pots"),
        other => panic!("expected growing ground, got {:?}", other),
    }
}

#[test]
fn test_missing_id_resolves_to_none() {
    let collections = sample_collections();
    assert!(resolve_detail(&collections, ModuleId::GrowingGrounds, Some("xyz")).is_none());
}

#[test]
fn test_no_selection_resolves_to_none() {
    let collections = sample_collections();
    assert!(resolve_detail(&collections, ModuleId::Florapedia, None).is_none());
}

#[test]
fn test_id_from_another_module_does_not_resolve() {
    let collections = sample_collections();
    // "p1" is a plant; looking it up while fertilizers are active finds nothing
    assert!(resolve_detail(&collections, ModuleId::Nutribase, Some("p1")).is_none());
    assert!(resolve_detail(&collections, ModuleId::Florapedia, Some("p1")).is_some());
}

#[test]
fn test_modules_without_collection_never_resolve() {
    let collections = sample_collections();
    assert!(find_item(&collections, ModuleId::Home, "p1").is_none());
    assert!(find_item(&collections, ModuleId::Settings, "g1").is_none());
}
