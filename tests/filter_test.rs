mod common;

use common::sample_collections;
use gardenist::entities::{ItemRef, ModuleId};
use gardenist::ui::filter::{filter, filter_module};

fn ids(items: &[ItemRef<'_>]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

#[test]
fn test_empty_term_returns_collection_in_order() {
    let collections = sample_collections();
    for module in ModuleId::CATALOGS {
        let expected = ids(&collections.items(module));
        assert_eq!(ids(&filter(&collections, module, "")), expected, "{module}");
    }
}

#[test]
fn test_nutribase_organic_search() {
    let collections = sample_collections();
    let results = filter(&collections, ModuleId::Nutribase, "organic");
    assert_eq!(ids(&results), vec!["f1", "f3"]);
    for item in &results {
        assert!(item.display_name().to_lowercase().contains("organic"));
    }
}

#[test]
fn test_plants_match_common_or_scientific_name() {
    let collections = sample_collections();

    let by_common = filter(&collections, ModuleId::Florapedia, "BASIL");
    assert_eq!(ids(&by_common), vec!["p1", "p3"]);

    let by_scientific = filter(&collections, ModuleId::Florapedia, "lavandula");
    assert_eq!(ids(&by_scientific), vec!["p4"]);
}

#[test]
fn test_tips_match_title_or_description() {
    let collections = sample_collections();
    assert_eq!(ids(&filter(&collections, ModuleId::SeasonalTips, "frost")), vec!["t1"]);
    assert_eq!(ids(&filter(&collections, ModuleId::SeasonalTips, "tomatoes")), vec!["t2"]);
}

#[test]
fn test_composting_and_grounds_match_their_name() {
    let collections = sample_collections();
    assert_eq!(ids(&filter(&collections, ModuleId::CompostCorner, "vermi")), vec!["c2"]);
    assert_eq!(ids(&filter(&collections, ModuleId::GrowingGrounds, "bed")), vec!["g1"]);
}

#[test]
fn test_results_are_subset_of_active_collection() {
    let collections = sample_collections();
    let results = filter(&collections, ModuleId::Florapedia, "o");
    assert!(!results.is_empty());
    for item in &results {
        assert_eq!(item.module(), ModuleId::Florapedia);
        assert!(collections.plants.iter().any(|p| p.id == item.id()));
    }
}

#[test]
fn test_non_catalog_modules_have_no_items() {
    let collections = sample_collections();
    for module in [ModuleId::Home, ModuleId::Calendar, ModuleId::Profile, ModuleId::Settings] {
        assert!(filter(&collections, module, "").is_empty());
        assert!(filter(&collections, module, "basil").is_empty());
    }
}

#[test]
fn test_unknown_module_name_yields_empty() {
    let collections = sample_collections();
    assert!(filter_module(&collections, "orchard", "").is_empty());
    assert_eq!(ids(&filter_module(&collections, "nutribase", "worm")), vec!["f4"]);
}

#[test]
fn test_filter_does_not_touch_collections() {
    let collections = sample_collections();
    let before = collections.clone();
    let _ = filter(&collections, ModuleId::Florapedia, "basil");
    assert_eq!(collections, before);
}
