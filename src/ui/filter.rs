//! Live search over the active catalog.
//!
//! Each catalog searches its own fields; the table lives in [`matches`] so
//! adding a catalog forces a decision about what it searches.

use crate::entities::{Collections, ItemRef, ModuleId};

/// Items of `module`'s collection whose searchable fields contain `search_term`,
/// ignoring case. An empty term returns the whole collection. Order is the
/// collection's own; nothing is ranked and nothing is mutated.
#[must_use]
pub fn filter<'a>(collections: &'a Collections, module: ModuleId, search_term: &str) -> Vec<ItemRef<'a>> {
    let items = collections.items(module);
    if search_term.is_empty() {
        return items;
    }

    let needle = search_term.to_lowercase();
    let results: Vec<ItemRef<'a>> = items.into_iter().filter(|item| matches(item, &needle)).collect();
    log::debug!("search '{}' in {} matched {} item(s)", search_term, module, results.len());
    results
}

/// String-keyed entry point: an unrecognized module yields no results.
#[must_use]
pub fn filter_module<'a>(collections: &'a Collections, module: &str, search_term: &str) -> Vec<ItemRef<'a>> {
    match module.parse::<ModuleId>() {
        Ok(module) => filter(collections, module, search_term),
        Err(err) => {
            log::debug!("{}, returning no results", err);
            Vec::new()
        }
    }
}

/// `needle` must already be lowercase.
fn matches(item: &ItemRef<'_>, needle: &str) -> bool {
    match *item {
        ItemRef::Plant(p) => contains(&p.common_name, needle) || contains(&p.scientific_name, needle),
        ItemRef::Fertilizer(f) => contains(&f.fertilizer_name, needle),
        ItemRef::CompostingMethod(c) => contains(&c.method_name, needle),
        ItemRef::GrowingGround(g) => contains(&g.name, needle),
        ItemRef::SeasonalTip(t) => contains(&t.title, needle) || contains(&t.description, needle),
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
