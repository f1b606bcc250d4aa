//! Detail resolution for the selected list item.

use crate::entities::{Collections, ItemRef, ModuleId};

/// Look up `item_id` in `module`'s collection.
///
/// Returns `None` when nothing is selected, when the id is not in that
/// collection, or when the module has no collection at all. The lookup is
/// scoped to `module`, so an id left over from another module never resolves.
#[must_use]
pub fn resolve_detail<'a>(
    collections: &'a Collections,
    module: ModuleId,
    item_id: Option<&str>,
) -> Option<ItemRef<'a>> {
    let item_id = item_id?;
    let found = find_item(collections, module, item_id);
    if found.is_none() {
        log::debug!("selected id '{}' not found in {}", item_id, module);
    }
    found
}

/// Linear scan of one collection by id.
#[must_use]
pub fn find_item<'a>(collections: &'a Collections, module: ModuleId, item_id: &str) -> Option<ItemRef<'a>> {
    match module {
        ModuleId::Florapedia => collections.plants.iter().find(|p| p.id == item_id).map(ItemRef::Plant),
        ModuleId::Nutribase => collections
            .fertilizers
            .iter()
            .find(|f| f.id == item_id)
            .map(ItemRef::Fertilizer),
        ModuleId::CompostCorner => collections
            .composting_methods
            .iter()
            .find(|c| c.id == item_id)
            .map(ItemRef::CompostingMethod),
        ModuleId::GrowingGrounds => collections
            .growing_grounds
            .iter()
            .find(|g| g.id == item_id)
            .map(ItemRef::GrowingGround),
        ModuleId::SeasonalTips => collections
            .seasonal_tips
            .iter()
            .find(|t| t.id == item_id)
            .map(ItemRef::SeasonalTip),
        ModuleId::Home | ModuleId::Calendar | ModuleId::Profile | ModuleId::Settings => None,
    }
}
