use serde::{Deserialize, Serialize};

use super::{CompostingMethod, Fertilizer, GrowingGround, ModuleId, Plant, SeasonalTip};

/// Borrowed view over any catalog entry.
///
/// Derivations hand these out instead of cloning, so a filtered list or a
/// resolved detail always points back into the collections it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemRef<'a> {
    Plant(&'a Plant),
    Fertilizer(&'a Fertilizer),
    CompostingMethod(&'a CompostingMethod),
    GrowingGround(&'a GrowingGround),
    SeasonalTip(&'a SeasonalTip),
}

impl<'a> ItemRef<'a> {
    #[must_use]
    pub fn id(&self) -> &'a str {
        match *self {
            ItemRef::Plant(p) => &p.id,
            ItemRef::Fertilizer(f) => &f.id,
            ItemRef::CompostingMethod(c) => &c.id,
            ItemRef::GrowingGround(g) => &g.id,
            ItemRef::SeasonalTip(t) => &t.id,
        }
    }

    /// The field shown as the item's title in lists and detail headers.
    #[must_use]
    pub fn display_name(&self) -> &'a str {
        match *self {
            ItemRef::Plant(p) => &p.common_name,
            ItemRef::Fertilizer(f) => &f.fertilizer_name,
            ItemRef::CompostingMethod(c) => &c.method_name,
            ItemRef::GrowingGround(g) => &g.name,
            ItemRef::SeasonalTip(t) => &t.title,
        }
    }

    #[must_use]
    pub fn module(&self) -> ModuleId {
        match *self {
            ItemRef::Plant(_) => ModuleId::Florapedia,
            ItemRef::Fertilizer(_) => ModuleId::Nutribase,
            ItemRef::CompostingMethod(_) => ModuleId::CompostCorner,
            ItemRef::GrowingGround(_) => ModuleId::GrowingGrounds,
            ItemRef::SeasonalTip(_) => ModuleId::SeasonalTips,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&'a str> {
        match *self {
            ItemRef::Plant(p) => p.image.as_deref(),
            ItemRef::Fertilizer(f) => f.image.as_deref(),
            ItemRef::CompostingMethod(c) => c.image.as_deref(),
            ItemRef::GrowingGround(g) => g.image.as_deref(),
            ItemRef::SeasonalTip(t) => t.image.as_deref(),
        }
    }

    #[must_use]
    pub fn image_position(&self) -> u8 {
        match *self {
            ItemRef::Plant(p) => p.image_position,
            ItemRef::Fertilizer(f) => f.image_position,
            ItemRef::CompostingMethod(c) => c.image_position,
            ItemRef::GrowingGround(g) => g.image_position,
            ItemRef::SeasonalTip(t) => t.image_position,
        }
    }
}

/// The five catalog collections, owned by the application shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collections {
    pub plants: Vec<Plant>,
    pub fertilizers: Vec<Fertilizer>,
    pub composting_methods: Vec<CompostingMethod>,
    pub growing_grounds: Vec<GrowingGround>,
    pub seasonal_tips: Vec<SeasonalTip>,
}

impl Collections {
    /// All items of the collection behind `module`, in stored order.
    /// Modules without a collection yield an empty list.
    #[must_use]
    pub fn items(&self, module: ModuleId) -> Vec<ItemRef<'_>> {
        match module {
            ModuleId::Florapedia => self.plants.iter().map(ItemRef::Plant).collect(),
            ModuleId::Nutribase => self.fertilizers.iter().map(ItemRef::Fertilizer).collect(),
            ModuleId::CompostCorner => self
                .composting_methods
                .iter()
                .map(ItemRef::CompostingMethod)
                .collect(),
            ModuleId::GrowingGrounds => self.growing_grounds.iter().map(ItemRef::GrowingGround).collect(),
            ModuleId::SeasonalTips => self.seasonal_tips.iter().map(ItemRef::SeasonalTip).collect(),
            ModuleId::Home | ModuleId::Calendar | ModuleId::Profile | ModuleId::Settings => Vec::new(),
        }
    }

    #[must_use]
    pub fn count(&self, module: ModuleId) -> usize {
        match module {
            ModuleId::Florapedia => self.plants.len(),
            ModuleId::Nutribase => self.fertilizers.len(),
            ModuleId::CompostCorner => self.composting_methods.len(),
            ModuleId::GrowingGrounds => self.growing_grounds.len(),
            ModuleId::SeasonalTips => self.seasonal_tips.len(),
            ModuleId::Home | ModuleId::Calendar | ModuleId::Profile | ModuleId::Settings => 0,
        }
    }
}
