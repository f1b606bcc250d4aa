use crate::{
    config::Config,
    entities::{CalendarTask, Collections, RecentView},
    icons::IconService,
    storage::GardenSnapshot,
};

/// Read-only data the view derivations draw from.
pub struct AppContext {
    pub collections: Collections,
    pub calendar: Vec<CalendarTask>,
    pub recent_views: Vec<RecentView>,
    pub config: Config,
    pub icons: IconService,
}

impl AppContext {
    pub fn new(snapshot: GardenSnapshot, config: Config) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        Self {
            collections: snapshot.collections,
            calendar: snapshot.calendar,
            recent_views: snapshot.recent_views,
            config,
            icons,
        }
    }
}
