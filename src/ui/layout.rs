//! Layout controller: turns the view state and the loaded data into the
//! panels the shell displays.

use chrono::NaiveDate;

use super::core::{AppContext, ViewState};
use super::dashboard::{self, TaskBuckets};
use super::filter;
use super::router::{self, ModuleConfig};
use super::selection;
use crate::entities::{CalendarTask, ItemRef, ModuleId};

/// Shown in the detail pane when no item resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub module_name: &'static str,
}

/// List and detail panels for the active module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleView<'a> {
    pub config: &'static ModuleConfig,
    pub items: Vec<ItemRef<'a>>,
    pub detail: Option<ItemRef<'a>>,
    pub can_add_new: bool,
    /// Present exactly when `detail` is `None`
    pub empty_state: Option<EmptyState>,
}

/// The home dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    pub today: NaiveDate,
    pub buckets: TaskBuckets<'a>,
    pub recent_items: Vec<ItemRef<'a>>,
    /// Item count per catalog module, in sidebar order
    pub counts: Vec<(ModuleId, usize)>,
}

/// Derive the list/detail panels for `state.active_module`.
#[must_use]
pub fn derive_module_view<'a>(state: &ViewState, ctx: &'a AppContext) -> ModuleView<'a> {
    let module = state.active_module;
    let config = router::resolve_module_config(module);
    let items = filter::filter(&ctx.collections, module, &state.search_term);
    let detail = selection::resolve_detail(&ctx.collections, module, state.selected_item_id.as_deref());

    let empty_state = match detail {
        Some(_) => None,
        None => Some(EmptyState {
            icon: ctx.icons.module(module),
            module_name: config.display_name,
        }),
    };

    ModuleView {
        config,
        items,
        detail,
        can_add_new: router::can_add_new(module),
        empty_state,
    }
}

/// Derive the home dashboard for `today`.
#[must_use]
pub fn derive_home_view(ctx: &AppContext, today: NaiveDate) -> HomeView<'_> {
    let buckets = dashboard::bucket_tasks_within(&ctx.calendar, today, ctx.config.dashboard.week_days);
    let recent = dashboard::dedupe_recent_views(&ctx.recent_views, ctx.config.dashboard.recent_limit);
    let recent_items = dashboard::resolve_recent_items(&ctx.collections, &recent);
    let counts = ModuleId::CATALOGS
        .into_iter()
        .map(|module| (module, ctx.collections.count(module)))
        .collect();

    HomeView {
        today,
        buckets,
        recent_items,
        counts,
    }
}

/// Tasks for the calendar module's day panel.
#[must_use]
pub fn derive_calendar_day(ctx: &AppContext, day: NaiveDate) -> Vec<&CalendarTask> {
    dashboard::tasks_on(&ctx.calendar, day)
}
