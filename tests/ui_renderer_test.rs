mod common;

use common::{day, sample_collections, task};
use gardenist::config::Config;
use gardenist::entities::ModuleId;
use gardenist::icons::{IconService, IconTheme};
use gardenist::storage::GardenSnapshot;
use gardenist::ui::core::{Action, AppContext, ViewState};
use gardenist::ui::renderer::{render_calendar_day, render_home, render_module, render_modules};
use gardenist::ui::{derive_calendar_day, derive_home_view, derive_module_view, router};

fn context() -> AppContext {
    let snapshot = GardenSnapshot {
        collections: sample_collections(),
        calendar: vec![task("a", "Water tomatoes", day(2025, 6, 10), false)],
        recent_views: Vec::new(),
    };
    AppContext::new(snapshot, Config::default())
}

#[test]
fn test_render_home() {
    let ctx = context();
    let home = derive_home_view(&ctx, day(2025, 6, 10));
    let text = render_home(&home, &ctx.icons);

    assert!(text.contains("Water tomatoes (today)"));
    assert!(text.contains("[green]"));
    assert!(text.contains("No recently viewed items"));
    assert!(text.contains("Florapedia"));
}

#[test]
fn test_render_module_with_detail() {
    let ctx = context();
    let state = ViewState::new(ModuleId::Nutribase).apply(Action::SelectItem("f1".to_string()));
    let text = render_module(&derive_module_view(&state, &ctx), &ctx.icons);

    assert!(text.contains("NutriBase (4 items)"));
    assert!(text.contains("== Organic Fish Emulsion =="));
    assert!(text.contains("> f1"));
}

#[test]
fn test_render_module_empty_state() {
    let ctx = context();
    let state = ViewState::new(ModuleId::GrowingGrounds)
        .apply(Action::SetSearch("greenhouse".to_string()))
        .apply(Action::SelectItem("xyz".to_string()));
    let text = render_module(&derive_module_view(&state, &ctx), &ctx.icons);

    assert!(text.contains("No matching items"));
    assert!(text.contains("G Growing Grounds"));
    assert!(text.contains("Select an item"));
}

#[test]
fn test_render_calendar_and_modules() {
    let ctx = context();
    let tasks = derive_calendar_day(&ctx, day(2025, 6, 10));
    let text = render_calendar_day(day(2025, 6, 10), &tasks, day(2025, 6, 9), &ctx.icons);
    assert!(text.contains("2025-06-10 (tomorrow)"));
    assert!(text.contains("[ ] Water tomatoes"));

    let icons = IconService::new(IconTheme::Unicode);
    let modules = render_modules(&router::all_module_configs(), &icons);
    assert_eq!(modules.lines().count(), ModuleId::ALL.len());
    assert!(modules.contains("view,search,add_new,edit,delete"));
}
