//! Plain-text rendering of derived views for the terminal shell.

use chrono::NaiveDate;
use std::fmt::Write;

use super::dashboard::group_by_color;
use super::layout::{HomeView, ModuleView};
use super::router::ModuleConfig;
use crate::constants::{
    EMPTY_NO_RECENT, EMPTY_NO_RESULTS, EMPTY_NO_TASKS, EMPTY_SELECT_ITEM, HEADER_CATALOGS, HEADER_RECENT,
    HEADER_THIS_WEEK, HEADER_TODAY,
};
use crate::entities::{CalendarTask, ItemRef, ModuleId};
use crate::icons::IconService;
use crate::ui::router::resolve_module_config;
use crate::utils::datetime;

pub fn render_home(view: &HomeView<'_>, icons: &IconService) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", HEADER_TODAY, datetime::format_ymd(view.today));
    render_task_groups(&mut out, &view.buckets.today, view.today, icons);

    let _ = writeln!(out, "\n{}", HEADER_THIS_WEEK);
    render_task_groups(&mut out, &view.buckets.rest_of_week, view.today, icons);

    let _ = writeln!(out, "\n{}", HEADER_RECENT);
    if view.recent_items.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_NO_RECENT);
    }
    for item in &view.recent_items {
        let _ = writeln!(out, "  {} {}", icons.module(item.module()), item.display_name());
    }

    let _ = writeln!(out, "\n{}", HEADER_CATALOGS);
    for (module, count) in &view.counts {
        let config = resolve_module_config(*module);
        let _ = writeln!(out, "  {} {:<16} {}", icons.module(*module), config.display_name, count);
    }
    out
}

fn render_task_groups(out: &mut String, tasks: &[&CalendarTask], today: NaiveDate, icons: &IconService) {
    if tasks.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_NO_TASKS);
        return;
    }
    for group in group_by_color(tasks) {
        let _ = writeln!(out, "  [{}]", group.color);
        for task in group.tasks {
            let _ = writeln!(
                out,
                "    {} {} ({})",
                icons.task_pending(),
                task.title,
                datetime::format_relative_day(task.date, today)
            );
        }
    }
}

pub fn render_module(view: &ModuleView<'_>, icons: &IconService) -> String {
    let mut out = String::new();
    let config = view.config;

    let _ = writeln!(out, "{} {} ({} items)", icons.module(config.module), config.display_name, view.items.len());
    if view.items.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_NO_RESULTS);
    }
    for item in &view.items {
        let marker = if view.detail.is_some_and(|d| d.id() == item.id()) { ">" } else { " " };
        let _ = writeln!(out, "{} {:<12} {}", marker, item.id(), item.display_name());
    }

    let _ = writeln!(out);
    match (&view.detail, &view.empty_state) {
        (Some(item), _) => render_detail(&mut out, item),
        (None, Some(empty)) => {
            let _ = writeln!(out, "{} {}", empty.icon, empty.module_name);
            let _ = writeln!(out, "  {}", EMPTY_SELECT_ITEM);
        }
        (None, None) => {}
    }
    out
}

fn render_detail(out: &mut String, item: &ItemRef<'_>) {
    let _ = writeln!(out, "== {} ==", item.display_name());
    let mut field = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            let _ = writeln!(out, "  {:<16} {}", label, value);
        }
    };

    match *item {
        ItemRef::Plant(p) => {
            field("Scientific name", Some(p.scientific_name.as_str()));
            field("Family", p.family.as_deref());
            field("Sunlight", p.sunlight.as_deref());
            field("Watering", p.watering.as_deref());
        }
        ItemRef::Fertilizer(f) => {
            field("NPK", f.npk_ratio.as_deref());
            field("Application", f.application_rate.as_deref());
            field("Organic", Some(if f.is_organic { "yes" } else { "no" }));
        }
        ItemRef::CompostingMethod(c) => {
            field("Difficulty", c.difficulty.as_deref());
            let weeks = c.duration_weeks.map(|w| format!("{} weeks", w));
            field("Duration", weeks.as_deref());
        }
        ItemRef::GrowingGround(g) => {
            field("Location", g.location.as_deref());
            field("Soil", g.soil_type.as_deref());
            let area = g.area_sq_m.map(|a| format!("{:.1} m²", a));
            field("Area", area.as_deref());
        }
        ItemRef::SeasonalTip(t) => {
            field("Season", t.season.as_deref());
            field("Tip", Some(t.description.as_str()));
        }
    }
    let image = item.image().map(|src| format!("{} (crop {}%)", src, item.image_position()));
    field("Image", image.as_deref());
}

pub fn render_calendar_day(day: NaiveDate, tasks: &[&CalendarTask], today: NaiveDate, icons: &IconService) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({})",
        icons.module(ModuleId::Calendar),
        datetime::format_ymd(day),
        datetime::format_relative_day(day, today)
    );
    if tasks.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_NO_TASKS);
    }
    for task in tasks {
        let icon = if task.completed { icons.task_completed() } else { icons.task_pending() };
        let _ = writeln!(out, "  {} {} [{}] {}", icon, task.title, task.color, task.task_type);
    }
    out
}

pub fn render_modules(configs: &[&ModuleConfig], icons: &IconService) -> String {
    let mut out = String::new();
    for config in configs {
        let actions: Vec<&str> = config.allowed_actions.iter().map(|action| action.as_str()).collect();
        let _ = writeln!(
            out,
            "{} {:<15} {:<16} {:<8} {}",
            icons.module(config.module),
            config.module,
            config.display_name,
            config.color_tag,
            actions.join(",")
        );
    }
    out
}
