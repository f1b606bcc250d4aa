//! Home dashboard aggregation: task buckets and the recently viewed strip.
//!
//! All functions here are pure. They borrow from the calendar and history the
//! shell owns and hand back references, so recomputing on every state change
//! is cheap and never touches the source data.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::constants::DEFAULT_WEEK_DAYS;
use crate::entities::{CalendarTask, Collections, ItemRef, RecentView};
use crate::ui::selection::find_item;
use crate::utils::datetime;

/// Open tasks split by due day relative to today.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBuckets<'a> {
    /// Due today, sorted by title
    pub today: Vec<&'a CalendarTask>,
    /// Due within the following days, sorted by date then title
    pub rest_of_week: Vec<&'a CalendarTask>,
}

/// Tasks sharing one color tag, for grouped display.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup<'a> {
    pub color: &'a str,
    pub tasks: Vec<&'a CalendarTask>,
}

/// Bucket open tasks into today and the next six days.
#[must_use]
pub fn bucket_tasks(events: &[CalendarTask], today: NaiveDate) -> TaskBuckets<'_> {
    bucket_tasks_within(events, today, DEFAULT_WEEK_DAYS)
}

/// Bucket open tasks into today and `[today + 1, today + week_days]`.
///
/// Completed tasks and tasks outside the window appear in neither bucket.
#[must_use]
pub fn bucket_tasks_within(events: &[CalendarTask], today: NaiveDate, week_days: u32) -> TaskBuckets<'_> {
    let week_start = datetime::add_days(today, 1);
    let week_end = datetime::add_days(today, i64::from(week_days));

    let mut buckets = TaskBuckets::default();
    for task in events.iter().filter(|task| !task.completed) {
        if task.date == today {
            buckets.today.push(task);
        } else if task.date >= week_start && task.date <= week_end {
            buckets.rest_of_week.push(task);
        }
    }

    buckets.today.sort_by(|a, b| a.title.cmp(&b.title));
    buckets
        .rest_of_week
        .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));

    log::debug!(
        "bucketed {} task(s): {} today, {} this week",
        events.len(),
        buckets.today.len(),
        buckets.rest_of_week.len()
    );
    buckets
}

/// Every task on `day`, completed ones included, sorted by title.
#[must_use]
pub fn tasks_on(events: &[CalendarTask], day: NaiveDate) -> Vec<&CalendarTask> {
    let mut tasks: Vec<&CalendarTask> = events.iter().filter(|task| task.date == day).collect();
    tasks.sort_by(|a, b| a.title.cmp(&b.title));
    tasks
}

/// Group tasks by color tag. Tags keep the order they first appear in, and
/// tasks keep their order within a tag.
#[must_use]
pub fn group_by_color<'a>(tasks: &[&'a CalendarTask]) -> Vec<ColorGroup<'a>> {
    let mut groups: Vec<ColorGroup<'a>> = Vec::new();
    for &task in tasks {
        match groups.iter_mut().find(|group| group.color == task.color) {
            Some(group) => group.tasks.push(task),
            None => groups.push(ColorGroup {
                color: &task.color,
                tasks: vec![task],
            }),
        }
    }
    groups
}

/// First `limit` distinct items of a most-recent-first history.
///
/// The first (most recent) entry for each item id wins; later duplicates are
/// skipped. Scanning stops as soon as `limit` items are collected.
#[must_use]
pub fn dedupe_recent_views(history: &[RecentView], limit: usize) -> Vec<&RecentView> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut distinct = Vec::with_capacity(limit.min(history.len()));

    for view in history {
        if distinct.len() >= limit {
            break;
        }
        if seen.insert(view.item_id.as_str()) {
            distinct.push(view);
        }
    }
    distinct
}

/// Resolve history entries to the items they point at. Entries whose item is
/// gone from its collection are skipped.
#[must_use]
pub fn resolve_recent_items<'a>(collections: &'a Collections, views: &[&RecentView]) -> Vec<ItemRef<'a>> {
    views
        .iter()
        .filter_map(|view| find_item(collections, view.module, &view.item_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ModuleId;

    fn task(title: &str, date: NaiveDate, color: &str) -> CalendarTask {
        CalendarTask {
            id: title.to_lowercase(),
            module: ModuleId::GrowingGrounds,
            entity_id: "bed-1".to_string(),
            date,
            title: title.to_string(),
            task_type: "watering".to_string(),
            completed: false,
            color: color.to_string(),
        }
    }

    #[test]
    fn color_groups_keep_first_appearance_order() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let events = [
            task("Water", day, "blue"),
            task("Feed", day, "green"),
            task("Mist", day, "blue"),
        ];
        let refs: Vec<&CalendarTask> = events.iter().collect();

        let groups = group_by_color(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].color, "blue");
        assert_eq!(groups[0].tasks.len(), 2);
        assert_eq!(groups[0].tasks[1].title, "Mist");
        assert_eq!(groups[1].color, "green");
    }
}
