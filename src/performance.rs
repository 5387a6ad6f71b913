use crate::clock::date_key;
use crate::models::{AppData, DateSummary, Todo, TodoStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-date completion counts for one user, grouped by each todo's own stored
/// date. The optional filter narrows the scan to a single day.
pub fn summarize(data: &AppData, user: &str, date: Option<NaiveDate>) -> BTreeMap<String, DateSummary> {
    let filter_key = date.map(date_key);
    build_summary(data.todos.values().filter(|todo| {
        todo.user == user
            && filter_key
                .as_deref()
                .map_or(true, |key| todo.date == key)
    }))
}

pub fn build_summary<'a>(todos: impl Iterator<Item = &'a Todo>) -> BTreeMap<String, DateSummary> {
    let mut grouped: BTreeMap<String, DateSummary> = BTreeMap::new();
    for todo in todos {
        let entry = grouped.entry(todo.date.clone()).or_default();
        entry.total += 1;
        if todo.status == TodoStatus::Done {
            entry.done += 1;
        }
    }
    grouped
}

pub fn completion_percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{create_todo, toggle_todo};
    use chrono::{DateTime, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn now() -> DateTime<Utc> {
        today().and_hms_opt(9, 0, 0).unwrap().and_utc()
    }

    fn seed() -> AppData {
        let mut data = AppData::default();
        for (user, task, date) in [
            ("A", "one", "2026-08-05"),
            ("A", "two", "2026-08-05"),
            ("A", "three", "2026-08-05"),
            ("A", "later", "2026-08-09"),
            ("B", "other", "2026-08-05"),
        ] {
            create_todo(&mut data, today(), now(), user, task, date).unwrap();
        }
        let done_id = data
            .todos
            .values()
            .find(|todo| todo.task == "one")
            .unwrap()
            .id
            .clone();
        toggle_todo(&mut data, today(), now(), &done_id).unwrap();
        data
    }

    #[test]
    fn groups_counts_by_each_todos_own_date() {
        let summary = summarize(&seed(), "A", None);
        assert_eq!(summary.len(), 2);
        let day = &summary["2026-08-05"];
        assert_eq!((day.total, day.done), (3, 1));
        let later = &summary["2026-08-09"];
        assert_eq!((later.total, later.done), (1, 0));
    }

    #[test]
    fn date_filter_narrows_to_one_day() {
        let summary = summarize(&seed(), "A", Some(today()));
        assert_eq!(summary.len(), 1);
        assert_eq!(summary["2026-08-05"].total, 3);
    }

    #[test]
    fn other_users_are_invisible() {
        let summary = summarize(&seed(), "B", None);
        assert_eq!(summary["2026-08-05"].total, 1);
        assert!(summarize(&seed(), "nobody", None).is_empty());
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 2), 50);
        assert_eq!(completion_percent(3, 3), 100);
        assert_eq!(completion_percent(0, 0), 0);
    }
}
