use chrono::NaiveDate;
use serde::Serialize;

use crate::models::task::Task;

/// Tasks partitioned by urgency for the home view. Every input task lands in
/// exactly one of the five buckets; within a bucket the input order (most
/// recently created first) is preserved.
#[derive(Debug, Default, Serialize)]
pub struct CategorizedTasks {
    pub overdue: Vec<Task>,
    pub due_today: Vec<Task>,
    pub upcoming: Vec<Task>,
    pub no_due_date: Vec<Task>,
    pub completed: Vec<Task>,
    pub total_count: usize,
    pub active_count: usize,
}

/// Partition `tasks` against the reference date `today`.
///
/// Resolved tasks go to `completed` regardless of their due date. Unresolved
/// tasks are bucketed by comparing the calendar date of `due_date` (time of
/// day is ignored) against `today`.
pub fn categorize(tasks: Vec<Task>, today: NaiveDate) -> CategorizedTasks {
    let mut view = CategorizedTasks {
        total_count: tasks.len(),
        ..Default::default()
    };

    for task in tasks {
        if task.is_resolved {
            view.completed.push(task);
            continue;
        }
        view.active_count += 1;

        match task.due_date {
            Some(due) => {
                let due_day = due.date_naive();
                if due_day < today {
                    view.overdue.push(task);
                } else if due_day == today {
                    view.due_today.push(task);
                } else {
                    view.upcoming.push(task);
                }
            }
            None => view.no_due_date.push(task),
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    const TODAY: (i32, u32, u32) = (2025, 6, 15);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(TODAY.0, TODAY.1, TODAY.2, 12, 0, 0).unwrap()
    }

    fn task(title: &str, due_date: Option<DateTime<Utc>>, is_resolved: bool) -> Task {
        let now = noon();
        Task {
            task_id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            due_date,
            reminder_date: None,
            is_resolved,
            created_at: now,
            updated_at: now,
        }
    }

    fn titles(bucket: &[Task]) -> Vec<&str> {
        bucket.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn buckets_by_due_date() {
        let tasks = vec![
            task("A", Some(noon() - Duration::days(1)), false),
            task("B", Some(noon()), false),
            task("C", Some(noon() + Duration::days(1)), false),
            task("D", None, false),
            task("E", Some(noon() - Duration::days(1)), true),
        ];

        let view = categorize(tasks, today());

        assert_eq!(titles(&view.overdue), vec!["A"]);
        assert_eq!(titles(&view.due_today), vec!["B"]);
        assert_eq!(titles(&view.upcoming), vec!["C"]);
        assert_eq!(titles(&view.no_due_date), vec!["D"]);
        assert_eq!(titles(&view.completed), vec!["E"]);
        assert_eq!(view.total_count, 5);
        assert_eq!(view.active_count, 4);
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let view = categorize(vec![], today());

        assert!(view.overdue.is_empty());
        assert!(view.due_today.is_empty());
        assert!(view.upcoming.is_empty());
        assert!(view.no_due_date.is_empty());
        assert!(view.completed.is_empty());
        assert_eq!(view.total_count, 0);
        assert_eq!(view.active_count, 0);
    }

    #[test]
    fn every_task_lands_in_exactly_one_bucket() {
        let tasks = vec![
            task("a", Some(noon() - Duration::days(3)), false),
            task("b", Some(noon() - Duration::days(3)), true),
            task("c", Some(noon()), false),
            task("d", Some(noon()), true),
            task("e", Some(noon() + Duration::days(10)), false),
            task("f", None, false),
            task("g", None, true),
        ];
        let total = tasks.len();

        let view = categorize(tasks, today());

        let bucketed = view.overdue.len()
            + view.due_today.len()
            + view.upcoming.len()
            + view.no_due_date.len()
            + view.completed.len();
        assert_eq!(bucketed, total);
        assert_eq!(view.total_count, total);
    }

    #[test]
    fn comparison_ignores_time_of_day() {
        let start_of_day = Utc
            .with_ymd_and_hms(TODAY.0, TODAY.1, TODAY.2, 0, 1, 0)
            .unwrap();
        let end_of_day = Utc
            .with_ymd_and_hms(TODAY.0, TODAY.1, TODAY.2, 23, 59, 0)
            .unwrap();
        let tasks = vec![
            task("early", Some(start_of_day), false),
            task("late", Some(end_of_day), false),
        ];

        let view = categorize(tasks, today());

        assert_eq!(titles(&view.due_today), vec!["early", "late"]);
        assert!(view.overdue.is_empty());
        assert!(view.upcoming.is_empty());
    }

    #[test]
    fn resolved_task_is_never_overdue() {
        let tasks = vec![task("done", Some(noon() - Duration::days(30)), true)];

        let view = categorize(tasks, today());

        assert!(view.overdue.is_empty());
        assert_eq!(titles(&view.completed), vec!["done"]);
    }

    #[test]
    fn input_order_is_preserved_within_buckets() {
        // Most recently created first, as the storage layer returns them.
        let tasks = vec![
            task("newest", Some(noon() - Duration::days(2)), false),
            task("middle", Some(noon() - Duration::days(5)), false),
            task("oldest", Some(noon() - Duration::days(1)), false),
        ];

        let view = categorize(tasks, today());

        assert_eq!(titles(&view.overdue), vec!["newest", "middle", "oldest"]);
    }
}
