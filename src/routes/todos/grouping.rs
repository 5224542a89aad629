use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::model::Todo;

/// The front page view: every todo lands in exactly one bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedTodos {
    pub overdue_items: Vec<Todo>,
    pub due_today_items: Vec<Todo>,
    pub due_later_items: Vec<Todo>,
    pub completed_items: Vec<Todo>,
}

/// Partitions `todos` against `today`, keeping input order inside each bucket.
pub fn group(today: NaiveDate, todos: impl IntoIterator<Item = Todo>) -> GroupedTodos {
    let mut grouped = GroupedTodos::default();

    for todo in todos {
        if todo.completed {
            grouped.completed_items.push(todo);
            continue;
        }

        match todo.due_date.cmp(&today) {
            Ordering::Less => grouped.overdue_items.push(todo),
            Ordering::Equal => grouped.due_today_items.push(todo),
            Ordering::Greater => grouped.due_later_items.push(todo),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Utc};
    use uuid::Uuid;

    fn todo(title: &str, due_date: NaiveDate, completed: bool) -> Todo {
        let now = Utc::now();
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            due_date,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    fn titles(items: &[Todo]) -> Vec<&str> {
        items.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn splits_incomplete_items_by_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let yesterday = today - Days::new(1);
        let tomorrow = today + Days::new(1);

        let grouped = group(
            today,
            vec![
                todo("late", yesterday, false),
                todo("now", today, false),
                todo("soon", tomorrow, false),
            ],
        );

        assert_eq!(titles(&grouped.overdue_items), vec!["late"]);
        assert_eq!(titles(&grouped.due_today_items), vec!["now"]);
        assert_eq!(titles(&grouped.due_later_items), vec!["soon"]);
        assert!(grouped.completed_items.is_empty());
    }

    #[test]
    fn completed_items_ignore_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let grouped = group(
            today,
            vec![
                todo("done late", today - Days::new(3), true),
                todo("done today", today, true),
                todo("done early", today + Days::new(3), true),
            ],
        );

        assert!(grouped.overdue_items.is_empty());
        assert!(grouped.due_today_items.is_empty());
        assert!(grouped.due_later_items.is_empty());
        assert_eq!(
            titles(&grouped.completed_items),
            vec!["done late", "done today", "done early"]
        );
    }

    #[test]
    fn keeps_input_order_within_buckets() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let grouped = group(
            today,
            vec![
                todo("b", today, false),
                todo("x", today - Days::new(1), false),
                todo("a", today, false),
                todo("c", today, false),
            ],
        );

        assert_eq!(titles(&grouped.due_today_items), vec!["b", "a", "c"]);
        assert_eq!(titles(&grouped.overdue_items), vec!["x"]);
    }

    #[test]
    fn serializes_bucket_names() {
        let json = serde_json::to_value(GroupedTodos::default()).unwrap();

        for key in ["overdueItems", "dueTodayItems", "dueLaterItems", "completedItems"] {
            assert!(json[key].is_array(), "missing {key}");
        }
    }
}
