//! Deadline alerts for tasks that are due soon.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "alertId")]
    pub alert_id: Uuid,
    #[serde(rename = "taskId")]
    pub task_id: Uuid,
    #[serde(rename = "alertDate")]
    pub alert_date: NaiveDate,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Build an alert for every open task due within `window_days` of `now`.
///
/// Closed tasks and overdue tasks raise nothing. Alerts come out in input order.
pub fn deadline_alerts<'a, I>(tasks: I, now: DateTime<Utc>, window_days: u32) -> Vec<Alert>
where
    I: IntoIterator<Item = &'a Task>,
{
    let today = now.date_naive();

    tasks
        .into_iter()
        .filter(|task| task.state.is_open())
        .filter_map(|task| {
            let days = task.days_until_due(today);
            (0..=i64::from(window_days)).contains(&days).then(|| Alert {
                alert_id: Uuid::new_v4(),
                task_id: task.task_id,
                alert_date: today,
                message: due_message(&task.title, days),
                created_at: now,
            })
        })
        .collect()
}

fn due_message(title: &str, days: i64) -> String {
    match days {
        0 => format!("The task \"{title}\" is due today."),
        1 => format!("The task \"{title}\" is due tomorrow."),
        n => format!("The task \"{title}\" is due in {n} days."),
    }
}
