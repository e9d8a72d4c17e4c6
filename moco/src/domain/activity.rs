use serde::{Deserialize, Serialize};

/// Reference to a project or task embedded in an activity.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// An activity (booked time entry) as it comes over the wire.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub date: String,
    pub hours: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project: ActivityRef,
    #[serde(default)]
    pub task: ActivityRef,
}

/// A booked time entry. Entries are replaced wholesale on every reload, never edited in place.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub hours: f64,
    pub project_id: i64,
    pub task_id: i64,
    pub project_name: String,
    pub task_name: String,
    pub description: String,
}

impl From<Activity> for TimeEntry {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            date: activity.date,
            hours: activity.hours,
            project_id: activity.project.id,
            task_id: activity.task.id,
            project_name: activity.project.name,
            task_name: activity.task.name,
            description: activity.description.unwrap_or_default(),
        }
    }
}

/// A time entry that has not been submitted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTimeEntry {
    pub date: String,
    pub hours: f64,
    pub project_id: i64,
    pub task_id: i64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedActivity {
    pub id: i64,
}
