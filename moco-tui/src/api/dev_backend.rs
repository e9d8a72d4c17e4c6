use anyhow::{bail, Result};
use async_trait::async_trait;
use moco::{trailing_window, Customer, NewTimeEntry, Project, Task, TimeEntry};
use std::sync::Mutex;
use time::{Date, Duration};

use super::Backend;
use crate::time_utils::{format_iso_date, parse_iso_date, today_local};

#[derive(Debug)]
pub struct DevBackend {
    projects: Vec<Project>,
    store: Mutex<DevStore>,
}

#[derive(Debug)]
struct DevStore {
    next_id: i64,
    entries: Vec<TimeEntry>,
}

impl DevBackend {
    pub fn new() -> Self {
        let projects = seed_projects();
        let entries = seed_entries(&projects, today_local());
        Self {
            projects,
            store: Mutex::new(DevStore {
                next_id: 1000,
                entries,
            }),
        }
    }

    fn task_names(&self, project_id: i64, task_id: i64) -> Option<(String, String)> {
        let project = self.projects.iter().find(|p| p.id == project_id)?;
        let task = project.tasks.iter().find(|t| t.id == task_id)?;
        Some((project.name.clone(), task.name.clone()))
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for DevBackend {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn fetch_time_entries(&self, reference: Date) -> Result<Vec<TimeEntry>> {
        let (from, to) = trailing_window(reference);
        let (from, to) = (format_iso_date(from), format_iso_date(to));
        let store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("dev store lock poisoned"))?;
        Ok(store
            .entries
            .iter()
            .filter(|entry| entry.date >= from && entry.date <= to)
            .cloned()
            .collect())
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<i64> {
        if parse_iso_date(&entry.date).is_none() {
            bail!("status code 422, body: {{\"date\":[\"is invalid\"]}}");
        }
        let Some((project_name, task_name)) = self.task_names(entry.project_id, entry.task_id)
        else {
            bail!("status code 404, body: {{\"message\":\"Task not found\"}}");
        };

        let mut store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("dev store lock poisoned"))?;
        store.next_id += 1;
        let id = store.next_id;
        store.entries.push(TimeEntry {
            id,
            date: entry.date.clone(),
            hours: entry.hours,
            project_id: entry.project_id,
            task_id: entry.task_id,
            project_name,
            task_name,
            description: entry.description.clone(),
        });
        Ok(id)
    }

    async fn delete_time_entry(&self, id: i64) -> Result<()> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("dev store lock poisoned"))?;
        let before = store.entries.len();
        store.entries.retain(|entry| entry.id != id);
        if store.entries.len() == before {
            bail!("status code 404, body: {{\"message\":\"Activity not found\"}}");
        }
        Ok(())
    }
}

fn task(id: i64, name: &str) -> Task {
    Task {
        id,
        name: name.to_string(),
        active: true,
        billable: true,
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 101,
            name: "Website Relaunch".to_string(),
            customer: Customer {
                id: 1,
                name: "Nordwind GmbH".to_string(),
            },
            tasks: vec![
                task(1011, "Frontend"),
                task(1012, "Backend"),
                task(1013, "Meetings"),
            ],
        },
        Project {
            id: 102,
            name: "Archived Migration".to_string(),
            customer: Customer {
                id: 2,
                name: "Bergmann AG".to_string(),
            },
            tasks: vec![],
        },
        Project {
            id: 103,
            name: "Internal".to_string(),
            customer: Customer {
                id: 3,
                name: "Studio Nord".to_string(),
            },
            tasks: vec![
                task(1031, "Support"),
                task(1032, "Administration"),
                task(1033, "Code Review"),
            ],
        },
    ]
}

fn seed_entries(projects: &[Project], today: Date) -> Vec<TimeEntry> {
    let plan: [(i64, usize, usize, f64, &str); 6] = [
        (0, 0, 0, 2.5, "Navigation redesign"),
        (0, 2, 0, 0.75, "Code review for checkout"),
        (1, 0, 2, 1.0, "Sprint planning"),
        (1, 2, 1, 0.5, "Timesheets"),
        (2, 0, 1, 4.0, "API pagination"),
        (4, 2, 0, 1.25, "On-call handover"),
    ];

    plan.iter()
        .enumerate()
        .filter_map(|(i, &(days_ago, project_idx, task_idx, hours, description))| {
            let project = projects.get(project_idx)?;
            let task = project.tasks.get(task_idx)?;
            let date = today.checked_sub(Duration::days(days_ago))?;
            Some(TimeEntry {
                id: 900 + i as i64,
                date: format_iso_date(date),
                hours,
                project_id: project.id,
                task_id: task.id,
                project_name: project.name.clone(),
                task_name: task.name.clone(),
                description: description.to_string(),
            })
        })
        .collect()
}
