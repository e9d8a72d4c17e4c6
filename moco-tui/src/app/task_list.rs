use moco::Project;

/// One row of the task list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectableItem {
    /// Display-only project heading.
    ProjectHeader { name: String, customer: String },
    /// A bookable task. `position` is 1-based within its project.
    TaskRow {
        project_id: i64,
        task_id: i64,
        position: usize,
        project_name: String,
        task_name: String,
    },
}

impl SelectableItem {
    pub fn is_selectable(&self) -> bool {
        matches!(self, SelectableItem::TaskRow { .. })
    }

    fn selection(&self) -> Option<TaskSelection> {
        match self {
            SelectableItem::ProjectHeader { .. } => None,
            SelectableItem::TaskRow {
                project_id,
                task_id,
                project_name,
                task_name,
                ..
            } => Some(TaskSelection {
                project_id: *project_id,
                task_id: *task_id,
                title: format!("{} / {}", project_name, task_name),
            }),
        }
    }
}

/// The task the form books against.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSelection {
    pub project_id: i64,
    pub task_id: i64,
    pub title: String,
}

/// Flatten projects into a header followed by its tasks sorted by name.
/// Projects keep backend order; projects without tasks are skipped.
pub fn map_projects_to_items(projects: &[Project]) -> Vec<SelectableItem> {
    let mut items = Vec::new();

    for project in projects.iter().filter(|p| !p.tasks.is_empty()) {
        items.push(SelectableItem::ProjectHeader {
            name: project.name.clone(),
            customer: project.customer.name.clone(),
        });

        let mut tasks: Vec<_> = project.tasks.iter().collect();
        // stable: equal names keep backend order
        tasks.sort_by(|a, b| a.name.cmp(&b.name));

        items.extend(
            tasks
                .into_iter()
                .enumerate()
                .map(|(i, task)| SelectableItem::TaskRow {
                    project_id: project.id,
                    task_id: task.id,
                    position: i + 1,
                    project_name: project.name.clone(),
                    task_name: task.name.clone(),
                }),
        );
    }

    items
}

/// Task list rows plus a cursor that only ever lands on task rows once moved.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    items: Vec<SelectableItem>,
    cursor: usize,
}

impl TaskList {
    pub fn new(items: Vec<SelectableItem>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The task under the cursor, `None` while the cursor rests on a header.
    pub fn highlighted(&self) -> Option<TaskSelection> {
        self.items.get(self.cursor).and_then(SelectableItem::selection)
    }

    pub fn move_down(&mut self) -> bool {
        let next = self
            .items
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, item)| item.is_selectable())
            .map(|(i, _)| i);
        self.move_to(next)
    }

    pub fn move_up(&mut self) -> bool {
        let previous = self.items[..self.cursor.min(self.items.len())]
            .iter()
            .rposition(SelectableItem::is_selectable);
        self.move_to(previous)
    }

    /// Put the cursor on the given task. Returns false if it is not in the list.
    pub fn select(&mut self, project_id: i64, task_id: i64) -> bool {
        let found = self.items.iter().position(|item| {
            matches!(item, SelectableItem::TaskRow { project_id: p, task_id: t, .. }
                if *p == project_id && *t == task_id)
        });
        self.move_to(found)
    }

    fn move_to(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) => {
                self.cursor = i;
                true
            }
            None => false,
        }
    }
}
