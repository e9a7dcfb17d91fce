use crate::errors::{AppError, AppResult};
use crate::models::task::{CREATED_AT_FORMAT, Task, TaskFilter, TaskStatus};
use crate::storage::{Loaded, load_json, save_json};
use crate::ui::messages::warning;
use chrono::Local;
use std::path::{Path, PathBuf};

/// To-do list persisted as a JSON array of tasks.
pub struct TaskList {
    path: PathBuf,
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn load(path: &Path) -> AppResult<Self> {
        let tasks = match load_json::<Vec<Task>>(path)? {
            Loaded::Quarantined(moved) => {
                warning(format!(
                    "Task file could not be read; moved to {} and starting empty",
                    moved.display()
                ));
                Vec::new()
            }
            other => other.or_else_default(Vec::new),
        };
        Ok(Self::with_tasks(path, tasks))
    }

    pub fn with_tasks(path: &Path, tasks: Vec<Task>) -> Self {
        Self {
            path: path.to_path_buf(),
            tasks,
        }
    }

    pub fn save(&self) -> AppResult<()> {
        save_json(&self.path, &self.tasks)
    }

    pub fn add(&mut self, title: &str, description: &str) -> AppResult<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput("task title cannot be empty".into()));
        }

        let task = Task {
            id: self.tasks.len() as u32 + 1,
            title: title.to_string(),
            description: description.trim().to_string(),
            completed: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
            selected: false,
        };
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    fn get_mut(&mut self, id: u32) -> AppResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::UnknownTask(id))
    }

    pub fn details(&self, id: u32) -> AppResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(AppError::UnknownTask(id))
    }

    /// Flip the completed flag and return the new value.
    pub fn toggle_completion(&mut self, id: u32) -> AppResult<bool> {
        let t = self.get_mut(id)?;
        t.completed = !t.completed;
        Ok(t.completed)
    }

    pub fn toggle_selection(&mut self, id: u32) -> AppResult<bool> {
        let t = self.get_mut(id)?;
        t.selected = !t.selected;
        Ok(t.selected)
    }

    /// Drop every selected task and renumber the rest `1..n`.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.selected);
        for (i, t) in self.tasks.iter_mut().enumerate() {
            t.id = i as u32 + 1;
        }
        before - self.tasks.len()
    }

    /// Select `ids` and delete the selection. Unknown ids fail before
    /// anything is removed.
    pub fn delete(&mut self, ids: &[u32]) -> AppResult<usize> {
        if let Some(missing) = ids.iter().find(|id| !self.tasks.iter().any(|t| t.id == **id)) {
            return Err(AppError::UnknownTask(*missing));
        }
        for t in self.tasks.iter_mut() {
            if ids.contains(&t.id) {
                t.selected = true;
            }
        }
        Ok(self.delete_selected())
    }

    /// Case-insensitive title search combined with the status filter.
    pub fn filter(&self, search: &str, filter: TaskFilter) -> Vec<&Task> {
        let needle = search.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|t| filter.accepts(t))
            .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }
}
