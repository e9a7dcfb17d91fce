use serde::{Deserialize, Serialize};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// To-do entry as stored in `tasks.json`. `id` is positional and is
/// reassigned whenever tasks are deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatus {
    pub total: usize,
    pub completed: usize,
}

impl TaskStatus {
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total tasks: {} | Completed: {} | Remaining: {}",
            self.total,
            self.completed,
            self.remaining()
        )
    }
}
