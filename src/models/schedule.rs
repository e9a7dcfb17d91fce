//! Planner document as stored in `schedule.json`.
//!
//! The JSON keys (`startDate`, `userName`) and the three-element activity
//! arrays are kept so files written by earlier planners still load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `(time, description, category)` entry of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Activity {
    pub time: String,
    pub description: String,
    pub category: String,
}

impl Activity {
    pub fn new(time: &str, description: &str, category: &str) -> Self {
        Self {
            time: time.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

impl From<(String, String, String)> for Activity {
    fn from((time, description, category): (String, String, String)) -> Self {
        Self {
            time,
            description,
            category,
        }
    }
}

impl From<Activity> for (String, String, String) {
    fn from(a: Activity) -> Self {
        (a.time, a.description, a.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DaySchedule {
    /// Title to show; empty titles fall back to `Day N`.
    pub fn display_title(&self, key: &str) -> String {
        if self.title.trim().is_empty() {
            format!("Day {key}")
        } else {
            self.title.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub schedule: BTreeMap<String, DaySchedule>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
}

impl ScheduleDocument {
    /// Day keys in numeric order ("2" before "10"); non-numeric keys last.
    pub fn day_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.schedule.keys().cloned().collect();
        keys.sort_by_key(|k| (k.parse::<u32>().unwrap_or(u32::MAX), k.clone()));
        keys
    }

    pub fn planner_title(&self) -> String {
        if self.user_name.trim().is_empty() {
            "Technician • 4-On / 4-Off Planner".to_string()
        } else {
            format!("{} • 4-On / 4-Off Planner", self.user_name.trim())
        }
    }
}
