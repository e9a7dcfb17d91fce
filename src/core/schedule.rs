use crate::data::default_schedule::default_document;
use crate::errors::{AppError, AppResult};
use crate::models::category::{Category, color_for};
use crate::models::schedule::{Activity, DaySchedule, ScheduleDocument};
use crate::storage::{Loaded, load_json, read_json, save_json};
use crate::ui::messages::warning;
use crate::utils::colors::paint_on;
use crate::utils::date::{format_iso, parse_flexible};
use crate::utils::formatting::{bold, pad_right, wrap_indented};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Planner document bound to the file it was loaded from.
pub struct ScheduleLogic {
    path: PathBuf,
    pub doc: ScheduleDocument,
}

fn require(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(v.to_string())
}

impl ScheduleLogic {
    /// Load the planner. A missing file yields the default plan; an
    /// unreadable one is moved aside first.
    pub fn load(path: &Path) -> AppResult<Self> {
        let doc = match load_json::<ScheduleDocument>(path)? {
            Loaded::Quarantined(moved) => {
                warning(format!(
                    "Schedule file could not be read; moved to {} and starting from defaults",
                    moved.display()
                ));
                default_document()
            }
            other => other.or_else_default(default_document),
        };
        Ok(Self::with_document(path, doc))
    }

    pub fn with_document(path: &Path, doc: ScheduleDocument) -> Self {
        Self {
            path: path.to_path_buf(),
            doc,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> AppResult<()> {
        save_json(&self.path, &self.doc)
    }

    /// `(key, day)` pairs in numeric day order.
    pub fn days(&self) -> Vec<(String, &DaySchedule)> {
        self.doc
            .day_keys()
            .into_iter()
            .filter_map(|k| self.doc.schedule.get(&k).map(|d| (k, d)))
            .collect()
    }

    fn day(&self, day: &str) -> AppResult<&DaySchedule> {
        self.doc
            .schedule
            .get(day)
            .ok_or_else(|| AppError::UnknownDay(day.to_string()))
    }

    fn day_mut(&mut self, day: &str) -> AppResult<&mut DaySchedule> {
        self.doc
            .schedule
            .get_mut(day)
            .ok_or_else(|| AppError::UnknownDay(day.to_string()))
    }

    /// Activities of `day` with their 1-based positions. A category filter
    /// hides rows but never renumbers them.
    pub fn show(&self, day: &str, category: Option<&str>) -> AppResult<Vec<(usize, &Activity)>> {
        let d = self.day(day)?;
        let wanted = category.map(|c| c.trim().to_lowercase());
        Ok(d.activities
            .iter()
            .enumerate()
            .filter(|(_, a)| match &wanted {
                Some(c) => a.category.to_lowercase() == *c,
                None => true,
            })
            .map(|(i, a)| (i + 1, a))
            .collect())
    }

    /// Append an activity and return its 1-based position.
    pub fn add_activity(
        &mut self,
        day: &str,
        time: &str,
        description: &str,
        category: &str,
    ) -> AppResult<usize> {
        let activity = Activity::new(
            &require("time", time)?,
            &require("description", description)?,
            &require("category", category)?.to_lowercase(),
        );
        let d = self.day_mut(day)?;
        d.activities.push(activity);
        Ok(d.activities.len())
    }

    /// Replace the given fields of activity `index` (1-based).
    pub fn edit_activity(
        &mut self,
        day: &str,
        index: usize,
        time: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<&Activity> {
        let time = time.map(|t| require("time", t)).transpose()?;
        let description = description
            .map(|t| require("description", t))
            .transpose()?;
        let category = category
            .map(|t| require("category", t).map(|c| c.to_lowercase()))
            .transpose()?;

        let d = self.day_mut(day)?;
        let a = index
            .checked_sub(1)
            .and_then(|i| d.activities.get_mut(i))
            .ok_or_else(|| AppError::UnknownActivity {
                day: day.to_string(),
                index,
            })?;

        if let Some(t) = time {
            a.time = t;
        }
        if let Some(t) = description {
            a.description = t;
        }
        if let Some(c) = category {
            a.category = c;
        }
        Ok(a)
    }

    pub fn remove_activity(&mut self, day: &str, index: usize) -> AppResult<Activity> {
        let d = self.day_mut(day)?;
        if index == 0 || index > d.activities.len() {
            return Err(AppError::UnknownActivity {
                day: day.to_string(),
                index,
            });
        }
        Ok(d.activities.remove(index - 1))
    }

    pub fn set_title(&mut self, day: &str, title: &str) -> AppResult<()> {
        let title = require("title", title)?;
        self.day_mut(day)?.title = title;
        Ok(())
    }

    /// Append a new empty day after the highest numbered one and return its key.
    pub fn add_day(&mut self, title: Option<&str>) -> String {
        let next = self
            .doc
            .schedule
            .keys()
            .filter_map(|k| k.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let key = next.to_string();
        self.doc.schedule.insert(
            key.clone(),
            DaySchedule {
                title: title.map(|t| t.trim().to_string()).unwrap_or_default(),
                activities: Vec::new(),
            },
        );
        key
    }

    pub fn remove_day(&mut self, day: &str) -> AppResult<DaySchedule> {
        self.doc
            .schedule
            .remove(day)
            .ok_or_else(|| AppError::UnknownDay(day.to_string()))
    }

    /// Store `"First Last"`. Either part may be blank but not both.
    pub fn set_name(&mut self, first: &str, last: &str) -> AppResult<()> {
        let full = format!("{} {}", first.trim(), last.trim())
            .trim()
            .to_string();
        if full.is_empty() {
            return Err(AppError::InvalidInput(
                "first or last name is required".into(),
            ));
        }
        self.doc.user_name = full;
        Ok(())
    }

    pub fn clear_name(&mut self) {
        self.doc.user_name.clear();
    }

    pub fn set_notes(&mut self, text: &str) {
        self.doc.notes = text.to_string();
    }

    pub fn append_notes(&mut self, text: &str) {
        if !self.doc.notes.is_empty() && !self.doc.notes.ends_with('\n') {
            self.doc.notes.push('\n');
        }
        self.doc.notes.push_str(text);
    }

    pub fn clear_notes(&mut self) {
        self.doc.notes.clear();
    }

    /// Validate and store the cycle start date as `YYYY-MM-DD`.
    pub fn set_start(&mut self, value: &str) -> AppResult<NaiveDate> {
        let d = parse_flexible(value).ok_or_else(|| {
            AppError::InvalidDate(format!("'{}' (use YYYY-MM-DD or MM/DD/YYYY)", value.trim()))
        })?;
        self.doc.start_date = format_iso(d);
        Ok(d)
    }

    /// Stored start date, if any. Older files may hold `MM/DD/YYYY`; any
    /// other non-empty value is an error.
    pub fn start_date(&self) -> AppResult<Option<NaiveDate>> {
        let raw = self.doc.start_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_flexible(raw).map(Some).ok_or_else(|| {
            AppError::InvalidDate(format!(
                "stored start date '{raw}' in {} (fix it with `schedule start DATE`)",
                self.path.display()
            ))
        })
    }

    pub fn export_to(&self, dest: &Path) -> AppResult<()> {
        save_json(dest, &self.doc)
    }

    /// Replace the in-memory document with the one in `src`. Fails on any
    /// decoding error; the current document is left untouched.
    pub fn import_from(&mut self, src: &Path) -> AppResult<()> {
        let doc: ScheduleDocument = read_json(src)?;
        self.doc = doc;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.doc = default_document();
    }

    pub fn render_day(&self, day: &str, category: Option<&str>, color: bool) -> AppResult<String> {
        let d = self.day(day)?;
        let rows = self.show(day, category)?;

        let mut out = format!("{}\n", bold(&format!("Day {} – {}", day, d.display_title(day))));
        if rows.is_empty() {
            out.push_str("  (no activities)\n");
            return Ok(out);
        }

        let time_w = rows.iter().map(|(_, a)| a.time.len()).max().unwrap_or(0);
        for (i, a) in rows {
            let line = format!(
                "{:>3}. {}  {}",
                i,
                pad_right(&a.time, time_w),
                pad_right(&a.description, 44)
            );
            let tag = format!(" {} ", a.category);
            if color {
                out.push_str(&format!("{} {}\n", line, paint_on(&tag, color_for(&a.category))));
            } else {
                out.push_str(&format!("{} [{}]\n", line, a.category));
            }
        }
        Ok(out)
    }

    pub fn render_notes(&self) -> String {
        if self.doc.notes.trim().is_empty() {
            return "  (no notes)".to_string();
        }
        self.doc
            .notes
            .lines()
            .map(|l| wrap_indented(l, 76, "  "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One line per category with its color swatch.
pub fn render_legend(color: bool) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            if color {
                format!("{} {}", paint_on("    ", c.color()), c.as_str())
            } else {
                format!("{:<10} {}", c.as_str(), c.color())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
