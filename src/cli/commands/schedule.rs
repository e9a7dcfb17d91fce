use crate::cli::parser::{Commands, ScheduleAction};
use crate::config::Config;
use crate::core::schedule::{ScheduleLogic, render_legend};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::format_long;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Schedule { action } = cmd else {
        return Ok(());
    };

    let mut planner = ScheduleLogic::load(&cfg.schedule_file())?;

    match action {
        ScheduleAction::Show {
            day,
            category,
            no_color,
        } => {
            header(planner.doc.planner_title());
            if let Some(start) = planner.start_date()? {
                println!("Cycle start: {}\n", format_long(start));
            }

            let keys = match day {
                Some(d) => vec![d.clone()],
                None => planner.days().into_iter().map(|(k, _)| k).collect(),
            };
            for k in keys {
                println!(
                    "{}",
                    planner.render_day(&k, category.as_deref(), !*no_color)?
                );
            }

            if day.is_none() {
                println!("Notes:\n{}", planner.render_notes());
            }
        }

        ScheduleAction::Add {
            day,
            time,
            description,
            category,
        } => {
            if Category::from_name(category).is_none() {
                warning(format!("'{category}' is not a known category; it will be shown uncolored"));
            }
            let n = planner.add_activity(day, time, description, category)?;
            planner.save()?;
            success(format!("Added activity #{n} to day {day}"));
            audit(cfg, "add", &format!("day {day}"), &format!("{time} {description}"));
        }

        ScheduleAction::Edit {
            day,
            index,
            time,
            description,
            category,
        } => {
            if time.is_none() && description.is_none() && category.is_none() {
                warning("Nothing to change: pass --time, --desc or --category");
                return Ok(());
            }
            let a = planner
                .edit_activity(
                    day,
                    *index,
                    time.as_deref(),
                    description.as_deref(),
                    category.as_deref(),
                )?
                .clone();
            planner.save()?;
            success(format!(
                "Activity #{index} of day {day} is now: {} {} [{}]",
                a.time, a.description, a.category
            ));
            audit(cfg, "edit", &format!("day {day} #{index}"), &a.description);
        }

        ScheduleAction::Remove { day, index } => {
            let a = planner.remove_activity(day, *index)?;
            planner.save()?;
            success(format!("Removed '{}' from day {day}", a.description));
            audit(cfg, "del", &format!("day {day} #{index}"), &a.description);
        }

        ScheduleAction::Title { day, title } => {
            planner.set_title(day, title)?;
            planner.save()?;
            success(format!("Day {day} renamed to '{}'", title.trim()));
            audit(cfg, "set_title", &format!("day {day}"), title);
        }

        ScheduleAction::AddDay { title } => {
            let key = planner.add_day(title.as_deref());
            planner.save()?;
            success(format!("Day {key} added"));
            audit(cfg, "add_day", &format!("day {key}"), title.as_deref().unwrap_or(""));
        }

        ScheduleAction::RemoveDay { day } => {
            let removed = planner.remove_day(day)?;
            planner.save()?;
            success(format!(
                "Day {day} removed ({} activities)",
                removed.activities.len()
            ));
            audit(cfg, "remove_day", &format!("day {day}"), &removed.display_title(day));
        }

        ScheduleAction::Name { first, last, clear } => {
            if *clear {
                planner.clear_name();
            } else {
                planner.set_name(
                    first.as_deref().unwrap_or(""),
                    last.as_deref().unwrap_or(""),
                )?;
            }
            planner.save()?;
            success(planner.doc.planner_title());
            audit(cfg, "set_name", "schedule", &planner.doc.user_name);
        }

        ScheduleAction::Notes { set, append, clear } => {
            let changed = if *clear {
                planner.clear_notes();
                true
            } else if let Some(text) = set {
                planner.set_notes(text);
                true
            } else if let Some(text) = append {
                planner.append_notes(text);
                true
            } else {
                false
            };

            if changed {
                planner.save()?;
                success("Notes saved");
                audit(cfg, "notes", "schedule", "notes updated");
            } else {
                println!("Notes:\n{}", planner.render_notes());
            }
        }

        ScheduleAction::Start { date } => match date {
            Some(d) => {
                let start = planner.set_start(d)?;
                planner.save()?;
                success(format!("Cycle start set to {}", format_long(start)));
                audit(cfg, "set_start", "schedule", &planner.doc.start_date);
            }
            None => match planner.start_date()? {
                Some(start) => println!("{}", format_long(start)),
                None => info("No cycle start date set (use `schedule start DATE`)"),
            },
        },

        ScheduleAction::Legend { no_color } => {
            println!("{}", render_legend(!*no_color));
        }

        ScheduleAction::Export { file } => {
            planner.export_to(Path::new(file))?;
            success(format!("Planner saved to {file}"));
            audit(cfg, "export", file, "planner exported");
        }

        ScheduleAction::Import { file } => {
            planner.import_from(Path::new(file))?;
            planner.save()?;
            success(format!(
                "Planner loaded from {file} ({} days)",
                planner.doc.schedule.len()
            ));
            audit(cfg, "import", file, "planner imported");
        }

        ScheduleAction::Reset => {
            planner.reset();
            planner.save()?;
            success("Planner restored to the default plan");
            audit(cfg, "reset", "schedule", "default plan restored");
        }
    }

    Ok(())
}
