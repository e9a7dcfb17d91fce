use crate::cli::parser::{Commands, TodoAction};
use crate::config::Config;
use crate::core::todo::TaskList;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::strike;
use crate::utils::table::Table;

fn task_row(t: &Task) -> Vec<String> {
    let mark = if t.completed { "✔" } else { " " };
    let sel = if t.selected { "•" } else { " " };
    let title = if t.completed {
        strike(&t.title)
    } else {
        t.title.clone()
    };
    vec![
        t.id.to_string(),
        format!("{sel}{mark}"),
        title,
        t.created_at.clone(),
    ]
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Todo { action } = cmd else {
        return Ok(());
    };

    let mut list = TaskList::load(&cfg.tasks_file())?;

    match action {
        TodoAction::Add { title, description } => {
            let t = list.add(title, description)?;
            let msg = format!("Task #{} added: {}", t.id, t.title);
            list.save()?;
            success(&msg);
            audit(cfg, "add", "todo", &msg);
        }

        TodoAction::List { search, filter } => {
            let tasks = list.filter(search, *filter);
            if tasks.is_empty() {
                info("No tasks to show.");
            } else {
                let mut table = Table::with_headers(&["ID", "", "Title", "Created"]);
                for t in tasks {
                    table.add_row(task_row(t));
                }
                print!("{}", table.render());
            }
            println!("{}", list.status());
        }

        TodoAction::Done { id } => {
            let done = list.toggle_completion(*id)?;
            list.save()?;
            let state = if done { "completed" } else { "not completed" };
            success(format!("Task #{id} marked {state}"));
            audit(cfg, "toggle", &format!("task {id}"), state);
        }

        TodoAction::Select { id } => {
            let selected = list.toggle_selection(*id)?;
            list.save()?;
            if selected {
                success(format!("Task #{id} selected"));
            } else {
                success(format!("Task #{id} unselected"));
            }
        }

        TodoAction::Show { id } => {
            let t = list.details(*id)?;
            println!("Task #{}", t.id);
            println!("  Title      : {}", t.title);
            if t.description.is_empty() {
                println!("  Description: {GREY}(none){RESET}");
            } else {
                println!("  Description: {}", t.description);
            }
            println!("  Completed  : {}", if t.completed { "yes" } else { "no" });
            println!("  Created    : {}", t.created_at);
        }

        TodoAction::Delete { ids } => {
            let n = if ids.is_empty() {
                list.delete_selected()
            } else {
                list.delete(ids)?
            };
            if n == 0 {
                info("No tasks selected for deletion.");
                return Ok(());
            }
            list.save()?;
            success(format!("Deleted {n} task(s)"));
            audit(cfg, "del", "todo", &format!("{n} task(s) deleted"));
        }

        TodoAction::Status => {
            println!("{}", list.status());
        }
    }

    Ok(())
}
