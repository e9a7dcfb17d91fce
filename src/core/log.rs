use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

pub fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "add_day" | "add_city" | "import" => Colour::Green,
        "del" | "remove_day" | "reset" => Colour::Red,
        "edit" | "set_title" | "set_name" | "set_start" | "notes" | "toggle" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Log lines ready to print, oldest first.
    pub fn lines(pool: &DbPool) -> AppResult<Vec<String>> {
        let entries: Vec<(i64, String, String, String, String)> = load_log(pool)?
            .into_iter()
            .map(|(id, raw_date, op, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, op, target, message)
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(0);

        let mut out = Vec::with_capacity(entries.len());
        for (id, date, op, target, message) in entries {
            let color = color_for_operation(&op);
            let mut visible = if target.is_empty() {
                op.clone()
            } else {
                format!("{op} ({target})")
            };
            if visible.chars().count() > OP_WIDTH {
                visible = visible.chars().take(OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((word, rest)) => format!("{} {}", color.paint(word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        Ok(out)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = Self::lines(pool)?;
        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }
        println!("📜 Internal log:\n");
        for l in lines {
            println!("{l}");
        }
        Ok(())
    }
}
