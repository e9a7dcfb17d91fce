//! Household tool recommendations.

use crate::data::home_tools::{TOOL_CATEGORIES, ToolRow};
use crate::errors::{AppError, AppResult};
use crate::models::tool::{Tool, ToolCategory};

fn to_category(name: &str, rows: &[ToolRow]) -> ToolCategory {
    ToolCategory {
        name: name.to_string(),
        tools: rows
            .iter()
            .map(|(n, d)| Tool {
                name: n.to_string(),
                description: d.to_string(),
            })
            .collect(),
    }
}

/// `(category, tool count)` in display order.
pub fn category_summary() -> Vec<(&'static str, usize)> {
    TOOL_CATEGORIES
        .iter()
        .map(|(name, rows)| (*name, rows.len()))
        .collect()
}

pub fn all_categories() -> Vec<ToolCategory> {
    TOOL_CATEGORIES
        .iter()
        .map(|(name, rows)| to_category(name, rows))
        .collect()
}

/// Resolve `query` to one category: a 1-based position, an exact name
/// (any case) or a fragment that matches a single name.
pub fn find_category(query: &str) -> AppResult<ToolCategory> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Please enter a category".into()));
    }

    if let Ok(n) = query.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| TOOL_CATEGORIES.get(i))
            .map(|(name, rows)| to_category(name, rows))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "category #{n} (choose 1-{})",
                    TOOL_CATEGORIES.len()
                ))
            });
    }

    if let Some((name, rows)) = TOOL_CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(query))
    {
        return Ok(to_category(name, rows));
    }

    let needle = query.to_lowercase();
    let hits: Vec<&(&str, &[ToolRow])> = TOOL_CATEGORIES
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .collect();

    match hits.as_slice() {
        [(name, rows)] => Ok(to_category(name, rows)),
        [] => Err(AppError::NotFound(format!("tool category '{query}'"))),
        many => Err(AppError::InvalidInput(format!(
            "'{query}' matches several categories: {}",
            many.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ")
        ))),
    }
}
