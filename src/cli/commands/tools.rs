use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tools::{all_categories, category_summary, find_category};
use crate::errors::AppResult;
use crate::models::tool::ToolCategory;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, wrap_indented};
use crate::utils::table::Table;

fn print_category(cat: &ToolCategory) {
    header(&cat.name);
    for t in &cat.tools {
        println!("{}", bold(&t.name));
        println!("{}", wrap_indented(&t.description, 78, "  "));
    }
}

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    let Commands::Tools { category, all } = cmd else {
        return Ok(());
    };

    if *all {
        for (i, cat) in all_categories().iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_category(cat);
        }
        return Ok(());
    }

    match category {
        Some(query) => print_category(&find_category(query)?),
        None => {
            let mut table = Table::with_headers(&["#", "Category", "Tools"]);
            for (i, (name, count)) in category_summary().into_iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), name.to_string(), count.to_string()]);
            }
            header("Tool categories");
            print!("{}", table.render());
            info("Run `tools CATEGORY` (name, part of it or number) or `tools --all`");
        }
    }

    Ok(())
}
