use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compare::{airline_codes, compare_airlines, rating_chart};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Airline { codes, list } = cmd {
        if *list {
            println!("Known airline codes: {}", airline_codes().join(", "));
            if codes.is_empty() {
                return Ok(());
            }
        }

        let airlines = compare_airlines(codes)?;

        let mut table = Table::with_headers(&["Code", "Airline", "Rating", "Hub", "Website", "Fleet"]);
        for a in &airlines {
            table.add_row(vec![
                a.code.clone(),
                a.name.clone(),
                a.rating_label(),
                a.hub.clone(),
                a.website.clone(),
                a.fleet_label(),
            ]);
        }
        header("Airline comparison");
        print!("{}", table.render());

        for a in airlines.iter().filter(|a| !a.is_known()) {
            warning(format!("{}: {}", a.code, a.name));
        }

        let bars = rating_chart(&airlines);
        if !bars.is_empty() {
            println!();
            header("Ratings (out of 5)");
            println!("{bars}");
        }
    }

    Ok(())
}
