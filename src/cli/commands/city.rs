use crate::cli::parser::{CityAction, Commands};
use crate::config::Config;
use crate::core::compare::{AddCity, CityTable};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::wrap_indented;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::City { action } = cmd else {
        return Ok(());
    };

    let mut table = CityTable::load(&cfg.cities_file())?;

    match action {
        CityAction::Countries => {
            for c in table.countries() {
                println!("{c}");
            }
        }

        CityAction::List { country, sort } => {
            let rows = table.cities(country, *sort)?;
            let mut out = Table::with_headers(&["City", "Population", "Area"]);
            for (name, info) in &rows {
                out.add_row(vec![name.clone(), info.population.clone(), info.area.clone()]);
            }
            header(country.trim());
            print!("{}", out.render());
        }

        CityAction::Show { country, city } => {
            let info = table.lookup_city(country, city)?;
            header(format!("{}, {}", city.trim(), country.trim()));
            println!("Population : {}", info.population);
            println!("Area       : {}", info.area);
            println!("{}", wrap_indented(&info.description, 72, "  "));
        }

        CityAction::Add {
            country,
            city,
            population,
            area,
            description,
        } => match table.add_city(
            country,
            city,
            population.as_deref(),
            area.as_deref(),
            description.as_deref(),
        )? {
            AddCity::Added(info) => {
                table.save()?;
                success(format!(
                    "Added {} to {} (population {}, area {})",
                    city.trim(),
                    country.trim(),
                    info.population,
                    info.area
                ));
                audit(cfg, "add_city", country.trim(), city.trim());
            }
            AddCity::Duplicate => {
                warning(format!("{} already exists in {}", city.trim(), country.trim()));
            }
        },
    }

    Ok(())
}
