use serde::{Deserialize, Serialize};

pub const CITY_NOT_FOUND: &str = "No detailed information available for this city.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub population: String,
    pub area: String,
    pub description: String,
}

impl CityInfo {
    pub fn new(population: &str, area: &str, description: &str) -> Self {
        Self {
            population: population.to_string(),
            area: area.to_string(),
            description: description.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("N/A", "N/A", CITY_NOT_FOUND)
    }

    pub fn is_known(&self) -> bool {
        self.description != CITY_NOT_FOUND
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CitySort {
    #[default]
    Name,
    NameDesc,
    Population,
    PopulationDesc,
    Area,
    AreaDesc,
}

/// Parse the leading quantity of strings like `"8.8 million"`, `"670,000"`
/// or `"1,302 km²"`. `None` for `"Unknown"` and other free text.
pub fn parse_quantity(s: &str) -> Option<f64> {
    let mut parts = s.split_whitespace();
    let number: f64 = parts.next()?.replace(',', "").parse().ok()?;
    let factor = match parts.next().map(|w| w.to_lowercase()) {
        Some(w) if w.starts_with("million") => 1_000_000.0,
        Some(w) if w.starts_with("thousand") => 1_000.0,
        Some(w) if w.starts_with("billion") => 1_000_000_000.0,
        _ => 1.0,
    };
    Some(number * factor)
}
