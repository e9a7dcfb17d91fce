//! Airline and city reference lookups.

use crate::data::airlines::AIRLINES;
use crate::data::cities::COUNTRIES;
use crate::errors::{AppError, AppResult};
use crate::models::airline::AirlineInfo;
use crate::models::city::{CityInfo, CitySort, NO_DESCRIPTION, UNKNOWN, parse_quantity};
use crate::storage::{Loaded, load_json, save_json};
use crate::ui::messages::warning;
use crate::utils::formatting::{bar, pad_right};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const MAX_COMPARE: usize = 5;
const RATING_SCALE: f64 = 5.0;
const BAR_WIDTH: usize = 25;

// ---------------------------------------------------------------------------
// Airlines
// ---------------------------------------------------------------------------

/// Case-insensitive lookup; unknown codes yield the not-found record.
pub fn lookup_airline(code: &str) -> AirlineInfo {
    let code = code.trim().to_uppercase();
    AIRLINES
        .iter()
        .find(|(c, ..)| *c == code)
        .map(|(c, name, rating, hub, website, fleet)| AirlineInfo {
            code: c.to_string(),
            name: name.to_string(),
            rating: Some(*rating),
            hub: hub.to_string(),
            website: website.to_string(),
            fleet: Some(*fleet),
        })
        .unwrap_or_else(|| AirlineInfo::not_found(&code))
}

pub fn airline_codes() -> Vec<&'static str> {
    AIRLINES.iter().map(|(c, ..)| *c).collect()
}

/// Look up to `MAX_COMPARE` codes. Blank entries are ignored.
pub fn compare_airlines(codes: &[String]) -> AppResult<Vec<AirlineInfo>> {
    let codes: Vec<&str> = codes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    if codes.is_empty() {
        return Err(AppError::InvalidInput(
            "Please enter at least one airline code.".into(),
        ));
    }
    if codes.len() > MAX_COMPARE {
        return Err(AppError::InvalidInput(format!(
            "At most {MAX_COMPARE} airlines can be compared at once."
        )));
    }

    Ok(codes.into_iter().map(lookup_airline).collect())
}

/// Rating bars for the known airlines of `list`.
pub fn rating_chart(list: &[AirlineInfo]) -> String {
    let name_w = list
        .iter()
        .filter(|a| a.is_known())
        .map(|a| a.name.len())
        .max()
        .unwrap_or(0);

    list.iter()
        .filter_map(|a| {
            a.rating.map(|r| {
                format!(
                    "{} │{} {:.1}",
                    pad_right(&a.name, name_w),
                    pad_right(&bar(r, RATING_SCALE, BAR_WIDTH), BAR_WIDTH),
                    r
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

/// User-added cities, keyed by country then city.
pub type UserCities = BTreeMap<String, BTreeMap<String, CityInfo>>;

/// Built-in city table merged with the user's additions.
pub struct CityTable {
    path: PathBuf,
    user: UserCities,
}

/// Outcome of `CityTable::add_city`.
#[derive(Debug, PartialEq, Eq)]
pub enum AddCity {
    Added(CityInfo),
    Duplicate,
}

fn builtin(country: &str) -> Option<&'static [(&'static str, &'static str, &'static str, &'static str)]> {
    COUNTRIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(country.trim()))
        .map(|(_, rows)| *rows)
}

fn canonical_country(country: &str) -> String {
    COUNTRIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(country.trim()))
        .map(|(c, _)| c.to_string())
        .unwrap_or_else(|| country.trim().to_string())
}

/// Unparseable quantities order before any number.
fn cmp_quantity(a: &str, b: &str) -> Ordering {
    match (parse_quantity(a), parse_quantity(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl CityTable {
    pub fn load(path: &Path) -> AppResult<Self> {
        let user = match load_json::<UserCities>(path)? {
            Loaded::Quarantined(moved) => {
                warning(format!(
                    "City file could not be read; moved to {}",
                    moved.display()
                ));
                UserCities::new()
            }
            other => other.or_else_default(UserCities::new),
        };
        Ok(Self::with_user_cities(path, user))
    }

    pub fn with_user_cities(path: &Path, user: UserCities) -> Self {
        Self {
            path: path.to_path_buf(),
            user,
        }
    }

    pub fn save(&self) -> AppResult<()> {
        save_json(&self.path, &self.user)
    }

    /// Built-in countries first, then countries only the user added.
    pub fn countries(&self) -> Vec<String> {
        let mut out: Vec<String> = COUNTRIES.iter().map(|(c, _)| c.to_string()).collect();
        for c in self.user.keys() {
            if !out.iter().any(|o| o.eq_ignore_ascii_case(c)) {
                out.push(c.clone());
            }
        }
        out
    }

    fn user_country(&self, country: &str) -> Option<&BTreeMap<String, CityInfo>> {
        self.user
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(country.trim()))
            .map(|(_, m)| m)
    }

    /// Every city of `country`, sorted. Unknown country → `NotFound`.
    pub fn cities(&self, country: &str, sort: CitySort) -> AppResult<Vec<(String, CityInfo)>> {
        let base = builtin(country);
        let extra = self.user_country(country);
        if base.is_none() && extra.is_none() {
            return Err(AppError::NotFound(format!("No data for {}", country.trim())));
        }

        let mut rows: Vec<(String, CityInfo)> = base
            .unwrap_or(&[])
            .iter()
            .map(|(name, pop, area, desc)| (name.to_string(), CityInfo::new(pop, area, desc)))
            .collect();

        if let Some(extra) = extra {
            for (name, info) in extra {
                if !rows.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)) {
                    rows.push((name.clone(), info.clone()));
                }
            }
        }

        match sort {
            CitySort::Name => rows.sort_by(|a, b| a.0.cmp(&b.0)),
            CitySort::NameDesc => rows.sort_by(|a, b| b.0.cmp(&a.0)),
            CitySort::Population => rows.sort_by(|a, b| cmp_quantity(&a.1.population, &b.1.population)),
            CitySort::PopulationDesc => {
                rows.sort_by(|a, b| cmp_quantity(&b.1.population, &a.1.population))
            }
            CitySort::Area => rows.sort_by(|a, b| cmp_quantity(&a.1.area, &b.1.area)),
            CitySort::AreaDesc => rows.sort_by(|a, b| cmp_quantity(&b.1.area, &a.1.area)),
        }

        Ok(rows)
    }

    /// Details of one city, or the not-found record when the country is
    /// known but the city is not.
    pub fn lookup_city(&self, country: &str, city: &str) -> AppResult<CityInfo> {
        let rows = self.cities(country, CitySort::Name)?;
        Ok(rows
            .into_iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(city.trim()))
            .map(|(_, info)| info)
            .unwrap_or_else(CityInfo::not_found))
    }

    /// Register a city. Missing fields fall back to `Unknown` and the
    /// default description; a bare number area gets `km²` appended.
    pub fn add_city(
        &mut self,
        country: &str,
        city: &str,
        population: Option<&str>,
        area: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<AddCity> {
        let country = canonical_country(country);
        let city = city.trim();
        if country.is_empty() || city.is_empty() {
            return Err(AppError::InvalidInput(
                "country and city are required".into(),
            ));
        }

        let exists = match self.cities(&country, CitySort::Name) {
            Ok(rows) => rows.iter().any(|(n, _)| n.eq_ignore_ascii_case(city)),
            Err(_) => false,
        };
        if exists {
            return Ok(AddCity::Duplicate);
        }

        let pick = |v: Option<&str>, fallback: &str| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        let mut area = pick(area, UNKNOWN);
        if area.chars().all(|c| c.is_ascii_digit()) {
            area.push_str(" km²");
        }

        let info = CityInfo {
            population: pick(population, UNKNOWN),
            area,
            description: pick(description, NO_DESCRIPTION),
        };

        self.user
            .entry(country)
            .or_default()
            .insert(city.to_string(), info.clone());
        Ok(AddCity::Added(info))
    }
}
