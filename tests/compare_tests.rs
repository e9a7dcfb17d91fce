use hometools::core::compare::{
    AddCity, CityTable, MAX_COMPARE, compare_airlines, lookup_airline, rating_chart,
};
use hometools::models::airline::AIRLINE_NOT_FOUND;
use hometools::models::city::{CITY_NOT_FOUND, CitySort, NO_DESCRIPTION, parse_quantity};
use predicates::str::contains;
use std::path::PathBuf;

mod common;
use common::{ht, test_home};

fn cities_path(name: &str) -> PathBuf {
    test_home(name).join("cities.json")
}

fn names(rows: &[(String, hometools::models::city::CityInfo)]) -> Vec<&str> {
    rows.iter().map(|(n, _)| n.as_str()).collect()
}

#[test]
fn test_lookup_airline_case_insensitive() {
    let a = lookup_airline("dl");
    assert_eq!(a.name, "Delta Air Lines");
    assert_eq!(a.rating, Some(4.2));
    assert_eq!(a.hub, "Atlanta");
    assert_eq!(a.fleet_label(), "800");
}

#[test]
fn test_unknown_airline_sentinel() {
    let a = lookup_airline("zz");
    assert_eq!(a.code, "ZZ");
    assert_eq!(a.name, AIRLINE_NOT_FOUND);
    assert_eq!(a.rating_label(), "N/A");
    assert_eq!(a.hub, "N/A");
    assert_eq!(a.website, "N/A");
    assert_eq!(a.fleet_label(), "N/A");
    assert!(!a.is_known());
}

#[test]
fn test_compare_limits() {
    let none: Vec<String> = vec!["".into(), "  ".into()];
    let err = compare_airlines(&none).unwrap_err();
    assert!(err.to_string().contains("Please enter at least one airline code."));

    let too_many: Vec<String> = ["AA", "DL", "UA", "SW", "BR", "LH"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(too_many.len() > MAX_COMPARE);
    assert!(compare_airlines(&too_many).is_err());

    let ok = compare_airlines(&["ek".to_string(), "XX".to_string()]).unwrap();
    assert_eq!(ok.len(), 2);
    let chart = rating_chart(&ok);
    assert!(chart.contains("Emirates"));
    assert!(chart.contains("4.6"));
    assert!(!chart.contains(AIRLINE_NOT_FOUND));
}

#[test]
fn test_parse_quantity() {
    assert_eq!(parse_quantity("8.8 million"), Some(8_800_000.0));
    assert_eq!(parse_quantity("670,000"), Some(670_000.0));
    assert_eq!(parse_quantity("1,302 km²"), Some(1302.0));
    assert_eq!(parse_quantity("Unknown"), None);
}

#[test]
fn test_city_sorting() {
    let table = CityTable::load(&cities_path("city_sorting")).unwrap();

    let by_name = table.cities("USA", CitySort::Name).unwrap();
    assert_eq!(names(&by_name)[0], "Chicago");

    let by_pop = table.cities("usa", CitySort::PopulationDesc).unwrap();
    assert_eq!(names(&by_pop)[0], "New York");
    assert_eq!(*names(&by_pop).last().unwrap(), "Washington D.C.");

    let by_area = table.cities("USA", CitySort::Area).unwrap();
    assert_eq!(names(&by_area)[0], "Washington D.C.");
    assert_eq!(*names(&by_area).last().unwrap(), "Houston");
}

#[test]
fn test_unknown_values_sort_first() {
    let mut table = CityTable::load(&cities_path("city_unknown_first")).unwrap();
    table
        .add_city("USA", "Smallville", None, None, None)
        .unwrap();

    let rows = table.cities("USA", CitySort::Population).unwrap();
    assert_eq!(names(&rows)[0], "Smallville");
}

#[test]
fn test_lookup_city() {
    let table = CityTable::load(&cities_path("city_lookup")).unwrap();

    let ny = table.lookup_city("USA", "new york").unwrap();
    assert_eq!(ny.population, "8.8 million");

    let missing = table.lookup_city("USA", "Atlantis").unwrap();
    assert_eq!(missing.population, "N/A");
    assert_eq!(missing.description, CITY_NOT_FOUND);

    let err = table.lookup_city("Narnia", "Cair Paravel").unwrap_err();
    assert!(err.to_string().contains("No data for Narnia"));
}

#[test]
fn test_add_city_defaults_and_duplicates() {
    let path = cities_path("city_add");
    let mut table = CityTable::load(&path).unwrap();

    match table.add_city("usa", "Austin", Some("960,000"), Some("790"), None).unwrap() {
        AddCity::Added(info) => {
            assert_eq!(info.area, "790 km²");
            assert_eq!(info.description, NO_DESCRIPTION);
        }
        AddCity::Duplicate => panic!("Austin is new"),
    }
    assert_eq!(
        table.add_city("USA", "austin", None, None, None).unwrap(),
        AddCity::Duplicate
    );
    assert_eq!(
        table.add_city("USA", "New York", None, None, None).unwrap(),
        AddCity::Duplicate
    );
    table.save().unwrap();

    let reloaded = CityTable::load(&path).unwrap();
    let austin = reloaded.lookup_city("USA", "Austin").unwrap();
    assert_eq!(austin.population, "960,000");
}

#[test]
fn test_add_city_new_country() {
    let mut table = CityTable::load(&cities_path("city_new_country")).unwrap();
    table.add_city("Iceland", "Reykjavik", None, None, None).unwrap();

    assert!(table.countries().contains(&"Iceland".to_string()));
    let info = table.lookup_city("iceland", "Reykjavik").unwrap();
    assert_eq!(info.population, "Unknown");
    assert_eq!(info.area, "Unknown");
}

#[test]
fn test_cli_airline_compare() {
    let home = test_home("cli_airline_compare");

    ht(&home)
        .args(["airline", "dl", "sq", "zz"])
        .assert()
        .success()
        .stdout(contains("Delta Air Lines"))
        .stdout(contains("Singapore Airlines"))
        .stdout(contains("Airline not found"));

    ht(&home)
        .args(["airline"])
        .assert()
        .failure()
        .stderr(contains("Please enter at least one airline code."));
}

#[test]
fn test_cli_city_add_and_list() {
    let home = test_home("cli_city_add_list");

    ht(&home)
        .args(["city", "add", "Canada", "Halifax", "--area", "5490"])
        .assert()
        .success()
        .stdout(contains("5490 km²"));

    ht(&home)
        .args(["city", "add", "Canada", "Halifax"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    ht(&home)
        .args(["city", "list", "Canada", "--sort", "area-desc"])
        .assert()
        .success()
        .stdout(contains("Halifax"))
        .stdout(contains("Ottawa"));

    ht(&home)
        .args(["city", "show", "Mars", "Olympus"])
        .assert()
        .failure()
        .stderr(contains("No data for Mars"));
}
