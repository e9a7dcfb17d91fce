use hometools::core::weather::{
    AlertTracker, FORECAST_DAYS, Favorites, browser_url, deg2num, icon_for, is_severe,
    parse_air_quality, parse_current, parse_forecast, parse_location, read_last_city, tile_url,
    watch, write_last_city,
};
use hometools::errors::AppError;
use hometools::models::weather::{AqiLevel, CurrentWeather, MapLayer, Units, pollutant_name};
use predicates::str::contains;
use serde_json::{Value, json};
use std::cell::Cell;
use std::time::Duration;

mod common;
use common::{ht, test_home};

/// 2024-01-01 00:00:00 UTC
const JAN_1: i64 = 1_704_067_200;

fn current_body(id: i64, description: &str) -> Value {
    json!({
        "cod": 200,
        "name": "London",
        "coord": { "lat": 51.51, "lon": -0.13 },
        "sys": { "country": "GB", "sunrise": JAN_1 + 7 * 3600, "sunset": JAN_1 + 16 * 3600 },
        "main": { "temp": 11.6, "feels_like": 10.2, "humidity": 81, "pressure": 1012 },
        "wind": { "speed": 4.1 },
        "weather": [ { "id": id, "description": description, "icon": "10d" } ],
        "dt": JAN_1 + 12 * 3600,
        "timezone": 3600
    })
}

fn sample(id: i64, description: &str) -> CurrentWeather {
    parse_current(current_body(id, description)).unwrap()
}

#[test]
fn test_parse_current() {
    let w = sample(500, "light rain");
    assert_eq!(w.place(), "London, GB");
    assert_eq!(w.humidity, 81);
    assert_eq!(w.condition_id, 500);
    assert_eq!(w.icon, "10d");
    let local = w.local_time.unwrap();
    assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 13:00");
    assert_eq!(w.sunrise.unwrap().format("%I:%M %p").to_string(), "08:00 AM");
    assert_eq!(w.sunset.unwrap().format("%I:%M %p").to_string(), "05:00 PM");
}

#[test]
fn test_parse_current_without_sun_times() {
    let mut body = current_body(800, "clear sky");
    body["sys"] = json!({ "country": "GB" });
    let w = parse_current(body).unwrap();
    assert!(w.sunrise.is_none());
    assert!(w.sunset.is_none());
}

#[test]
fn test_parse_air_quality() {
    let body = json!({
        "coord": { "lat": 51.51, "lon": -0.13 },
        "list": [ {
            "main": { "aqi": 3 },
            "components": { "co": 201.94, "no2": 0.77, "o3": 68.66, "pm2_5": 0.5, "pm10": 0.54 },
            "dt": JAN_1
        } ]
    });
    let aq = parse_air_quality(body).unwrap();
    assert_eq!(aq.level, AqiLevel::Moderate);
    assert_eq!(aq.level.index(), 3);
    assert_eq!(aq.dominant.as_deref(), Some("co"));
    assert_eq!(aq.components.len(), 5);
    assert_eq!(pollutant_name("pm2_5"), "Fine Particles (PM2.5)");
}

#[test]
fn test_parse_air_quality_failures() {
    let err = parse_air_quality(json!({ "list": [] })).unwrap_err();
    assert_eq!(err.to_string(), "Air quality data not available for this location");

    let err = parse_air_quality(json!({ "cod": 401, "message": "invalid API key" })).unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.to_string(), "Invalid API key");

    let err = parse_air_quality(json!({ "list": [ { "main": { "aqi": 9 }, "components": {} } ] }))
        .unwrap_err();
    assert!(err.to_string().contains("Unknown air quality index 9"));
}

#[test]
fn test_aqi_levels() {
    assert_eq!(AqiLevel::from_index(1), Some(AqiLevel::Good));
    assert_eq!(AqiLevel::from_index(5), Some(AqiLevel::VeryPoor));
    assert_eq!(AqiLevel::from_index(0), None);
    assert_eq!(AqiLevel::VeryPoor.label(), "Very Poor");
    assert_eq!(AqiLevel::Good.color(), "#4CAF50");
    assert!(!AqiLevel::Poor.recommendation().is_empty());
}

#[test]
fn test_favorites_add_remove_and_persist() {
    let home = test_home("weather_favorites");
    let path = home.join("favorites.json");

    let mut favs = Favorites::load(&path).unwrap();
    assert!(favs.cities.is_empty());
    assert!(favs.add(" Paris ").unwrap());
    assert!(favs.add("Tokyo").unwrap());
    assert!(!favs.add("paris").unwrap());
    assert!(matches!(favs.add("  "), Err(AppError::InvalidInput(_))));
    favs.save().unwrap();

    let mut again = Favorites::load(&path).unwrap();
    assert_eq!(again.cities, vec!["Paris", "Tokyo"]);
    assert!(again.contains("TOKYO"));
    assert!(again.remove("tokyo"));
    assert!(!again.remove("Berlin"));
    assert_eq!(again.cities, vec!["Paris"]);
}

#[test]
fn test_parse_current_error_body() {
    let err = parse_current(json!({ "cod": "404", "message": "city not found" })).unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.to_string(), "City not found");

    let err = parse_current(json!({ "cod": 401 })).unwrap_err();
    assert_eq!(err.to_string(), "City not found");
}

#[test]
fn test_parse_forecast_takes_noon_entries() {
    // six days of three-hourly entries
    let list: Vec<Value> = (0..48)
        .map(|i| {
            json!({
                "dt": JAN_1 + i * 3 * 3600,
                "main": { "temp": i as f64 },
                "weather": [ { "id": 800, "description": "clear sky", "icon": "01d" } ]
            })
        })
        .collect();

    let days = parse_forecast(json!({ "cod": "200", "list": list })).unwrap();
    assert_eq!(days.len(), FORECAST_DAYS);
    assert_eq!(days[0].time.format("%Y-%m-%d %H").to_string(), "2024-01-01 12");
    assert_eq!(days[4].time.format("%Y-%m-%d").to_string(), "2024-01-05");
    assert_eq!(days[0].temp, 4.0);
    assert!(days.iter().all(|d| d.time.format("%H").to_string() == "12"));
}

#[test]
fn test_parse_forecast_error_body() {
    let err = parse_forecast(json!({ "cod": "400", "message": "wrong latitude" })).unwrap_err();
    assert_eq!(err.to_string(), "Wrong latitude");
}

#[test]
fn test_parse_location() {
    let loc = parse_location(json!({
        "status": "success", "city": "Lisbon", "lat": 38.72, "lon": -9.14
    }))
    .unwrap();
    assert_eq!(loc.city, "Lisbon");
    assert_eq!(loc.lat, 38.72);

    let err = parse_location(json!({ "status": "fail", "message": "private range" })).unwrap_err();
    assert_eq!(err.to_string(), "Could not determine location");
}

#[test]
fn test_icons_and_severity() {
    assert_eq!(icon_for("01d"), "☀️");
    assert_eq!(icon_for("04n"), "☁️");
    assert_eq!(icon_for("13d"), "❄️");
    assert_eq!(icon_for("zz"), "❓");
    assert_eq!(icon_for(""), "❓");

    assert!(is_severe(211));
    assert!(is_severe(781));
    assert!(!is_severe(800));
    assert!(!is_severe(804));
    assert!(is_severe(902));
}

#[test]
fn test_map_urls() {
    assert_eq!(deg2num(0.0, 0.0, 1), (1, 1));
    assert_eq!(deg2num(0.0, -180.0, 3), (0, 4));

    let url = tile_url("https://tiles.test/map/", MapLayer::Clouds, 0.0, 0.0, 1, "KEY");
    assert_eq!(url, "https://tiles.test/map/clouds_new/1/1/1.png?appid=KEY");

    let link = browser_url(MapLayer::Wind, 10.5, 20.25);
    assert!(link.contains("layer=wind_new"));
    assert!(link.contains("lat=10.5"));
    assert!(link.contains("lon=20.25"));
}

#[test]
fn test_alert_tracker_raises_once_per_condition() {
    let mut tracker = AlertTracker::default();
    let storm = sample(211, "thunderstorm");
    let calm = sample(800, "clear sky");

    assert_eq!(tracker.check(&storm).as_deref(), Some("Thunderstorm"));
    assert_eq!(tracker.check(&storm), None);
    assert_eq!(tracker.check(&calm), None);
    assert_eq!(
        tracker.check(&sample(502, "heavy intensity rain")).as_deref(),
        Some("Heavy intensity rain")
    );
}

#[test]
fn test_watch_counts_new_alerts() {
    let script = [211, 800, 502];
    let fetches = Cell::new(0usize);

    let alerts = watch(
        sample(211, "thunderstorm"),
        || {
            let i = fetches.get();
            fetches.set(i + 1);
            match script.get(i) {
                Some(211) => Ok(sample(211, "thunderstorm")),
                Some(502) => Ok(sample(502, "heavy intensity rain")),
                Some(_) => Ok(sample(800, "clear sky")),
                None => Err(AppError::Api("offline".into())),
            }
        },
        Duration::from_millis(0),
        Some(5),
    );

    assert_eq!(fetches.get(), 4);
    assert_eq!(alerts, 2);
}

#[test]
fn test_watch_alerts_on_first_reading_without_refetching() {
    let fetches = Cell::new(0usize);

    let alerts = watch(
        sample(781, "tornado"),
        || {
            fetches.set(fetches.get() + 1);
            Ok(sample(800, "clear sky"))
        },
        Duration::from_millis(0),
        Some(1),
    );

    assert_eq!(alerts, 1);
    assert_eq!(fetches.get(), 0);
}

#[test]
fn test_last_city_round_trip() {
    let home = test_home("weather_last_city");
    let path = home.join("nested").join("last_city.txt");

    assert_eq!(read_last_city(&path), None);
    write_last_city(&path, "  Oslo \n").unwrap();
    assert_eq!(read_last_city(&path).as_deref(), Some("Oslo"));
}

#[test]
fn test_units() {
    assert_eq!(Units::from_name("Imperial"), Some(Units::Imperial));
    assert_eq!(Units::from_name("c"), Some(Units::Metric));
    assert_eq!(Units::from_name("kelvin"), None);
    assert_eq!(Units::Imperial.symbol(), "°F");
    assert_eq!(Units::Metric.speed(), "m/s");
}

#[test]
fn test_cli_weather_requires_api_key() {
    let home = test_home("cli_weather_no_key");
    ht(&home).args(["--test", "init"]).assert().success();

    ht(&home)
        .args(["weather", "now", "London"])
        .assert()
        .failure()
        .stderr(contains("no weather API key"));
}

#[test]
fn test_cli_weather_favorites_work_without_api_key() {
    let home = test_home("cli_weather_favorites");
    ht(&home).args(["--test", "init"]).assert().success();

    ht(&home)
        .args(["weather", "favorites", "add", "Rome"])
        .assert()
        .success()
        .stdout(contains("Rome added to favorites"));
    ht(&home)
        .args(["weather", "favorites", "add", "rome"])
        .assert()
        .success()
        .stdout(contains("already a favorite"));
    ht(&home)
        .args(["weather", "favorites", "list"])
        .assert()
        .success()
        .stdout(contains("Rome"));
    ht(&home)
        .args(["weather", "favorites", "remove", "ROME"])
        .assert()
        .success()
        .stdout(contains("removed from favorites"));
    ht(&home)
        .args(["weather", "favorites", "list"])
        .assert()
        .success()
        .stdout(contains("No favorite cities yet"));
}
