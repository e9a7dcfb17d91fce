//! OpenWeatherMap client and the pure helpers around it.
//!
//! Responses are decoded from `serde_json::Value` first so the `cod` and
//! `message` fields of error bodies can be checked before the typed decode.

use crate::config::WeatherConfig;
use crate::errors::{AppError, AppResult};
use crate::models::weather::{
    AirQuality, AqiLevel, CurrentWeather, ForecastDay, GeoLocation, MapLayer, Units,
};
use crate::storage::{Loaded, load_json, save_json};
use crate::ui::messages::{alert, warning};
use crate::utils::formatting::capitalize;
use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
pub const FORECAST_DAYS: usize = 5;
pub const MAP_ZOOM: u32 = 5;
const FORECAST_HOUR: u32 = 12;
const BROWSER_MAP_URL: &str = "https://openweathermap.org/weathermap";
const AIR_UNAVAILABLE: &str = "Air quality data not available for this location";

#[derive(Deserialize)]
struct RawCondition {
    id: i64,
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct RawMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: i64,
    #[serde(default)]
    pressure: i64,
}

#[derive(Deserialize, Default)]
struct RawWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Deserialize)]
struct RawCoord {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize, Default)]
struct RawSys {
    #[serde(default)]
    country: String,
    #[serde(default)]
    sunrise: Option<i64>,
    #[serde(default)]
    sunset: Option<i64>,
}

#[derive(Deserialize)]
struct RawCurrent {
    name: String,
    coord: RawCoord,
    #[serde(default)]
    sys: RawSys,
    main: RawMain,
    #[serde(default)]
    wind: RawWind,
    weather: Vec<RawCondition>,
    #[serde(default)]
    dt: i64,
    #[serde(default)]
    timezone: i64,
}

#[derive(Deserialize)]
struct RawForecastItem {
    dt: i64,
    main: RawMain,
    weather: Vec<RawCondition>,
}

#[derive(Deserialize)]
struct RawForecast {
    list: Vec<RawForecastItem>,
}

#[derive(Deserialize)]
struct RawAirMain {
    aqi: i64,
}

#[derive(Deserialize)]
struct RawAirItem {
    main: RawAirMain,
    #[serde(default)]
    components: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct RawAir {
    #[serde(default)]
    list: Vec<RawAirItem>,
}

#[derive(Deserialize)]
struct RawLocation {
    #[serde(default)]
    status: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// `cod` arrives as a number on success and as a string on most errors.
fn cod_of(body: &Value) -> Option<i64> {
    match body.get("cod")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn api_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(capitalize)
        .unwrap_or_else(|| fallback.to_string())
}

fn decode<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Api(format!("Unexpected weather response: {e}")))
}

fn from_unix(ts: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0).map(|d| d.naive_utc())
}

/// Decode a `/weather` body.
pub fn parse_current(body: Value) -> AppResult<CurrentWeather> {
    if cod_of(&body) != Some(200) {
        return Err(AppError::Api(api_message(&body, "City not found")));
    }

    let raw: RawCurrent = decode(body)?;
    let cond = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Api("Weather response has no conditions".into()))?;

    Ok(CurrentWeather {
        city: raw.name,
        country: raw.sys.country,
        lat: raw.coord.lat,
        lon: raw.coord.lon,
        temp: raw.main.temp,
        feels_like: raw.main.feels_like,
        humidity: raw.main.humidity,
        pressure: raw.main.pressure,
        wind_speed: raw.wind.speed,
        condition_id: cond.id,
        description: cond.description,
        icon: cond.icon,
        local_time: from_unix(raw.dt + raw.timezone),
        sunrise: raw.sys.sunrise.and_then(|t| from_unix(t + raw.timezone)),
        sunset: raw.sys.sunset.and_then(|t| from_unix(t + raw.timezone)),
    })
}

/// Decode a `/forecast` body into one entry per day taken at noon UTC.
pub fn parse_forecast(body: Value) -> AppResult<Vec<ForecastDay>> {
    if cod_of(&body) != Some(200) {
        return Err(AppError::Api(api_message(&body, "Forecast unavailable")));
    }

    let raw: RawForecast = decode(body)?;
    let mut days: Vec<ForecastDay> = Vec::new();

    for item in raw.list {
        let Some(time) = from_unix(item.dt) else {
            continue;
        };
        if time.hour() != FORECAST_HOUR || days.iter().any(|d| d.time.date() == time.date()) {
            continue;
        }
        let Some(cond) = item.weather.into_iter().next() else {
            continue;
        };
        days.push(ForecastDay {
            time,
            temp: item.main.temp,
            description: cond.description,
            icon: cond.icon,
        });
        if days.len() == FORECAST_DAYS {
            break;
        }
    }

    Ok(days)
}

/// Decode an `/air_pollution` body. Successful bodies carry no `cod`.
pub fn parse_air_quality(body: Value) -> AppResult<AirQuality> {
    if body.get("cod").is_some() && cod_of(&body) != Some(200) {
        return Err(AppError::Api(api_message(&body, AIR_UNAVAILABLE)));
    }

    let raw: RawAir = decode(body)?;
    let item = raw
        .list
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Api(AIR_UNAVAILABLE.into()))?;
    let level = AqiLevel::from_index(item.main.aqi)
        .ok_or_else(|| AppError::Api(format!("Unknown air quality index {}", item.main.aqi)))?;

    let dominant = item
        .components
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(k, _)| k.clone());

    Ok(AirQuality {
        level,
        components: item.components,
        dominant,
    })
}

/// Decode an ip-api body.
pub fn parse_location(body: Value) -> AppResult<GeoLocation> {
    let raw: RawLocation = decode(body)?;
    if raw.status != "success" {
        return Err(AppError::Api("Could not determine location".into()));
    }
    Ok(GeoLocation {
        city: raw.city,
        lat: raw.lat,
        lon: raw.lon,
    })
}

/// Emoji for an API icon code such as `10d`; only the first two characters
/// matter.
pub fn icon_for(code: &str) -> &'static str {
    match code.get(..2).unwrap_or("") {
        "01" => "☀️",
        "02" => "🌤️",
        "03" | "04" => "☁️",
        "09" => "🌧️",
        "10" => "🌦️",
        "11" => "⛈️",
        "13" => "❄️",
        "50" => "🌫️",
        _ => "❓",
    }
}

/// Slippy-map tile holding `(lat, lon)` at `zoom`.
pub fn deg2num(lat: f64, lon: f64, zoom: u32) -> (i64, i64) {
    let lat_rad = lat.to_radians();
    let n = 2f64.powi(zoom as i32);
    let x = ((lon + 180.0) / 360.0 * n) as i64;
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n)
        as i64;
    (x, y)
}

pub fn tile_url(base: &str, layer: MapLayer, lat: f64, lon: f64, zoom: u32, api_key: &str) -> String {
    let (x, y) = deg2num(lat, lon, zoom);
    format!(
        "{}/{}/{}/{}/{}.png?appid={}",
        base.trim_end_matches('/'),
        layer.code(),
        zoom,
        x,
        y,
        api_key
    )
}

pub fn browser_url(layer: MapLayer, lat: f64, lon: f64) -> String {
    format!(
        "{BROWSER_MAP_URL}?basemap=map&cities=true&layer={}&lat={}&lon={}&zoom={}",
        layer.code(),
        lat,
        lon,
        MAP_ZOOM
    )
}

pub fn is_severe(condition_id: i64) -> bool {
    condition_id < 800 || condition_id >= 900
}

/// Remembers the last alert so a lasting storm is reported once.
#[derive(Debug, Default)]
pub struct AlertTracker {
    last: Option<String>,
}

impl AlertTracker {
    /// Description to alert on, or `None` when the weather is calm or the
    /// same alert was already raised.
    pub fn check(&mut self, w: &CurrentWeather) -> Option<String> {
        if !is_severe(w.condition_id) {
            return None;
        }
        let desc = capitalize(&w.description);
        if self.last.as_deref() == Some(desc.as_str()) {
            return None;
        }
        self.last = Some(desc.clone());
        Some(desc)
    }
}

pub fn read_last_city(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn write_last_city(path: &Path, city: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, city.trim())?;
    Ok(())
}

/// Favorite cities in the order they were added, kept in a JSON array.
pub struct Favorites {
    path: PathBuf,
    pub cities: Vec<String>,
}

impl Favorites {
    pub fn load(path: &Path) -> AppResult<Self> {
        let cities = match load_json::<Vec<String>>(path)? {
            Loaded::Quarantined(moved) => {
                warning(format!(
                    "Favorites file could not be read; moved to {}",
                    moved.display()
                ));
                Vec::new()
            }
            other => other.or_else_default(Vec::new),
        };
        Ok(Self {
            path: path.to_path_buf(),
            cities,
        })
    }

    pub fn save(&self) -> AppResult<()> {
        save_json(&self.path, &self.cities)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city.trim()))
    }

    /// `false` when the city is already a favorite (case-insensitive).
    pub fn add(&mut self, city: &str) -> AppResult<bool> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::InvalidInput("Please enter a city name".into()));
        }
        if self.contains(city) {
            return Ok(false);
        }
        self.cities.push(city.to_string());
        Ok(true)
    }

    /// `false` when the city was not a favorite.
    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|c| !c.eq_ignore_ascii_case(city.trim()));
        self.cities.len() != before
    }
}

pub struct WeatherClient {
    http: reqwest::blocking::Client,
    api_key: String,
    api_url: String,
    geo_url: String,
    units: Units,
}

impl WeatherClient {
    pub fn new(cfg: &WeatherConfig, api_key: String, units: Units) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            api_url: cfg.api_url.trim_end_matches('/').to_string(),
            geo_url: cfg.geo_url.clone(),
            units,
        })
    }

    pub fn units(&self) -> Units {
        self.units
    }

    fn get(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<Value> {
        let url = format!("{}/{}", self.api_url, endpoint);
        let mut params: Vec<(&str, String)> = query.to_vec();
        params.push(("appid", self.api_key.clone()));
        params.push(("units", self.units.as_query().to_string()));

        // Error bodies carry `cod`/`message`, so the status is not checked here.
        let body = self.http.get(&url).query(&params).send()?.json::<Value>()?;
        Ok(body)
    }

    pub fn current_by_city(&self, city: &str) -> AppResult<CurrentWeather> {
        parse_current(self.get("weather", &[("q", city.trim().to_string())])?)
    }

    pub fn current_by_coords(&self, lat: f64, lon: f64) -> AppResult<CurrentWeather> {
        parse_current(self.get(
            "weather",
            &[("lat", lat.to_string()), ("lon", lon.to_string())],
        )?)
    }

    pub fn forecast(&self, lat: f64, lon: f64) -> AppResult<Vec<ForecastDay>> {
        parse_forecast(self.get(
            "forecast",
            &[("lat", lat.to_string()), ("lon", lon.to_string())],
        )?)
    }

    pub fn air_quality(&self, lat: f64, lon: f64) -> AppResult<AirQuality> {
        parse_air_quality(self.get(
            "air_pollution",
            &[("lat", lat.to_string()), ("lon", lon.to_string())],
        )?)
    }

    pub fn locate(&self) -> AppResult<GeoLocation> {
        let body = self.http.get(&self.geo_url).send()?.json::<Value>()?;
        parse_location(body)
    }
}

/// Check `first`, then poll `fetch` every `interval`, raising an alert for
/// each new severe condition. Fetch errors are reported and polling goes on.
/// `count` bounds the number of checks including `first`; `None` runs until
/// interrupted.
pub fn watch<F>(first: CurrentWeather, mut fetch: F, interval: Duration, count: Option<u32>) -> u32
where
    F: FnMut() -> AppResult<CurrentWeather>,
{
    let mut tracker = AlertTracker::default();
    let mut alerts = 0;
    let mut checks = 0u32;
    let mut current = Ok(first);

    loop {
        match current {
            Ok(w) => {
                if let Some(desc) = tracker.check(&w) {
                    alert("Severe Weather Alert", format!("{} – {}", w.place(), desc));
                    alerts += 1;
                }
            }
            Err(e) => warning(format!("Weather check failed: {e}")),
        }

        checks += 1;
        if count.is_some_and(|c| checks >= c) {
            break;
        }
        std::thread::sleep(interval);
        current = fetch();
    }

    alerts
}
