use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the API `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" => Some(Units::Metric),
            "imperial" | "f" => Some(Units::Imperial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
    pub wind_speed: f64,
    pub condition_id: i64,
    pub description: String,
    pub icon: String,
    /// Observation time shifted into the city's own timezone.
    pub local_time: Option<NaiveDateTime>,
    /// Sunrise and sunset, also in the city's own timezone.
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

impl CurrentWeather {
    pub fn place(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub time: NaiveDateTime,
    pub temp: f64,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MapLayer {
    #[default]
    Temperature,
    Clouds,
    Precipitation,
    Wind,
    Pressure,
}

impl MapLayer {
    pub fn code(&self) -> &'static str {
        match self {
            MapLayer::Temperature => "temp_new",
            MapLayer::Clouds => "clouds_new",
            MapLayer::Precipitation => "precipitation_new",
            MapLayer::Wind => "wind_new",
            MapLayer::Pressure => "pressure_new",
        }
    }
}

/// OpenWeatherMap air quality index, 1 (good) to 5 (very poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AqiLevel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(AqiLevel::Good),
            2 => Some(AqiLevel::Fair),
            3 => Some(AqiLevel::Moderate),
            4 => Some(AqiLevel::Poor),
            5 => Some(AqiLevel::VeryPoor),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            AqiLevel::Good => 1,
            AqiLevel::Fair => 2,
            AqiLevel::Moderate => 3,
            AqiLevel::Poor => 4,
            AqiLevel::VeryPoor => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Fair => "Fair",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::Poor => "Poor",
            AqiLevel::VeryPoor => "Very Poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AqiLevel::Good => "#4CAF50",
            AqiLevel::Fair => "#8BC34A",
            AqiLevel::Moderate => "#FFC107",
            AqiLevel::Poor => "#FF9800",
            AqiLevel::VeryPoor => "#F44336",
        }
    }

    pub fn health(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is good. Ideal for outdoor activities.",
            AqiLevel::Fair => {
                "Air quality is acceptable. Some pollutants may affect very sensitive individuals."
            }
            AqiLevel::Moderate => {
                "Members of sensitive groups may experience health effects. General public is less likely to be affected."
            }
            AqiLevel::Poor => {
                "Everyone may begin to experience health effects. Sensitive groups may experience more serious effects."
            }
            AqiLevel::VeryPoor => {
                "Health alert: Everyone may experience more serious health effects. Avoid outdoor activities."
            }
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Enjoy outdoor activities",
            AqiLevel::Fair => "Sensitive individuals should consider limiting prolonged outdoor exertion",
            AqiLevel::Moderate => "Sensitive groups should limit outdoor exertion",
            AqiLevel::Poor => "Everyone should reduce outdoor exertion",
            AqiLevel::VeryPoor => "Everyone should avoid outdoor activities",
        }
    }
}

/// Display name of a pollutant key from the air pollution API.
pub fn pollutant_name(key: &str) -> &str {
    match key {
        "co" => "Carbon Monoxide (CO)",
        "no" => "Nitrogen Monoxide (NO)",
        "no2" => "Nitrogen Dioxide (NO₂)",
        "o3" => "Ozone (O₃)",
        "so2" => "Sulfur Dioxide (SO₂)",
        "pm2_5" => "Fine Particles (PM2.5)",
        "pm10" => "Coarse Particles (PM10)",
        "nh3" => "Ammonia (NH₃)",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQuality {
    pub level: AqiLevel,
    /// Concentrations in μg/m³, keyed by pollutant.
    pub components: BTreeMap<String, f64>,
    /// Key of the pollutant with the highest concentration.
    pub dominant: Option<String>,
}
