use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const CONFIG_DIR_ENV: &str = "HOMETOOLS_CONFIG_DIR";
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub data_dir: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub inr: InrConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Length of the off and on blocks of the rotating shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_block")]
    pub off_days: u32,
    #[serde(default = "default_block")]
    pub on_days: u32,
}

/// Therapeutic INR range used for alerts and charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InrConfig {
    #[serde(default = "default_inr_low")]
    pub low: f64,
    #[serde(default = "default_inr_high")]
    pub high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_geo_url")]
    pub geo_url: String,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_theme() -> String {
    "light".to_string()
}
fn default_block() -> u32 {
    4
}
fn default_inr_low() -> f64 {
    2.0
}
fn default_inr_high() -> f64 {
    3.0
}
fn default_units() -> String {
    "metric".to_string()
}
fn default_api_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}
fn default_geo_url() -> String {
    "http://ip-api.com/json".to_string()
}
fn default_tile_url() -> String {
    "https://tile.openweathermap.org/map".to_string()
}
fn default_poll_interval() -> u64 {
    600
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            off_days: default_block(),
            on_days: default_block(),
        }
    }
}

impl Default for InrConfig {
    fn default() -> Self {
        Self {
            low: default_inr_low(),
            high: default_inr_high(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            units: default_units(),
            api_url: default_api_url(),
            geo_url: default_geo_url(),
            tile_url: default_tile_url(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            theme: default_theme(),
            cycle: CycleConfig::default(),
            inr: InrConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `HOMETOOLS_CONFIG_DIR` wins over the platform default.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hometools")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hometools")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hometools.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hometools.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Point every data file at `dir`. The database follows unless it was
    /// given explicitly.
    pub fn relocate_data(&mut self, dir: &str, keep_database: bool) {
        self.data_dir = dir.to_string();
        if !keep_database {
            self.database = Path::new(dir)
                .join("hometools.sqlite")
                .to_string_lossy()
                .to_string();
        }
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_dir)
    }

    pub fn schedule_file(&self) -> PathBuf {
        self.data_path().join("schedule.json")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_path().join("tasks.json")
    }

    pub fn cities_file(&self) -> PathBuf {
        self.data_path().join("cities.json")
    }

    pub fn last_city_file(&self) -> PathBuf {
        self.data_path().join("last_city.txt")
    }

    pub fn favorites_file(&self) -> PathBuf {
        self.data_path().join("favorites.json")
    }

    pub fn database_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.database)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    /// API key from the config file, falling back to `OPENWEATHER_API_KEY`.
    pub fn weather_api_key(&self) -> AppResult<String> {
        if !self.weather.api_key.trim().is_empty() {
            return Ok(self.weather.api_key.trim().to_string());
        }
        match env::var(API_KEY_ENV) {
            Ok(k) if !k.trim().is_empty() => Ok(k.trim().to_string()),
            _ => Err(AppError::Config(format!(
                "no weather API key: set weather.api_key in {} or {}",
                Self::config_file().display(),
                API_KEY_ENV
            ))),
        }
    }

    /// Initialize configuration directory, config file and data directory.
    pub fn init_all(
        custom_db: Option<String>,
        custom_data_dir: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        if let Some(data_dir) = custom_data_dir {
            config.relocate_data(&data_dir, custom_db.is_some());
        }

        // DB name: user provided or default
        if let Some(name) = custom_db {
            let p = Path::new(&name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            config.database = db_path.to_string_lossy().to_string();
        }

        fs::create_dir_all(config.data_path())?;

        if !is_test {
            config.save(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
