use crate::cli::parser::{Commands, FavoriteAction, WeatherAction};
use crate::config::Config;
use crate::core::weather::{
    Favorites, MAP_ZOOM, WeatherClient, browser_url, icon_for, is_severe, read_last_city,
    tile_url, watch, write_last_city,
};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::weather::{AirQuality, CurrentWeather, Units, pollutant_name};
use crate::ui::messages::{alert, header, info, success, warning};
use crate::utils::colors::{RESET, fg_hex};
use crate::utils::formatting::{capitalize, wrap_indented};
use std::time::Duration;

/// Current weather for `city`, else the last searched city, else the
/// IP location. A city that resolves is remembered for next time.
fn current_for(cfg: &Config, client: &WeatherClient, city: Option<&str>) -> AppResult<CurrentWeather> {
    let city = city
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .or_else(|| read_last_city(&cfg.last_city_file()));

    match city {
        Some(c) => {
            let w = client.current_by_city(&c)?;
            if let Err(e) = write_last_city(&cfg.last_city_file(), &c) {
                warning(format!("Could not remember city: {e}"));
            }
            Ok(w)
        }
        None => {
            let loc = client.locate()?;
            info(format!("Using your location: {}", loc.city));
            client.current_by_coords(loc.lat, loc.lon)
        }
    }
}

fn print_current(w: &CurrentWeather, units: Units) {
    header(w.place());
    if let Some(t) = w.local_time {
        println!("{}", t.format("%d %b %Y  %H:%M"));
    }
    println!(
        "{}  {}{}  {}",
        icon_for(&w.icon),
        w.temp as i64,
        units.symbol(),
        capitalize(&w.description)
    );
    println!("Feels like : {}{}", w.feels_like as i64, units.symbol());
    println!("Humidity   : {}%", w.humidity);
    println!("Pressure   : {} hPa", w.pressure);
    println!("Wind       : {:.1} {}", w.wind_speed, units.speed());
    if let (Some(rise), Some(set)) = (w.sunrise, w.sunset) {
        println!("Sunrise    : {}", rise.format("%I:%M %p"));
        println!("Sunset     : {}", set.format("%I:%M %p"));
    }

    if is_severe(w.condition_id) {
        alert("Severe Weather Alert", capitalize(&w.description));
    }
}

fn print_air(aq: &AirQuality) {
    println!(
        "Air quality : {}{}{} ({}/5)",
        fg_hex(aq.level.color()),
        aq.level.label(),
        RESET,
        aq.level.index()
    );
    if let Some(key) = &aq.dominant {
        println!("Main pollutant : {}", pollutant_name(key));
    }
    println!("{}", wrap_indented(aq.level.health(), 72, "  "));
    println!("Recommendation : {}", aq.level.recommendation());
}

fn handle_favorites(action: &FavoriteAction, cfg: &Config) -> AppResult<()> {
    let mut favorites = Favorites::load(&cfg.favorites_file())?;

    match action {
        FavoriteAction::List => {
            if favorites.cities.is_empty() {
                info("No favorite cities yet (use `weather favorites add CITY`)");
            }
            for c in &favorites.cities {
                println!("★ {c}");
            }
        }
        FavoriteAction::Add { city } => {
            if favorites.add(city)? {
                favorites.save()?;
                success(format!("{} added to favorites", city.trim()));
                audit(cfg, "add", "favorites", city.trim());
            } else {
                warning(format!("{} is already a favorite", city.trim()));
            }
        }
        FavoriteAction::Remove { city } => {
            if favorites.remove(city) {
                favorites.save()?;
                success(format!("{} removed from favorites", city.trim()));
                audit(cfg, "del", "favorites", city.trim());
            } else {
                warning(format!("{} is not a favorite", city.trim()));
            }
        }
    }

    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Weather { units, action } = cmd else {
        return Ok(());
    };

    if let WeatherAction::Favorites { action } = action {
        return handle_favorites(action, cfg);
    }

    let units = units
        .or_else(|| Units::from_name(&cfg.weather.units))
        .unwrap_or_default();

    // IP lookup is the only call that works without an API key
    let api_key = match action {
        WeatherAction::Locate => cfg.weather_api_key().unwrap_or_default(),
        _ => cfg.weather_api_key()?,
    };
    let client = WeatherClient::new(&cfg.weather, api_key.clone(), units)?;

    match action {
        WeatherAction::Now { city, lat, lon } => {
            let w = match (lat, lon) {
                (Some(lat), Some(lon)) => client.current_by_coords(*lat, *lon)?,
                _ => current_for(cfg, &client, city.as_deref())?,
            };
            print_current(&w, units);
        }

        WeatherAction::Forecast { city } => {
            let w = current_for(cfg, &client, city.as_deref())?;
            let days = client.forecast(w.lat, w.lon)?;
            header(format!("{} – {}-day forecast", w.place(), days.len()));
            if days.is_empty() {
                warning("Forecast unavailable");
            }
            for d in days {
                println!(
                    "{}  {}  {:>4}{}  {}",
                    d.time.format("%a %d %b"),
                    icon_for(&d.icon),
                    d.temp as i64,
                    units.symbol(),
                    capitalize(&d.description)
                );
            }
        }

        WeatherAction::Air { city } => {
            let w = current_for(cfg, &client, city.as_deref())?;
            let aq = client.air_quality(w.lat, w.lon)?;
            header(format!("{} – air quality", w.place()));
            print_air(&aq);
        }

        WeatherAction::Favorites { .. } => {}

        WeatherAction::Locate => {
            let loc = client.locate()?;
            println!("{} ({:.4}, {:.4})", loc.city, loc.lat, loc.lon);
        }

        WeatherAction::Map { city, layer } => {
            let w = current_for(cfg, &client, city.as_deref())?;
            header(format!("{} – {:?} map", w.place(), layer));
            println!(
                "Tile    : {}",
                tile_url(&cfg.weather.tile_url, *layer, w.lat, w.lon, MAP_ZOOM, &api_key)
            );
            println!("Browser : {}", browser_url(*layer, w.lat, w.lon));
        }

        WeatherAction::Watch {
            city,
            interval,
            count,
        } => {
            let first = current_for(cfg, &client, city.as_deref())?;
            let (lat, lon) = (first.lat, first.lon);
            let secs = interval.unwrap_or(cfg.weather.poll_interval_secs).max(1);

            info(format!(
                "Watching {} every {} s (Ctrl+C to stop)",
                first.place(),
                secs
            ));
            let alerts = watch(
                first,
                || client.current_by_coords(lat, lon),
                Duration::from_secs(secs),
                *count,
            );
            info(format!("Watch finished, {alerts} alert(s) raised"));
        }
    }

    Ok(())
}
