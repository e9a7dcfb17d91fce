use serde::Serialize;

pub const AIRLINE_NOT_FOUND: &str = "Airline not found";
pub const NOT_AVAILABLE: &str = "N/A";

/// Airline record. `rating` and `fleet` are `None` for the not-found
/// sentinel and display as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineInfo {
    pub code: String,
    pub name: String,
    pub rating: Option<f64>,
    pub hub: String,
    pub website: String,
    pub fleet: Option<u32>,
}

impl AirlineInfo {
    pub fn not_found(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: AIRLINE_NOT_FOUND.to_string(),
            rating: None,
            hub: NOT_AVAILABLE.to_string(),
            website: NOT_AVAILABLE.to_string(),
            fleet: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.name != AIRLINE_NOT_FOUND
    }

    pub fn rating_label(&self) -> String {
        self.rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn fleet_label(&self) -> String {
        self.fleet
            .map(|f| f.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}
