use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_AQI: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    No2,
    O3,
    Co,
}

impl Pollutant {
    /// Evaluation order of the weighted sum.
    pub const ALL: [Pollutant; 4] = [Pollutant::Pm25, Pollutant::No2, Pollutant::O3, Pollutant::Co];

    /// Key of the measurement in the request body.
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::Co => "co",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "Particulate Matter (PM2.5)",
            Pollutant::No2 => "Nitrogen Dioxide (NO2)",
            Pollutant::O3 => "Ozone (O3)",
            Pollutant::Co => "Carbon Monoxide (CO)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "μg/m³",
            Pollutant::No2 | Pollutant::O3 => "ppb",
            Pollutant::Co => "ppm",
        }
    }

    /// Reference maximum used to normalize a raw concentration.
    pub fn ceiling(self) -> f64 {
        match self {
            Pollutant::Pm25 => 500.0,
            Pollutant::No2 => 2000.0,
            Pollutant::O3 => 500.0,
            Pollutant::Co => 50.0,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Pollutant::Pm25 => 0.4,
            Pollutant::No2 => 0.3,
            Pollutant::O3 => 0.2,
            Pollutant::Co => 0.1,
        }
    }

    /// AQI points per unit of concentration: `weight * MAX_AQI / ceiling`.
    pub fn coefficient(self) -> f64 {
        self.weight() * f64::from(MAX_AQI) / self.ceiling()
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One concentration per pollutant, as read from a request body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSet {
    pub pm25: f64,
    pub no2: f64,
    pub o3: f64,
    pub co: f64,
}

impl MeasurementSet {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
        }
    }
}

/// Article-prefixed name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub prediction: u16,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_score(score: u16) -> Self {
        match score {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}
