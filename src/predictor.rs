use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{json_kind, MeasurementSet, Pollutant, MAX_AQI};

#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("missing parameter `{0}` ({name}, {unit})", name = .0.display_name(), unit = .0.unit())]
    MissingParameter(Pollutant),

    #[error("parameter `{pollutant}` must be a number, found {found}")]
    MalformedParameter { pollutant: Pollutant, found: String },
}

impl MeasurementSet {
    /// Reads the four required measurements out of a JSON object. Extra keys are ignored.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, PredictError> {
        let read = |pollutant: Pollutant| -> Result<f64, PredictError> {
            let value = object
                .get(pollutant.key())
                .ok_or(PredictError::MissingParameter(pollutant))?;
            value.as_f64().ok_or_else(|| PredictError::MalformedParameter {
                pollutant,
                found: json_kind(value).to_string(),
            })
        };

        Ok(MeasurementSet {
            pm25: read(Pollutant::Pm25)?,
            no2: read(Pollutant::No2)?,
            o3: read(Pollutant::O3)?,
            co: read(Pollutant::Co)?,
        })
    }
}

/// Fixed weighted-sum AQI model. Holds no state, so one instance serves every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct Predictor;

impl Predictor {
    pub fn predict(&self, measurements: &MeasurementSet) -> u16 {
        let score: f64 = Pollutant::ALL
            .iter()
            .map(|&p| measurements.get(p) * p.coefficient())
            .sum();

        score.floor().clamp(0.0, f64::from(MAX_AQI)) as u16
    }

    pub fn predict_json(&self, object: &Map<String, Value>) -> Result<u16, PredictError> {
        let measurements = MeasurementSet::from_json(object)?;
        Ok(self.predict(&measurements))
    }
}
