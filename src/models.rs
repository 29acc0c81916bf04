//! Form payload and feature vector types.

use serde::Deserialize;

use crate::error::PredictError;

/// Raw form submission from the crop recommendation page.
///
/// Every field is optional at the deserialization layer so a missing key
/// surfaces as a tagged [`PredictError::MissingField`] instead of an
/// extractor-level rejection.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CropForm {
    pub nitrogen: Option<String>,
    pub phosphorous: Option<String>,
    pub potassium: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub ph: Option<String>,
    pub rainfall: Option<String>,
}

/// The six numeric inputs the classifier was trained on, in training order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub nitrogen: i32,
    pub phosphorous: i32,
    pub potassium: i32,
    pub temperature: f32,
    pub humidity: f32,
    pub ph: f32,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.nitrogen as f32,
            self.phosphorous as f32,
            self.potassium as f32,
            self.temperature,
            self.humidity,
            self.ph,
        ]
    }
}

fn require<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, PredictError> {
    value
        .as_deref()
        .ok_or(PredictError::MissingField { field })
}

fn parse_int(value: &Option<String>, field: &'static str) -> Result<i32, PredictError> {
    let raw = require(value, field)?;
    raw.trim()
        .parse()
        .map_err(|_| PredictError::MalformedNumber {
            field,
            value: raw.to_string(),
        })
}

fn parse_float(value: &Option<String>, field: &'static str) -> Result<f32, PredictError> {
    let raw = require(value, field)?;
    raw.trim()
        .parse()
        .map_err(|_| PredictError::MalformedNumber {
            field,
            value: raw.to_string(),
        })
}

impl CropForm {
    /// Coerces the seven form fields into a [`FeatureVector`].
    ///
    /// Values are checked for numeric well-formedness only; no plausibility
    /// bounds are applied. `rainfall` must parse but is not part of the
    /// vector: the model takes six features.
    pub fn to_features(&self) -> Result<FeatureVector, PredictError> {
        let nitrogen = parse_int(&self.nitrogen, "nitrogen")?;
        let phosphorous = parse_int(&self.phosphorous, "phosphorous")?;
        let potassium = parse_int(&self.potassium, "potassium")?;
        let temperature = parse_float(&self.temperature, "temperature")?;
        let humidity = parse_float(&self.humidity, "humidity")?;
        let ph = parse_float(&self.ph, "ph")?;
        let _rainfall = parse_float(&self.rainfall, "rainfall")?;

        Ok(FeatureVector {
            nitrogen,
            phosphorous,
            potassium,
            temperature,
            humidity,
            ph,
        })
    }
}
