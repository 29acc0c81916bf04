//! Orchestration from form submission to crop name.

use std::sync::Arc;

use crate::crops::crop_name;
use crate::error::PredictError;
use crate::inference::CropClassifier;
use crate::models::CropForm;

/// Validates a submission, runs the classifier, and maps the label to a
/// crop name. Holds `None` when the model failed to load at startup; every
/// prediction then fails fast with [`PredictError::ModelUnavailable`].
#[derive(Clone)]
pub struct PredictionService {
    model: Option<Arc<dyn CropClassifier + Send + Sync>>,
}

impl PredictionService {
    pub fn new(model: Option<Arc<dyn CropClassifier + Send + Sync>>) -> Self {
        Self { model }
    }

    pub fn predict(&self, form: &CropForm) -> Result<&'static str, PredictError> {
        let features = form.to_features()?;
        let model = self.model.as_deref().ok_or(PredictError::ModelUnavailable)?;
        let label = model.predict(&features.to_array())?;
        Ok(crop_name(label))
    }
}
