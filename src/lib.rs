//! KisanBandhu: a crop recommendation front-end.
//!
//! Collects seven soil/climate measurements from an HTML form, runs six of
//! them through a pre-trained ONNX classifier, and renders the predicted
//! crop name.

pub mod crops;
pub mod error;
pub mod inference;
pub mod models;
pub mod routes;
pub mod service;
pub mod views;

use std::sync::Arc;

use minijinja::Environment;

use inference::CropClassifier;
use service::PredictionService;

/// Shared per-process state: the compiled templates and the prediction
/// service holding the (possibly absent) model handle. Read-only after
/// startup.
pub struct AppState {
    pub templates: Environment<'static>,
    pub service: PredictionService,
}

impl AppState {
    pub fn new(
        model: Option<Arc<dyn CropClassifier + Send + Sync>>,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            templates: views::build_templates()?,
            service: PredictionService::new(model),
        })
    }
}

/// Registers the three page routes plus the 404 fallback on an actix app.
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(routes::home)
        .service(routes::crop_form)
        .service(routes::crop_prediction)
        .default_service(actix_web::web::route().to(routes::not_found));
}
