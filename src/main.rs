use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use kisanbandhu::inference::{CropClassifier, CropModel};
use kisanbandhu::{configure, AppState};

const MODEL_PATH: &str = "models/crop_rf.onnx";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("Starting KisanBandhu crop recommendation service");

    // Startup continues without a model; prediction requests then fail
    // fast with the generic error page instead of crashing the process.
    let model: Option<Arc<dyn CropClassifier + Send + Sync>> = match CropModel::load(MODEL_PATH) {
        Ok(model) => {
            info!("crop model loaded from {MODEL_PATH}");
            Some(Arc::new(model))
        }
        Err(e) => {
            error!("failed to load crop model from {MODEL_PATH}: {e}");
            error!("running in degraded mode; all predictions will fail");
            None
        }
    };

    let state = web::Data::new(
        AppState::new(model).map_err(|e| std::io::Error::other(e.to_string()))?,
    );

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);

    let bind_address = format!("{host}:{port}");

    info!("listening on http://{bind_address} with {workers} workers");
    info!("routes:");
    info!("  GET  /                - home page");
    info!("  GET  /crop            - crop recommendation form");
    info!("  POST /crop-prediction - prediction result");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
