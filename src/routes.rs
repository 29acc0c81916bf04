//! HTTP handlers for the three pages.

use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};
use minijinja::context;

use crate::models::CropForm;
use crate::views::render;
use crate::AppState;

/// Fixed user-facing text for every prediction failure. The actual cause
/// goes to the log, never to the page.
pub const PREDICTION_ERROR_MESSAGE: &str =
    "An error occurred during prediction. Please try again.";

const SITE_TITLE: &str = "KisanBandhu - Crop Recommendation";

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    render(
        &state.templates,
        "index.html",
        context! { title => "KisanBandhu - Home" },
    )
}

#[get("/crop")]
pub async fn crop_form(state: web::Data<AppState>) -> impl Responder {
    render(
        &state.templates,
        "crop.html",
        context! { title => SITE_TITLE },
    )
}

#[post("/crop-prediction")]
pub async fn crop_prediction(
    state: web::Data<AppState>,
    form: web::Form<CropForm>,
) -> impl Responder {
    let service = state.service.clone();
    let submission = form.into_inner();

    let outcome = web::block(move || service.predict(&submission)).await;

    match outcome {
        Ok(Ok(crop)) => {
            info!("predicted crop: {crop}");
            render(
                &state.templates,
                "crop-res.html",
                context! { title => SITE_TITLE, prediction => crop },
            )
        }
        Ok(Err(e)) => {
            error!("prediction failed: {e}");
            error_page(&state)
        }
        Err(e) => {
            error!("blocking task failed: {e}");
            error_page(&state)
        }
    }
}

fn error_page(state: &web::Data<AppState>) -> HttpResponse {
    render(
        &state.templates,
        "try-again.html",
        context! { title => "Error", message => PREDICTION_ERROR_MESSAGE },
    )
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().body("Page not found")
}
