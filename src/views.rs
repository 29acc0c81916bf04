//! HTML rendering via minijinja templates embedded at compile time.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use log::error;
use minijinja::value::Value;
use minijinja::Environment;

/// Builds the shared template environment. Sources are embedded, so a
/// failure here means a template shipped broken.
pub fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template("crop.html", include_str!("../templates/crop.html"))?;
    env.add_template("crop-res.html", include_str!("../templates/crop-res.html"))?;
    env.add_template("try-again.html", include_str!("../templates/try-again.html"))?;
    Ok(env)
}

/// Renders a named template to an HTTP 200 HTML response.
pub fn render(env: &Environment<'static>, name: &str, ctx: Value) -> HttpResponse {
    match env.get_template(name).and_then(|t| t.render(ctx)) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!("failed to render template {name}: {e}");
            HttpResponse::InternalServerError().body("Error loading page")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn all_templates_compile() {
        build_templates().unwrap();
    }

    #[test]
    fn result_template_carries_the_prediction() {
        let env = build_templates().unwrap();
        let body = env
            .get_template("crop-res.html")
            .unwrap()
            .render(context! { title => "KisanBandhu - Crop Recommendation", prediction => "rice" })
            .unwrap();
        assert!(body.contains("rice"));
    }

    #[test]
    fn error_template_carries_the_message() {
        let env = build_templates().unwrap();
        let body = env
            .get_template("try-again.html")
            .unwrap()
            .render(context! { title => "Error", message => "An error occurred during prediction. Please try again." })
            .unwrap();
        assert!(body.contains("An error occurred during prediction"));
    }
}
