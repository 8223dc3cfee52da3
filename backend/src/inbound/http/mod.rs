//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod apod;
pub mod error;
pub mod health;
pub mod root;
pub mod schemas;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod weather;
pub mod xkcd;

pub use error::ApiResult;

/// Register every API route and the extractor error handlers.
///
/// Callers provide `web::Data<state::HttpState>` and
/// `web::Data<health::HealthState>` as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let _app = App::new().configure(warehouse::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(root::root)
        .service(health::ready)
        .service(health::live)
        .service(students::create_student)
        .service(students::list_students)
        .service(students::get_student)
        .service(students::update_student)
        .service(students::delete_student)
        .service(weather::current_weather)
        .service(apod::picture_of_the_day)
        .service(xkcd::latest_comic)
        .service(xkcd::comic_by_number);
}
