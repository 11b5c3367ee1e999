use actix_web::web;

pub mod health;
pub mod reports;
pub mod settings;
pub mod trips;
pub mod users;

/// Mount every module's routes under `/api`.
/// Shared by the binary and the contract tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(users::controllers::auth_controller::configure)
            .configure(trips::controllers::trip_controller::configure)
            .configure(reports::controllers::report_controller::configure)
            .configure(settings::controllers::settings_controller::configure)
            .configure(health::controllers::health_controller::configure),
    );
}
