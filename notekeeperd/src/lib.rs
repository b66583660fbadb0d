use std::path::Path;
use figment::Figment;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use notekeeper::config::figment::FigmentExt;
use crate::app_constants::FORM_LIMIT_KIB;

mod access;
mod app_constants;
mod app_setup;
mod routes;

pub use app_setup::AppSetupFairing;

/// Rocket's defaults, with a form limit above the largest note, under the
/// application config layers.
pub fn make_figment(config_file: impl AsRef<Path>) -> Figment {
    Figment::from(rocket::Config::default())
        .merge((
            rocket::Config::LIMITS,
            Limits::default().limit("form", FORM_LIMIT_KIB.kibibytes()),
        ))
        .setup_app_config(config_file)
}

pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Template::fairing())
        .attach(AppSetupFairing)
}
