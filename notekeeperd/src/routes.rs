use rocket::{catchers, routes, Build, Rocket};

mod auth;
mod catchers;
mod errors;
mod model;
mod notes;

pub trait NotekeeperRocketBuildExt {
    fn install_notekeeper_notes(self) -> Self;
    fn install_notekeeper_auth(self) -> Self;
    fn install_notekeeper_catchers(self) -> Self;
}

impl NotekeeperRocketBuildExt for Rocket<Build> {
    fn install_notekeeper_notes(self) -> Self {
        self.mount(
            "/",
            routes![
                notes::index,
                notes::search,
                notes::add,
                notes::add_get,
                notes::edit_page,
                notes::edit,
                notes::delete,
                notes::delete_get,
                notes::edit_page_bad_id,
                notes::edit_bad_id,
                notes::delete_bad_id,
            ],
        )
    }

    fn install_notekeeper_auth(self) -> Self {
        self.mount(
            "/",
            routes![
                auth::register_page,
                auth::register,
                auth::login_page,
                auth::login,
                auth::logout,
            ],
        )
    }

    fn install_notekeeper_catchers(self) -> Self {
        self.register(
            "/",
            catchers![
                catchers::unauthorized,
                catchers::forbidden,
                catchers::not_found,
                catchers::method_not_allowed,
                catchers::unprocessable,
                catchers::internal_error,
            ],
        )
    }
}
