use log::{info, warn};
use rocket::form::Form;
use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, State};
use rocket_dyn_templates::{context, Template};
use data::UsernameString;
use notekeeper::user_db::{UserDb, UserDbError};
use crate::access::{Authenticated, SameOrigin};
use crate::app_constants::{INDEX_PATH, LOGIN_PATH, REGISTER_PATH, SESSION_COOKIE};
use crate::routes::errors::RouteError;
use crate::routes::model::{CredentialsForm, Notice};

#[get("/register")]
pub fn register_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "register",
        context! {
            notice: flash.map(Notice::from),
        },
    )
}

#[post("/register", data = "<form>")]
pub async fn register(
    _origin: SameOrigin,
    user_db: &State<Box<dyn UserDb>>,
    form: Form<CredentialsForm>,
) -> Result<Flash<Redirect>, RouteError> {
    let username: UsernameString = match form.username.trim().parse() {
        Ok(username) => username,
        Err(e) => return Ok(
            Flash::error(Redirect::to(REGISTER_PATH), format!("Invalid username: {e}."))
        ),
    };
    match user_db.register_user(&username, &form.password).await {
        Ok(user) => {
            info!("user \"{}\" registered with id {}", user.username, user.id);
            Ok(Flash::success(Redirect::to(LOGIN_PATH), "Registration complete, please log in."))
        },
        Err(UserDbError::UserExists) => {
            warn!("registration of existing user \"{username}\" rejected");
            Ok(
                Flash::error(
                    Redirect::to(REGISTER_PATH),
                    format!("User \"{username}\" already exists."),
                )
            )
        },
        Err(UserDbError::EmptyPassword) => Ok(
            Flash::error(Redirect::to(REGISTER_PATH), "The password must not be empty.")
        ),
        Err(e) => Err(e.into()),
    }
}

#[get("/login")]
pub fn login_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "login",
        context! {
            notice: flash.map(Notice::from),
        },
    )
}

#[post("/login", data = "<form>")]
pub async fn login(
    _origin: SameOrigin,
    user_db: &State<Box<dyn UserDb>>,
    cookies: &CookieJar<'_>,
    form: Form<CredentialsForm>,
) -> Result<Flash<Redirect>, RouteError> {
    let Ok(username) = form.username.trim().parse::<UsernameString>() else {
        return Ok(rejected_login());
    };
    let Some(user) = user_db.check_user_credentials(&username, &form.password).await? else {
        warn!("failed login attempt for user \"{username}\"");
        return Ok(rejected_login());
    };
    cookies.add_private(
        Cookie::build((SESSION_COOKIE, user.id.to_string()))
            .same_site(SameSite::Strict)
            .http_only(true)
    );
    info!("user \"{}\" logged in", user.username);
    Ok(Flash::success(Redirect::to(INDEX_PATH), format!("Welcome, {}!", user.username)))
}

fn rejected_login() -> Flash<Redirect> {
    Flash::error(Redirect::to(LOGIN_PATH), "Invalid username or password.")
}

#[get("/logout")]
pub fn logout(
    session: Authenticated,
    cookies: &CookieJar<'_>,
) -> Flash<Redirect> {
    cookies.remove_private(SESSION_COOKIE);
    info!("user \"{}\" logged out", session.0.username);
    Flash::success(Redirect::to(LOGIN_PATH), "You have been logged out.")
}
