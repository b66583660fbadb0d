use log::{error, info, warn};
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::{catch, Request, Responder};
use crate::app_constants::{INDEX_PATH, LOGIN_PATH, SESSION_COOKIE};

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>Internal error</title></head>\
<body><h1>Internal error</h1><p>Something went wrong. Please try again later.</p></body></html>";

#[derive(Responder)]
pub enum CaughtResponse {
    Notice(Flash<Redirect>),
    #[response(status = 500)]
    Page(RawHtml<&'static str>),
}

fn back_to_index(message: &str) -> CaughtResponse {
    CaughtResponse::Notice(Flash::error(Redirect::to(INDEX_PATH), message))
}

#[catch(401)]
pub fn unauthorized(request: &Request<'_>) -> Flash<Redirect> {
    info!("unauthenticated {} {}", request.method(), request.uri());
    let cookies = request.cookies();
    if cookies.get_private(SESSION_COOKIE).is_some() {
        cookies.remove_private(SESSION_COOKIE);
    }
    Flash::error(Redirect::to(LOGIN_PATH), "Please log in to access this page.")
}

#[catch(403)]
pub fn forbidden(request: &Request<'_>) -> CaughtResponse {
    warn!("forbidden {} {}", request.method(), request.uri());
    back_to_index("You do not have permission to do that.")
}

#[catch(404)]
pub fn not_found(request: &Request<'_>) -> CaughtResponse {
    warn!("not found: {} {}", request.method(), request.uri());
    back_to_index("The page or note was not found.")
}

#[catch(405)]
pub fn method_not_allowed(request: &Request<'_>) -> CaughtResponse {
    warn!("method not allowed: {} {}", request.method(), request.uri());
    back_to_index("That action is not allowed this way.")
}

#[catch(422)]
pub fn unprocessable(request: &Request<'_>) -> CaughtResponse {
    warn!("incomplete form in {} {}", request.method(), request.uri());
    back_to_index("The form was incomplete.")
}

#[catch(500)]
pub fn internal_error(request: &Request<'_>) -> CaughtResponse {
    error!("internal error in {} {}", request.method(), request.uri());
    if request.uri().path().as_str() == INDEX_PATH {
        CaughtResponse::Page(RawHtml(INTERNAL_ERROR_PAGE))
    } else {
        back_to_index("Internal error, please try again later.")
    }
}
