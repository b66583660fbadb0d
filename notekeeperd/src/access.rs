use async_trait::async_trait;
use log::{debug, error, info, warn};
use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use data::{User, UserId};
use notekeeper::user_db::UserDb;
use crate::app_constants::SESSION_COOKIE;

/// Whether note routes need a logged-in user. Managed once at ignition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessMode {
    SingleUser,
    MultiUser,
}

/// A user with a valid session cookie.
#[derive(Clone, Debug)]
pub struct Authenticated(pub User);

/// The user a note operation runs on behalf of; nobody in single-user mode.
#[derive(Clone, Debug)]
pub struct Actor(Option<User>);

impl Actor {
    pub fn owner(&self) -> Option<UserId> {
        self.0.as_ref().map(|user| user.id)
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cached = request.local_cache_async(async {
            authenticate(request).await
        }).await;
        match cached {
            Ok(user) => Outcome::Success(Authenticated(user.clone())),
            Err(status) => Outcome::Error((*status, ())),
        }
    }
}

async fn authenticate(request: &Request<'_>) -> Result<User, Status> {
    let Some(user_db) = request.rocket().state::<Box<dyn UserDb>>() else {
        error!("session check without a user database");
        return Err(Status::InternalServerError);
    };
    let Some(cookie) = request.cookies().get_private(SESSION_COOKIE) else {
        debug!("no session cookie on {}", request.uri());
        return Err(Status::Unauthorized);
    };
    let Ok(id) = cookie.value().parse::<i64>() else {
        info!("malformed session cookie");
        return Err(Status::Unauthorized);
    };
    match user_db.get_user(UserId(id)).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            info!("session refers to unknown user {id}");
            Err(Status::Unauthorized)
        },
        Err(e) => {
            error!("failed to look up session user {id}: {e}");
            Err(Status::InternalServerError)
        },
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for Actor {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<AccessMode>() {
            Some(AccessMode::SingleUser) => Outcome::Success(Actor(None)),
            Some(AccessMode::MultiUser) => {
                let Authenticated(user) = try_outcome!(
                    request.guard::<Authenticated>().await
                );
                Outcome::Success(Actor(Some(user)))
            },
            None => {
                error!("access mode is not configured");
                Outcome::Error((Status::InternalServerError, ()))
            },
        }
    }
}

/// A request whose `Origin`, or failing that `Referer`, names this host.
///
/// Requests carrying neither header pass: browsers send `Origin` on every
/// cross-site form post.
#[derive(Clone, Copy, Debug)]
pub struct SameOrigin;

#[async_trait]
impl<'r> FromRequest<'r> for SameOrigin {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let headers = request.headers();
        let Some(source) = headers.get_one("Origin").or_else(|| headers.get_one("Referer")) else {
            return Outcome::Success(SameOrigin);
        };
        let host = headers.get_one("Host");
        match (origin_host(source), host) {
            (Some(source_host), Some(host)) if source_host.eq_ignore_ascii_case(host) => {
                Outcome::Success(SameOrigin)
            },
            _ => {
                warn!(
                    "cross-origin {} {} from \"{source}\" rejected",
                    request.method(),
                    request.uri(),
                );
                Outcome::Error((Status::Forbidden, ()))
            },
        }
    }
}

/// `host[:port]` of an absolute URL; `None` for opaque origins like `null`.
fn origin_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let host = rest.split(['/', '?', '#']).next()?;
    (!host.is_empty()).then_some(host)
}
