use log::{info, warn};
use rocket::form::Form;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, State};
use rocket_dyn_templates::{context, Template};
use data::{Note, NoteId, SortOrder};
use notekeeper::config::app_config::AppConfig;
use notekeeper::storage::NoteStorage;
use crate::access::{Actor, SameOrigin};
use crate::app_constants::INDEX_PATH;
use crate::routes::errors::RouteError;
use crate::routes::model::{sort_order, NoteForm, Notice, SortParam};

fn render_list(
    actor: &Actor,
    notes: Vec<Note>,
    order: SortOrder,
    query: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Template {
    Template::render(
        "index",
        context! {
            count: notes.len(),
            notes,
            sort: order.as_str(),
            search: query.is_some(),
            query,
            notice: flash.map(Notice::from),
            user: actor.user(),
        },
    )
}

#[get("/?<sort>")]
pub async fn index(
    actor: Actor,
    storage: &State<Box<dyn NoteStorage>>,
    sort: Option<SortParam>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, RouteError> {
    let order = sort_order(sort);
    let notes = storage.list_notes(actor.owner(), order).await?;
    Ok(render_list(&actor, notes, order, None, flash))
}

#[get("/search?<query>&<sort>")]
pub async fn search(
    actor: Actor,
    storage: &State<Box<dyn NoteStorage>>,
    query: Option<String>,
    sort: Option<SortParam>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, RouteError> {
    let order = sort_order(sort);
    let query = query.unwrap_or_default();
    let notes = storage.search_notes(actor.owner(), &query, order).await?;
    Ok(render_list(&actor, notes, order, Some(query), flash))
}

#[post("/add", data = "<form>")]
pub async fn add(
    actor: Actor,
    _origin: SameOrigin,
    storage: &State<Box<dyn NoteStorage>>,
    config: &State<AppConfig>,
    form: Form<NoteForm>,
) -> Result<Flash<Redirect>, RouteError> {
    let draft = match form.to_draft(config) {
        Ok(draft) => draft,
        Err(e) => return Ok(Flash::error(Redirect::to(INDEX_PATH), e.to_string())),
    };
    let note = storage.add_note(actor.owner(), draft).await?;
    info!("note {} created{}", note.id, on_behalf(&actor));
    Ok(Flash::success(Redirect::to(INDEX_PATH), "Note added."))
}

#[get("/add")]
pub fn add_get() -> Status {
    Status::MethodNotAllowed
}

#[get("/edit/<id>")]
pub async fn edit_page(
    actor: Actor,
    storage: &State<Box<dyn NoteStorage>>,
    id: i64,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, RouteError> {
    let note = storage.get_note(actor.owner(), NoteId(id)).await
        .inspect_err(|e| warn!("cannot open note {id} for editing: {e}"))?;
    Ok(
        Template::render(
            "edit",
            context! {
                note,
                notice: flash.map(Notice::from),
                user: actor.user(),
            },
        )
    )
}

#[post("/edit/<id>", data = "<form>")]
pub async fn edit(
    actor: Actor,
    _origin: SameOrigin,
    storage: &State<Box<dyn NoteStorage>>,
    config: &State<AppConfig>,
    id: i64,
    form: Form<NoteForm>,
) -> Result<Flash<Redirect>, RouteError> {
    let draft = match form.to_draft(config) {
        Ok(draft) => draft,
        Err(e) => return Ok(
            Flash::error(Redirect::to(format!("/edit/{id}")), e.to_string())
        ),
    };
    storage.edit_note(actor.owner(), NoteId(id), draft).await
        .inspect_err(|e| warn!("cannot edit note {id}: {e}"))?;
    info!("note {id} edited{}", on_behalf(&actor));
    Ok(Flash::success(Redirect::to(INDEX_PATH), "Note saved."))
}

#[post("/delete/<id>")]
pub async fn delete(
    actor: Actor,
    _origin: SameOrigin,
    storage: &State<Box<dyn NoteStorage>>,
    id: i64,
) -> Result<Flash<Redirect>, RouteError> {
    storage.delete_note(actor.owner(), NoteId(id)).await
        .inspect_err(|e| warn!("cannot delete note {id}: {e}"))?;
    info!("note {id} deleted{}", on_behalf(&actor));
    Ok(Flash::success(Redirect::to(INDEX_PATH), "Note deleted."))
}

#[get("/delete/<_>")]
pub fn delete_get() -> Status {
    Status::MethodNotAllowed
}

/// Ids that are not integers name no note.
#[get("/edit/<_>", rank = 2)]
pub fn edit_page_bad_id(_actor: Actor) -> Status {
    Status::NotFound
}

#[post("/edit/<_>", rank = 2)]
pub fn edit_bad_id(_actor: Actor) -> Status {
    Status::NotFound
}

#[post("/delete/<_>", rank = 2)]
pub fn delete_bad_id(_actor: Actor) -> Status {
    Status::NotFound
}

fn on_behalf(actor: &Actor) -> String {
    match actor.user() {
        Some(user) => format!(" by user \"{}\"", user.username),
        None => String::new(),
    }
}
