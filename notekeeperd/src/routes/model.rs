use rocket::request::FlashMessage;
use rocket::{FromForm, FromFormField};
use serde::Serialize;
use data::{NoteDraft, NoteDraftError, SortOrder};
use notekeeper::config::app_config::AppConfig;

#[derive(Debug, FromForm)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn to_draft(&self, config: &AppConfig) -> Result<NoteDraft, NoteDraftError> {
        NoteDraft::new(
            &self.title,
            &self.content,
            config.max_title_size,
            config.max_content_size,
        )
    }
}

#[derive(Debug, FromForm)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// `?sort=` value; anything unparseable ends up as `None` and the default
/// order.
#[derive(Clone, Copy, Debug, Eq, FromFormField, PartialEq)]
pub enum SortParam {
    Asc,
    Desc,
}

impl From<SortParam> for SortOrder {
    fn from(value: SortParam) -> Self {
        match value {
            SortParam::Asc => SortOrder::Asc,
            SortParam::Desc => SortOrder::Desc,
        }
    }
}

pub fn sort_order(sort: Option<SortParam>) -> SortOrder {
    sort.map(SortOrder::from).unwrap_or_default()
}

/// A flash message as the templates see it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Notice {
    pub kind: String,
    pub message: String,
}

impl From<FlashMessage<'_>> for Notice {
    fn from(flash: FlashMessage<'_>) -> Self {
        Notice {
            kind: flash.kind().to_owned(),
            message: flash.message().to_owned(),
        }
    }
}
