use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::{Timestamp, UserId};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created: Timestamp,
    pub updated: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
}

impl Note {
    pub fn new(
        id: NoteId,
        draft: NoteDraft,
        now: Timestamp,
        owner: Option<UserId>,
    ) -> Self {
        Note {
            id,
            title: draft.title,
            content: draft.content,
            created: now,
            updated: now,
            owner,
        }
    }

    /// Overwrites title and content. `updated` never goes below its previous
    /// value, so `updated >= created` survives clock steps. Timestamps have
    /// second resolution: an edit in the same second keeps `updated` as is.
    pub fn apply(&mut self, draft: NoteDraft, now: Timestamp) {
        self.title = draft.title;
        self.content = draft.content;
        self.updated = now.max(self.updated);
    }

    pub fn matches(&self, lowercase_query: &str) -> bool {
        self.title.to_lowercase().contains(lowercase_query)
            || self.content.to_lowercase().contains(lowercase_query)
    }
}

/// Title and content that passed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum NoteDraftError {
    #[error("the title must not be empty")]
    EmptyTitle,

    #[error("the title is longer than {0} bytes")]
    TitleTooLong(usize),

    #[error("the content is longer than {0} bytes")]
    ContentTooLong(usize),
}

impl NoteDraft {
    pub fn new(
        title: &str,
        content: &str,
        max_title_size: usize,
        max_content_size: usize,
    ) -> Result<Self, NoteDraftError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NoteDraftError::EmptyTitle);
        }
        if title.len() > max_title_size {
            return Err(NoteDraftError::TitleTooLong(max_title_size));
        }
        if content.len() > max_content_size {
            return Err(NoteDraftError::ContentTooLong(max_content_size));
        }
        Ok(NoteDraft {
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
