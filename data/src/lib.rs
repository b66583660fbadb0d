mod note;
mod sort_order;
mod timestamp;
mod user;
mod username_string;

pub use note::{Note, NoteDraft, NoteDraftError, NoteId};
pub use sort_order::SortOrder;
pub use timestamp::{Timestamp, TimestampParseError};
pub use user::{User, UserId};
pub use username_string::{UsernameParseError, UsernameString, MAX_USERNAME_LEN};
