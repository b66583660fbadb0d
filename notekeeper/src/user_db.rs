mod errors;
mod internal;

pub use errors::UserDbError;
pub use internal::{ProductionUserDb, UserDb, UserDbImpl};
