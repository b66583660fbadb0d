use std::sync::LazyLock;
use base64ct::{Base64, Encoding};

pub const MOCK_PEPPER_STR: &str = include_str!("mock_pepper.b64").trim_ascii();
pub static MOCK_PEPPER: LazyLock<Box<[u8]>> = LazyLock::new(||
    Base64::decode_vec(MOCK_PEPPER_STR)
        .expect("failed to decode mock pepper")
        .into()
);

/// The cheapest parameters argon2 accepts, so the tests don't spend their
/// time hashing.
pub fn fast_argon2_params() -> argon2::Params {
    argon2::Params::new(8, 1, 1, Some(32))
        .expect("invalid fast argon2 params")
}
