pub const DEFAULT_MAX_TITLE_SIZE: usize = 256;
pub const DEFAULT_MAX_CONTENT_SIZE: usize = 128 * 1024;

// the defaults are taken from the argon2 crate itself
pub const DEFAULT_ARGON2_M_COST: u32 = 19 * 1024;
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
pub const DEFAULT_ARGON2_P_COST: u32 = 1;
pub const DEFAULT_ARGON2_OUTPUT_LEN: Option<usize> = Some(32);

pub const TMP_FILENAME_INFIX: &str = ".tmp.";
