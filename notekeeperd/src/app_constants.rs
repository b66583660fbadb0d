pub const SESSION_COOKIE: &str = "user_id";
pub const INDEX_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const FORM_LIMIT_KIB: u64 = 256;
