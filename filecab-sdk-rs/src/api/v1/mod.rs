pub(crate) mod check_token;
pub(crate) mod config;
pub(crate) mod dir;
pub(crate) mod file;
pub(crate) mod user;
