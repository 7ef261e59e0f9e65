pub mod check_token;
pub mod config;
pub mod dir;
pub mod file;
pub mod user;
