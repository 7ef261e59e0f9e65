pub(crate) mod api;
pub mod auth;
pub mod error;
pub mod fs;
pub mod prelude;

pub use auth::http::{ApiClient, AuthClient, UnauthClient};
pub use error::Error;
