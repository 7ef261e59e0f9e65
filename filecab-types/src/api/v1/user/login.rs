use serde::{Deserialize, Serialize};

use crate::auth::AuthToken;

pub const ENDPOINT: &str = "/api/v1/user/login";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Request {
	pub username: String,
	pub password: String,
}

/// `data` is the signed JWT as a bare string.
pub type Response = AuthToken;
