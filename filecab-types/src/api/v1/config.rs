use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/v1/config";

/// Which access modes the server is running with: `login` when credentials
/// are configured, `anonymous` when guests get read-only access.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
	pub login: bool,
	pub anonymous: bool,
}
