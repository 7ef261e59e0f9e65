use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Bearer token issued by the login endpoint. The token is treated as an
/// opaque string and sent back verbatim in the `Authorization` header.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl Display for AuthToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for AuthToken {
	fn from(token: String) -> Self {
		Self(token)
	}
}

impl From<&str> for AuthToken {
	fn from(token: &str) -> Self {
		Self(token.to_string())
	}
}
