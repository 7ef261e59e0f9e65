use filecab_types::auth::AuthToken;
use reqwest::{Method, RequestBuilder};

/// Client for servers running without credentials, and the starting point
/// for [`login`](crate::auth) when they are not.
pub struct UnauthClient {
	pub(crate) client: reqwest::Client,
	pub(crate) base_url: String,
}

impl UnauthClient {
	/// The base URL is stored verbatim and prefixed onto every request
	/// path. No normalization is applied, so a trailing slash here
	/// produces doubled slashes in request paths.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::default(),
			base_url: base_url.into(),
		}
	}
}

#[derive(Debug)]
pub struct AuthClient {
	client: reqwest::Client,
	base_url: String,
	token: AuthToken,
}

impl AuthClient {
	pub fn new(base_url: impl Into<String>, token: AuthToken) -> Self {
		Self {
			client: reqwest::Client::default(),
			base_url: base_url.into(),
			token,
		}
	}

	/// Upgrades an [`UnauthClient`], keeping its connection pool.
	pub fn from_client(client: UnauthClient, token: AuthToken) -> Self {
		Self {
			client: client.client,
			base_url: client.base_url,
			token,
		}
	}

	pub fn token(&self) -> &AuthToken {
		&self.token
	}
}

/// Seam between the endpoint dispatchers and the two client flavors. The
/// only state behind it is the immutable base URL (plus the bearer token
/// for [`AuthClient`]), so any number of concurrent calls may share one
/// client.
pub trait ApiClient {
	fn http_client(&self) -> &reqwest::Client;

	fn base_url(&self) -> &str;

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		self.http_client()
			.request(method, format!("{}{}", self.base_url(), path))
	}
}

impl ApiClient for &UnauthClient {
	fn http_client(&self) -> &reqwest::Client {
		&self.client
	}

	fn base_url(&self) -> &str {
		&self.base_url
	}
}

impl ApiClient for &AuthClient {
	fn http_client(&self) -> &reqwest::Client {
		&self.client
	}

	fn base_url(&self) -> &str {
		&self.base_url
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		self.http_client()
			.request(method, format!("{}{}", self.base_url(), path))
			.bearer_auth(&self.token.0)
	}
}
