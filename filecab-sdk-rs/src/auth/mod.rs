pub mod http;

use filecab_types::api::v1::{config, user::login};

use crate::{
	api,
	auth::http::{ApiClient, AuthClient, UnauthClient},
	error::Error,
};

impl UnauthClient {
	/// Exchanges credentials for a bearer token and upgrades to an
	/// [`AuthClient`]. The token is opaque to the client; expiry is the
	/// server's business and surfaces as an api error on a later call.
	pub async fn login(
		self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<AuthClient, Error> {
		let token = api::v1::user::login::post(
			&self,
			&login::Request {
				username: username.into(),
				password: password.into(),
			},
		)
		.await?;
		Ok(AuthClient::from_client(self, token))
	}
}

/// Which access modes the server allows. Exposed unauthenticated so a
/// client can decide whether a login is required at all.
pub async fn auth_config(client: impl ApiClient) -> Result<config::Response, Error> {
	api::v1::config::get(client).await
}

/// Verifies the current token. Returns the server's confirmation message;
/// an invalid token surfaces as the server's error message instead.
pub async fn check_token(client: impl ApiClient) -> Result<String, Error> {
	api::v1::check_token::get(client).await
}
