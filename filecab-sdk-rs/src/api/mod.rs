use filecab_types::api::response::ApiResponse;
use reqwest::{Method, RequestBuilder, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
	auth::http::ApiClient,
	error::{Error, ErrorExt, ResultExt},
};

pub(crate) mod v1;

// The HTTP status line is deliberately never inspected: the server embeds
// failures in the same `{message, data}` envelope it uses for success, so
// the body is parsed either way and a missing `data` is the error signal.
async fn handle_request<U>(
	request_builder: RequestBuilder,
	endpoint: &str,
) -> Result<ApiResponse<U>, Error>
where
	U: DeserializeOwned,
{
	let resp = match request_builder.send().await {
		Ok(resp) => resp,
		Err(e) => {
			log::error!("Request to {endpoint} failed: {e}");
			return Err(e.with_context(endpoint));
		}
	};

	match resp.json::<ApiResponse<U>>().await {
		Ok(body) => Ok(body),
		Err(e) => {
			log::error!("Failed to parse response from {endpoint}: {e}");
			Err(e.with_context(endpoint))
		}
	}
}

pub(crate) async fn get_request<U>(client: impl ApiClient, endpoint: &str) -> Result<U, Error>
where
	U: DeserializeOwned,
{
	log::debug!("GET {endpoint}");
	handle_request(client.request(Method::GET, endpoint), endpoint)
		.await?
		.into_data()
		.context(endpoint)
}

/// For endpoints whose envelope never carries `data`. Returns the
/// confirmation message without judging it.
pub(crate) async fn get_request_message(
	client: impl ApiClient,
	endpoint: &str,
) -> Result<String, Error> {
	log::debug!("GET {endpoint}");
	Ok(
		handle_request::<serde_json::Value>(client.request(Method::GET, endpoint), endpoint)
			.await?
			.into_message(),
	)
}

pub(crate) async fn post_request<T, U>(
	client: impl ApiClient,
	endpoint: &str,
	request: &T,
) -> Result<U, Error>
where
	T: Serialize + ?Sized,
	U: DeserializeOwned,
{
	log::debug!("POST {endpoint}");
	handle_request(
		client.request(Method::POST, endpoint).json(request),
		endpoint,
	)
	.await?
	.into_data()
	.context(endpoint)
}

pub(crate) async fn post_multipart<U>(
	client: impl ApiClient,
	endpoint: &str,
	form: Form,
) -> Result<U, Error>
where
	U: DeserializeOwned,
{
	log::debug!("POST {endpoint} (multipart)");
	handle_request(
		client.request(Method::POST, endpoint).multipart(form),
		endpoint,
	)
	.await?
	.into_data()
	.context(endpoint)
}

pub(crate) async fn put_request<T, U>(
	client: impl ApiClient,
	endpoint: &str,
	request: &T,
) -> Result<U, Error>
where
	T: Serialize + ?Sized,
	U: DeserializeOwned,
{
	log::debug!("PUT {endpoint}");
	handle_request(client.request(Method::PUT, endpoint).json(request), endpoint)
		.await?
		.into_data()
		.context(endpoint)
}

/// DELETE bodies are confirmations like `{"message":"directory deleted"}`
/// with no `data`, success or not, so the message comes back verbatim.
pub(crate) async fn delete_request(client: impl ApiClient, endpoint: &str) -> Result<String, Error> {
	log::debug!("DELETE {endpoint}");
	Ok(
		handle_request::<serde_json::Value>(client.request(Method::DELETE, endpoint), endpoint)
			.await?
			.into_message(),
	)
}
