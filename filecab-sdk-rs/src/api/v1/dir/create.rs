pub use filecab_types::api::v1::dir::create::{ENDPOINT, Request, Response};

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn post(client: impl ApiClient, request: &Request) -> Result<Response, Error> {
	api::post_request(client, ENDPOINT, request).await
}
