pub use filecab_types::api::v1::config::{ENDPOINT, Response};

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn get(client: impl ApiClient) -> Result<Response, Error> {
	api::get_request(client, ENDPOINT).await
}
