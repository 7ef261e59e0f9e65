pub use filecab_types::api::v1::check_token::ENDPOINT;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn get(client: impl ApiClient) -> Result<String, Error> {
	api::get_request_message(client, ENDPOINT).await
}
