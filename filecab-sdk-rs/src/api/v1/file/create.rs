pub use filecab_types::api::v1::file::create::{FILE_FIELD, Response, endpoint};
use filecab_types::fs::EntryId;
use reqwest::multipart::Form;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn post(
	client: impl ApiClient,
	dir_id: &EntryId,
	form: Form,
) -> Result<Response, Error> {
	api::post_multipart(client, &endpoint(dir_id), form).await
}
