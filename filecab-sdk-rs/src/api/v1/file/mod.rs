pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod download;
pub(crate) mod rename;

pub use filecab_types::api::v1::file::{Response, endpoint};
use filecab_types::fs::EntryId;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn get(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_id: &EntryId,
) -> Result<Response, Error> {
	api::get_request(client, &endpoint(dir_id, file_id)).await
}
