pub use filecab_types::api::v1::file::delete::endpoint;
use filecab_types::fs::EntryId;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn delete(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_id: &EntryId,
) -> Result<String, Error> {
	api::delete_request(client, &endpoint(dir_id, file_id)).await
}
