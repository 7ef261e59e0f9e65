pub use filecab_types::api::v1::dir::delete::endpoint;
use filecab_types::fs::EntryId;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn delete(client: impl ApiClient, id: &EntryId) -> Result<String, Error> {
	api::delete_request(client, &endpoint(id)).await
}
