pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod rename;

pub use filecab_types::api::v1::dir::{Response, endpoint};
use filecab_types::fs::EntryId;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn get(client: impl ApiClient, id: Option<&EntryId>) -> Result<Response, Error> {
	api::get_request(client, &endpoint(id)).await
}
