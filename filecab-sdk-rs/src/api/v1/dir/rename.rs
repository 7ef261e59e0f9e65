pub use filecab_types::api::v1::dir::rename::{Request, Response, endpoint};
use filecab_types::fs::EntryId;

use crate::{api, auth::http::ApiClient, error::Error};

pub(crate) async fn put(
	client: impl ApiClient,
	id: &EntryId,
	request: &Request,
) -> Result<Response, Error> {
	api::put_request(client, &endpoint(id), request).await
}
