use filecab_types::fs::{Entry, EntryId};

use crate::{api, auth::http::ApiClient, error::Error};

/// Lists the children of a directory. `None` targets the root.
///
/// Every call re-fetches from the server; nothing is cached client-side.
pub async fn list_dir(client: impl ApiClient, id: Option<&EntryId>) -> Result<Vec<Entry>, Error> {
	api::v1::dir::get(client, id).await
}

/// Creates a directory under `parent`, or under the root when `None`.
pub async fn create_dir(
	client: impl ApiClient,
	name: impl Into<String>,
	parent: Option<&EntryId>,
) -> Result<Entry, Error> {
	api::v1::dir::create::post(
		client,
		&api::v1::dir::create::Request {
			name: name.into(),
			parent: parent.cloned(),
		},
	)
	.await
}

pub async fn rename_dir(
	client: impl ApiClient,
	id: &EntryId,
	name: impl Into<String>,
) -> Result<Entry, Error> {
	api::v1::dir::rename::put(
		client,
		id,
		&api::v1::dir::rename::Request { name: name.into() },
	)
	.await
}

/// Deletes a directory and returns the server's confirmation message
/// verbatim. Since the status line is never inspected and error bodies
/// share the confirmation shape, a failure message comes back as `Ok` too.
pub async fn delete_dir(client: impl ApiClient, id: &EntryId) -> Result<String, Error> {
	api::v1::dir::delete::delete(client, id).await
}
