use bytes::Bytes;
use filecab_types::fs::{Entry, EntryId};
use reqwest::multipart::{Form, Part};

use crate::{api, auth::http::ApiClient, error::Error};

pub async fn get_file(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_id: &EntryId,
) -> Result<Entry, Error> {
	api::v1::file::get(client, dir_id, file_id).await
}

/// Uploads `contents` into `dir_id` as a multipart form with a single
/// part named `file`. The whole body is held in memory; the server takes
/// the file name from the part's filename.
pub async fn upload_file(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_name: impl Into<String>,
	contents: impl Into<Bytes>,
) -> Result<Entry, Error> {
	let part = Part::stream(contents.into()).file_name(file_name.into());
	let form = Form::new().part(api::v1::file::create::FILE_FIELD, part);
	api::v1::file::create::post(client, dir_id, form).await
}

pub async fn rename_file(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_id: &EntryId,
	name: impl Into<String>,
) -> Result<Entry, Error> {
	api::v1::file::rename::put(
		client,
		dir_id,
		file_id,
		&api::v1::file::rename::Request { name: name.into() },
	)
	.await
}

/// Deletes a file and returns the server's confirmation message verbatim,
/// with the same caveat as [`delete_dir`](crate::fs::dir::delete_dir).
pub async fn delete_file(
	client: impl ApiClient,
	dir_id: &EntryId,
	file_id: &EntryId,
) -> Result<String, Error> {
	api::v1::file::delete::delete(client, dir_id, file_id).await
}

/// Fetches the file contents in full. The download route sits outside the
/// `/api/v1` group and is served without authentication.
pub async fn download_file(client: impl ApiClient, file_id: &EntryId) -> Result<Bytes, Error> {
	api::v1::file::download::get(client, file_id).await
}
