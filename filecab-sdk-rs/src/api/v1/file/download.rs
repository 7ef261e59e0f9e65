use bytes::Bytes;
pub use filecab_types::api::v1::file::download::endpoint;
use filecab_types::fs::EntryId;
use reqwest::Method;

use crate::{
	auth::http::ApiClient,
	error::{Error, ResultExt},
};

// Raw byte stream, no envelope, so this bypasses the shared dispatchers.
pub(crate) async fn get(client: impl ApiClient, file_id: &EntryId) -> Result<Bytes, Error> {
	let endpoint = endpoint(file_id);
	log::debug!("GET {endpoint}");
	client
		.request(Method::GET, &endpoint)
		.send()
		.await
		.context(&endpoint)?
		.bytes()
		.await
		.context(&endpoint)
}
