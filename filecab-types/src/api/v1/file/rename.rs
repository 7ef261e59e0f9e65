use serde::{Deserialize, Serialize};

use crate::fs::{Entry, EntryId};

pub fn endpoint(dir_id: &EntryId, file_id: &EntryId) -> String {
	format!("/api/v1/directories/{dir_id}/files/{file_id}")
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Request {
	pub name: String,
}

pub type Response = Entry;
