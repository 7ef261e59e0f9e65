pub mod create;
pub mod delete;
pub mod download;
pub mod rename;

use crate::fs::{Entry, EntryId};

pub fn endpoint(dir_id: &EntryId, file_id: &EntryId) -> String {
	format!("/api/v1/directories/{dir_id}/files/{file_id}")
}

/// Metadata of a single file.
pub type Response = Entry;
