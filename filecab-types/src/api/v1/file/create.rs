use crate::fs::{Entry, EntryId};

/// Upload is a multipart form with a single part carrying the file
/// contents, not a JSON body.
pub const FILE_FIELD: &str = "file";

pub fn endpoint(dir_id: &EntryId) -> String {
	format!("/api/v1/directories/{dir_id}/files")
}

pub type Response = Entry;
