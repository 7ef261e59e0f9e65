pub mod create;
pub mod delete;
pub mod rename;

use crate::fs::{Entry, EntryId};

/// `None` targets the root directory via an empty trailing id segment.
pub fn endpoint(id: Option<&EntryId>) -> String {
	match id {
		Some(id) => format!("/api/v1/directories/{id}"),
		None => "/api/v1/directories/".to_string(),
	}
}

/// Listing of the directory's children, directories first.
pub type Response = Vec<Entry>;
