use serde::{Deserialize, Serialize};

use crate::fs::{Entry, EntryId};

pub fn endpoint(id: &EntryId) -> String {
	format!("/api/v1/directories/{id}")
}

/// The body is exactly `{"name": ...}`; the server keeps the parent.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Request {
	pub name: String,
}

pub type Response = Entry;
