use serde::{Deserialize, Serialize};

use crate::fs::{Entry, EntryId};

pub const ENDPOINT: &str = "/api/v1/directories/";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Request {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<EntryId>,
}

pub type Response = Entry;
