use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque server-assigned identifier for a directory or file.
///
/// Ids are never parsed or validated client-side; route constraints on the
/// server own the format.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl Display for EntryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for EntryId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl From<&str> for EntryId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// A node in the remote hierarchy. The server uses the same shape for
/// directories and files, discriminated by `dir`.
///
/// `size` is only reported for files and `parent` is absent on the root,
/// both are omitted from the wire format when empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	pub id: EntryId,
	pub name: String,
	pub dir: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent: Option<EntryId>,
	pub mtime: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entry_without_size_or_parent() {
		let entry: Entry = serde_json::from_str(
			r#"{"id":"0c2d1b3e","name":"root","dir":true,"mtime":"2024-05-01T10:30:00Z"}"#,
		)
		.unwrap();
		assert_eq!(entry.id, EntryId::from("0c2d1b3e"));
		assert!(entry.dir);
		assert_eq!(entry.size, None);
		assert_eq!(entry.parent, None);

		let json = serde_json::to_value(&entry).unwrap();
		assert!(json.get("size").is_none());
		assert!(json.get("parent").is_none());
	}

	#[test]
	fn file_entry_round_trips_mtime() {
		let entry: Entry = serde_json::from_str(
			r#"{"id":"a1","name":"notes.txt","dir":false,"size":512,"parent":"0c2d1b3e","mtime":"2024-05-01T10:30:00.123Z"}"#,
		)
		.unwrap();
		assert_eq!(entry.size, Some(512));
		assert_eq!(entry.mtime.timestamp_millis(), 1_714_559_400_123);
	}
}
