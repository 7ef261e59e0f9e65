use crate::fs::EntryId;

pub fn endpoint(id: &EntryId) -> String {
	format!("/api/v1/directories/{id}")
}
