use crate::fs::EntryId;

pub fn endpoint(dir_id: &EntryId, file_id: &EntryId) -> String {
	format!("/api/v1/directories/{dir_id}/files/{file_id}")
}
