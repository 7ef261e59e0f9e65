use crate::fs::EntryId;

/// Download lives outside the `/api/v1` group and streams raw bytes, no
/// envelope. The server leaves it unauthenticated so download managers
/// and media players can fetch it directly.
pub fn endpoint(file_id: &EntryId) -> String {
	format!("/files/{file_id}")
}
