use serde::Deserialize;

use crate::error::ResponseError;

/// The envelope every API body uses, success and failure alike:
/// `{"message": <human readable>, "data": <payload, optional>}`.
///
/// Failures carry only a `message`, so a missing `data` is the error
/// signal for data-bearing endpoints.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
	pub message: Option<String>,
	data: Option<T>,
}

impl<T> ApiResponse<T> {
	pub fn into_data(self) -> Result<T, ResponseError> {
		self.data.ok_or(ResponseError::ApiError {
			message: self.message,
		})
	}

	/// The confirmation message, verbatim. Used for endpoints that never
	/// return `data` (deletes, token checks), where the envelope does not
	/// distinguish success from failure.
	pub fn into_message(self) -> String {
		self.message.unwrap_or_default()
	}
}
