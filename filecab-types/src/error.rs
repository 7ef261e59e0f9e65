use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
	#[error("API Error, message: `{message:?}`")]
	ApiError { message: Option<String> },
}
