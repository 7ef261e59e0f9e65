use filecab_types::error::ResponseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// The request never produced a parseable body: connectivity, DNS, or
	/// a response that failed to decode into the expected shape.
	#[error("request to `{endpoint}` failed: {source}")]
	Request {
		endpoint: String,
		source: reqwest::Error,
	},
	/// The body parsed but carried no `data`, i.e. the server embedded a
	/// failure in its envelope.
	#[error("api error at `{endpoint}`: {source}")]
	Api {
		endpoint: String,
		source: ResponseError,
	},
}

pub(crate) trait ErrorExt {
	fn with_context(self, endpoint: &str) -> Error;
}

impl ErrorExt for reqwest::Error {
	fn with_context(self, endpoint: &str) -> Error {
		Error::Request {
			endpoint: endpoint.to_string(),
			source: self,
		}
	}
}

impl ErrorExt for ResponseError {
	fn with_context(self, endpoint: &str) -> Error {
		Error::Api {
			endpoint: endpoint.to_string(),
			source: self,
		}
	}
}

pub(crate) trait ResultExt<T> {
	fn context(self, endpoint: &str) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
	E: ErrorExt,
{
	fn context(self, endpoint: &str) -> Result<T, Error> {
		self.map_err(|e| e.with_context(endpoint))
	}
}
