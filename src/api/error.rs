//! The errors that can occur when talking to the stats backend.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when talking to the stats backend.
///
/// None of these are retried; they are handed to the caller as they are.
#[derive(Debug, Error)]
pub enum Error
{
	/// The configured base URL cannot have path segments appended to it.
	#[error("`{url}` cannot be used as a base URL")]
	InvalidBaseUrl
	{
		/// The offending URL.
		url: Url,
	},

	/// We failed to make an HTTP request, or to read its response.
	#[error("failed to make http request")]
	Http(#[from] reqwest::Error),

	/// The backend responded with a non-2xx status.
	#[error("stats api responded with {status}")]
	Status
	{
		/// The response status.
		status: StatusCode,

		/// The response body, if it could be read.
		body: Option<String>,
	},

	/// The response body was not what we expected.
	#[error("failed to decode response body")]
	Decode(#[from] serde_json::Error),
}
