//! The [`ApiClient`] is responsible for communicating with the stats backend.
//!
//! Every operation is a single `GET` below the configured base URL. Response
//! bodies are passed through as [`serde_json::Value`]s; callers that know the
//! shape of a response can use [`ApiClient::fetch()`] directly.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

mod error;
pub use error::{Error, Result};

mod endpoint;
pub use endpoint::Endpoint;

/// Base URL of the backend during development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// A client for the stats backend.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct ApiClient
{
	base_url: Arc<Url>,
	http_client: reqwest::Client,
}

impl fmt::Debug for ApiClient
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("ApiClient")
			.field("base_url", &format_args!("{:?}", self.base_url.as_str()))
			.finish_non_exhaustive()
	}
}

impl ApiClient
{
	/// Creates a new [`ApiClient`] with its own HTTP client.
	pub fn new(base_url: Url) -> Result<Self>
	{
		let http_client = reqwest::Client::builder().build()?;

		Self::with_http_client(base_url, http_client)
	}

	/// Creates a new [`ApiClient`] that shares an existing HTTP client.
	pub fn with_http_client(base_url: Url, http_client: reqwest::Client) -> Result<Self>
	{
		if base_url.cannot_be_a_base() {
			return Err(Error::InvalidBaseUrl { url: base_url });
		}

		Ok(Self { base_url: Arc::new(base_url), http_client })
	}

	/// The URL all endpoints are relative to.
	pub fn base_url(&self) -> &Url
	{
		&self.base_url
	}

	/// Builds the request for `endpoint` without sending it.
	pub fn request(&self, endpoint: &Endpoint) -> Result<reqwest::Request>
	{
		let url = endpoint.url(&self.base_url)?;
		let request = self
			.http_client
			.request(endpoint.method(), url)
			.header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
			.build()?;

		Ok(request)
	}

	/// Sends the request for `endpoint` and decodes the response body as JSON.
	#[tracing::instrument(level = "debug", skip(self), fields(operation = endpoint.operation()), err(Debug, level = "debug"))]
	pub async fn fetch<T>(&self, endpoint: &Endpoint) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = self.request(endpoint)?;

		tracing::debug!(url = %request.url(), "making http request to stats api");

		let response = self.http_client.execute(request).await?;

		let status = response.status();

		if !status.is_success() {
			let body = response.text().await.ok();

			tracing::error! {
				%status,
				?body,
				"stats api returned an error",
			};

			return Err(Error::Status { status, body });
		}

		let body = response.bytes().await?;
		let value = serde_json::from_slice(&body)?;

		Ok(value)
	}

	/// `GET /schedule`, or `GET /schedule/{date}` if `date` is given.
	pub async fn get_schedule(&self, date: Option<&str>) -> Result<Value>
	{
		self.fetch(&Endpoint::schedule(date)).await
	}

	/// `GET /search?q={query}`.
	pub async fn search_data(&self, query: &str) -> Result<Value>
	{
		self.fetch(&Endpoint::search(query)).await
	}

	/// `GET /player/{player_id}/stats`.
	pub async fn get_player_stats(&self, player_id: &str) -> Result<Value>
	{
		self.fetch(&Endpoint::player_stats(player_id)).await
	}

	/// `GET /player/{player_id}/details`.
	pub async fn get_player_details(&self, player_id: &str) -> Result<Value>
	{
		self.fetch(&Endpoint::player_details(player_id)).await
	}

	/// `GET /leaders`.
	pub async fn get_league_leaders(&self) -> Result<Value>
	{
		self.fetch(&Endpoint::LeagueLeaders).await
	}

	/// `GET /team/{team_id}/details`.
	pub async fn get_team_details(&self, team_id: &str) -> Result<Value>
	{
		self.fetch(&Endpoint::team_details(team_id)).await
	}
}
