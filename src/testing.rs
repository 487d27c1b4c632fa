//! Utilities for writing tests.

use std::net::SocketAddr;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

/// An in-process stand-in for the stats backend.
///
/// Every request is answered with a JSON description of itself:
///
/// ```json
/// { "method": "GET", "path": "/api/leaders", "query": null, "content_type": "application/json" }
/// ```
///
/// Requests whose path contains [`MockBackend::FAILING_ID`] get a 500, and
/// requests whose path contains [`MockBackend::AMBIGUOUS_ID`] get a 300 with
/// a JSON body but no `Location` header.
#[derive(Debug)]
pub(crate) struct MockBackend
{
	addr: SocketAddr,
}

impl MockBackend
{
	/// An ID that makes the backend fail.
	pub(crate) const FAILING_ID: &'static str = "FAIL";

	/// An ID the backend answers with `300 Multiple Choices`.
	pub(crate) const AMBIGUOUS_ID: &'static str = "AMBIGUOUS";

	/// Binds to a random local port and starts serving in the background.
	pub(crate) async fn spawn() -> color_eyre::Result<Self>
	{
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let router = Router::new().fallback(echo);

		tokio::spawn(async move { axum::serve(listener, router).await });

		Ok(Self { addr })
	}

	/// The base URL to configure an [`ApiClient`] with.
	///
	/// [`ApiClient`]: crate::api::ApiClient
	pub(crate) fn api_url(&self) -> Url
	{
		Url::parse(&format!("http://{}/api", self.addr)).expect("valid url")
	}
}

async fn echo(request: Request) -> Response
{
	let uri = request.uri();

	if uri.path().contains(MockBackend::FAILING_ID) {
		return (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable").into_response();
	}

	if uri.path().contains(MockBackend::AMBIGUOUS_ID) {
		return (StatusCode::MULTIPLE_CHOICES, Json(json!({}))).into_response();
	}

	let content_type = request
		.headers()
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok());

	Json(json!({
		"method": request.method().as_str(),
		"path": uri.path(),
		"query": uri.query(),
		"content_type": content_type,
	}))
	.into_response()
}
