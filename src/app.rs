//! The [`App`] wires the route table, navigator and API client together.

use std::sync::Arc;

use futures::future;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiClient, Endpoint};
use crate::routing::{self, Navigation, NavigationTarget, Navigator, RouteMatch, RouteTable, ScrollPosition};
use crate::{Config, Result};

/// A view that has been navigated to, together with its data.
#[derive(Debug, Clone, Serialize)]
pub struct Page
{
	/// The route that was navigated to.
	pub route: RouteMatch,

	/// Where to scroll after rendering.
	pub scroll: ScrollPosition,

	/// Responses for every endpoint the view depends on, in request order.
	pub data: Vec<Loaded>,
}

/// The response of a single endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Loaded
{
	/// The facade operation, e.g. `get_player_stats`.
	pub operation: &'static str,

	/// The response body.
	pub body: Value,
}

/// The navigation and data-access core of the application.
#[derive(Debug)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct App
{
	navigator: Navigator,
	api: ApiClient,
}

impl App
{
	/// Creates an [`App`] with the application's route table.
	pub fn new(config: &Config) -> Result<Self>
	{
		let routes = routing::route_table()?;
		let api = ApiClient::new(config.api_url.clone())?;

		Ok(Self::from_parts(routes, api))
	}

	/// Creates an [`App`] from an existing route table and client.
	pub fn from_parts(routes: RouteTable, api: ApiClient) -> Self
	{
		Self { navigator: Navigator::new(Arc::new(routes)), api }
	}

	/// The route table.
	pub fn routes(&self) -> &RouteTable
	{
		self.navigator.routes()
	}

	/// The navigator holding history and saved scroll positions.
	pub fn navigator(&self) -> &Navigator
	{
		&self.navigator
	}

	/// The API client.
	pub fn api(&self) -> &ApiClient
	{
		&self.api
	}

	/// Navigates to `target` and loads the data of the view it resolves to.
	///
	/// `scroll` is the scroll position of the page being left. Requests are
	/// made concurrently; if any of them fails, that error is returned, but
	/// the navigation itself stays in history.
	#[tracing::instrument(skip(self, target), err(Debug, level = "debug"))]
	pub async fn visit<T>(&mut self, target: T, scroll: ScrollPosition) -> Result<Page>
	where
		T: Into<NavigationTarget>,
	{
		let navigation = self.navigator.push(target.into(), scroll)?;

		self.load(navigation).await
	}

	/// Goes back one entry in history and reloads that view's data.
	#[tracing::instrument(skip(self), err(Debug, level = "debug"))]
	pub async fn back(&mut self, scroll: ScrollPosition) -> Result<Page>
	{
		let navigation = self.navigator.back(scroll)?;

		self.load(navigation).await
	}

	async fn load(&self, Navigation { route, scroll }: Navigation) -> Result<Page>
	{
		let endpoints = route.view.endpoints(&route)?;

		tracing::info!(view = %route.view, path = route.full_path.as_str(), requests = endpoints.len(), "loading view");

		let data = future::try_join_all(endpoints.iter().map(|endpoint| self.fetch(endpoint))).await?;

		Ok(Page { route, scroll, data })
	}

	async fn fetch(&self, endpoint: &Endpoint) -> Result<Loaded>
	{
		let body = self.api.fetch::<Value>(endpoint).await?;

		Ok(Loaded { operation: endpoint.operation(), body })
	}
}
