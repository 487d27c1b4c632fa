//! Client-side routing.
//!
//! A [`RouteTable`] maps URL paths to [`View`]s. Of all routes whose
//! [`PathPattern`] matches a path, the most specific one wins: static segments
//! take precedence over parameters, compared from left to right. Among equally
//! specific routes the one registered first wins. Paths that match no route
//! resolve to [`Error::RouteNotFound`]; there is no implicit fallback route.
//!
//! The [`Navigator`] sits on top of a table and keeps track of history and
//! saved scroll positions.
//!
//! [`View`]: crate::views::View

use serde::Serialize;

use crate::views::View;

mod error;
pub use error::{Error, Result};

mod params;
pub use params::Params;

mod pattern;
pub use pattern::{PathPattern, Segment};

mod navigator;
pub use navigator::{Navigation, NavigationTarget, Navigator, ScrollPosition};

pub mod names;

/// A single entry in a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route
{
	name: String,
	pattern: PathPattern,
	view: View,
}

impl Route
{
	/// The route's unique name.
	pub fn name(&self) -> &str
	{
		&self.name
	}

	/// The route's parsed path pattern.
	pub fn pattern(&self) -> &PathPattern
	{
		&self.pattern
	}

	/// The view rendered for this route.
	pub fn view(&self) -> View
	{
		self.view
	}
}

/// The result of resolving a location against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch
{
	/// Name of the matched route.
	pub name: String,

	/// The view to render.
	pub view: View,

	/// The path that was matched, without query string or fragment.
	pub path: String,

	/// The path together with its query string, if any.
	///
	/// Saved scroll positions are keyed by this.
	pub full_path: String,

	/// Parameters bound by the route's pattern.
	pub params: Params,

	/// The decoded query string.
	pub query: Params,
}

/// An ordered set of routes.
#[derive(Debug, Default, Clone)]
pub struct RouteTable
{
	routes: Vec<Route>,
}

impl RouteTable
{
	/// Creates an empty table.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Registers a new route after all existing ones.
	///
	/// Fails if `pattern` is invalid or `name` is already taken. A route that
	/// can never be selected because an earlier, equally specific route covers
	/// all of its paths is still registered, but logged as a warning.
	#[tracing::instrument(level = "trace", skip(self), err(Debug, level = "debug"))]
	pub fn route(mut self, pattern: &str, name: &str, view: View) -> Result<Self>
	{
		if self.get(name).is_some() {
			return Err(Error::DuplicateRouteName { name: name.to_owned() });
		}

		let pattern = PathPattern::parse(pattern)?;

		if let Some(earlier) = self
			.routes
			.iter()
			.find(|route| route.pattern.shadows(&pattern))
		{
			tracing::warn! {
				route = name,
				%pattern,
				shadowed_by = earlier.name.as_str(),
				"route can never match",
			};
		}

		self.routes.push(Route { name: name.to_owned(), pattern, view });

		Ok(self)
	}

	/// All routes, in registration order.
	pub fn routes(&self) -> &[Route]
	{
		&self.routes
	}

	/// Looks up a route by name.
	pub fn get(&self, name: &str) -> Option<&Route>
	{
		self.routes.iter().find(|route| route.name == name)
	}

	/// Resolves a location like `/data?q=judge#top` to a route.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	pub fn resolve(&self, location: &str) -> Result<RouteMatch>
	{
		let full_path = location
			.split_once('#')
			.map_or(location, |(before, _fragment)| before);

		let (path, query) = match full_path.split_once('?') {
			Some((path, query)) => (path, Params::from_query(query)?),
			None => (full_path, Params::new()),
		};

		// `min_by` keeps the first of several equal elements
		let (route, params) = self
			.routes
			.iter()
			.filter_map(|route| route.pattern.matches(path).map(|params| (route, params)))
			.min_by(|(a, _), (b, _)| b.pattern.cmp_specificity(&a.pattern))
			.ok_or_else(|| Error::RouteNotFound { path: path.to_owned() })?;

		tracing::trace!(route = route.name.as_str(), ?params, "resolved route");

		Ok(RouteMatch {
			name: route.name.clone(),
			view: route.view,
			path: path.to_owned(),
			full_path: full_path.to_owned(),
			params,
			query,
		})
	}

	/// Builds the path of the route called `name` with the given parameters.
	pub fn href(&self, name: &str, params: &Params) -> Result<String>
	{
		let route = self
			.get(name)
			.ok_or_else(|| Error::UnknownRouteName { name: name.to_owned() })?;

		if let Some((param, value)) = params
			.iter()
			.find(|(_, value)| value.is_empty() || value.contains(['/', '?', '#']))
		{
			return Err(Error::InvalidParam { param: param.to_owned(), value: value.to_owned() });
		}

		route
			.pattern
			.render(params)
			.map_err(|param| Error::MissingParam { route: name.to_owned(), param: param.to_owned() })
	}
}

/// Builds the route table of the application.
///
/// | path          | name           | view               |
/// |---------------|----------------|--------------------|
/// | `/`           | `home`         | `HomeView`         |
/// | `/data`       | `data`         | `DataView`         |
/// | `/player/:id` | `playerDetail` | `PlayerDetailView` |
/// | `/team/:id`   | `teamDetail`   | `TeamDetailView`   |
/// | `/game/:id`   | `gameDetail`   | `GameDetailView`   |
pub fn route_table() -> Result<RouteTable>
{
	RouteTable::new()
		.route("/", names::HOME, View::Home)?
		.route("/data", names::DATA, View::Data)?
		.route("/player/:id", names::PLAYER_DETAIL, View::PlayerDetail)?
		.route("/team/:id", names::TEAM_DETAIL, View::TeamDetail)?
		.route("/game/:id", names::GAME_DETAIL, View::GameDetail)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn every_route_resolves_its_own_path() -> color_eyre::Result<()>
	{
		let table = route_table()?;
		let cases = [
			("/", View::Home, None),
			("/data", View::Data, None),
			("/player/42", View::PlayerDetail, Some("42")),
			("/team/BOS", View::TeamDetail, Some("BOS")),
			("/game/745444", View::GameDetail, Some("745444")),
		];

		for (path, view, id) in cases {
			let route = table.resolve(path)?;

			assert_eq!(route.view, view, "{path}");
			assert_eq!(route.params.get("id"), id, "{path}");
			assert_eq!(route.params.len(), usize::from(id.is_some()), "{path}");
		}

		Ok(())
	}

	#[test]
	fn unknown_path_is_not_found() -> color_eyre::Result<()>
	{
		let table = route_table()?;

		for path in ["/nonexistent", "/player", "/player/42/stats", "/team//"] {
			let error = table.resolve(path).unwrap_err();

			assert!(matches!(error, Error::RouteNotFound { .. }), "{path}: {error}");
		}

		Ok(())
	}

	#[test]
	fn query_and_fragment_are_split_off() -> color_eyre::Result<()>
	{
		let table = route_table()?;
		let route = table.resolve("/data?q=shohei+ohtani&date=2024-03-01#results")?;

		assert_eq!(route.name, names::DATA);
		assert_eq!(route.path, "/data");
		assert_eq!(route.full_path, "/data?q=shohei+ohtani&date=2024-03-01");
		assert_eq!(route.query.get("q"), Some("shohei ohtani"));
		assert_eq!(route.query.get("date"), Some("2024-03-01"));

		let route = table.resolve("/data/")?;
		assert_eq!(route.view, View::Data);

		Ok(())
	}

	#[test]
	fn static_segments_outrank_params() -> color_eyre::Result<()>
	{
		let table = RouteTable::new()
			.route("/player/:id", "byId", View::PlayerDetail)?
			.route("/player/leaders", "leaders", View::Data)?;

		assert_eq!(table.resolve("/player/leaders")?.name, "leaders");
		assert_eq!(table.resolve("/player/42")?.name, "byId");

		let table = RouteTable::new()
			.route("/player/leaders", "leaders", View::Data)?
			.route("/player/:id", "byId", View::PlayerDetail)?;

		assert_eq!(table.resolve("/player/leaders")?.name, "leaders");
		assert_eq!(table.resolve("/player/42")?.name, "byId");

		let table = RouteTable::new()
			.route("/game/:id/box", "box", View::GameDetail)?
			.route("/game/745444/:part", "featured", View::GameDetail)?;

		let route = table.resolve("/game/745444/box")?;
		assert_eq!(route.name, "featured");
		assert_eq!(route.params.get("part"), Some("box"));

		Ok(())
	}

	#[test]
	fn first_registered_route_wins_on_tie() -> color_eyre::Result<()>
	{
		let table = RouteTable::new()
			.route("/team/:id", "byId", View::TeamDetail)?
			.route("/team/:abbr", "byAbbr", View::TeamDetail)?;

		let route = table.resolve("/team/BOS")?;

		assert_eq!(route.name, "byId");
		assert_eq!(route.params.get("id"), Some("BOS"));
		assert_eq!(route.params.get("abbr"), None);

		Ok(())
	}

	#[test]
	fn duplicate_names_are_rejected()
	{
		let result = RouteTable::new()
			.route("/", "home", View::Home)
			.and_then(|table| table.route("/home", "home", View::Home));

		assert!(matches!(result, Err(Error::DuplicateRouteName { name }) if name == "home"));
	}

	#[test]
	fn href() -> color_eyre::Result<()>
	{
		let table = route_table()?;
		let id = Params::from_iter([("id", "BOS")]);

		assert_eq!(table.href(names::TEAM_DETAIL, &id)?, "/team/BOS");
		assert_eq!(table.href(names::HOME, &Params::new())?, "/");

		assert!(matches!(
			table.href(names::PLAYER_DETAIL, &Params::new()),
			Err(Error::MissingParam { param, .. }) if param == "id",
		));

		assert!(matches!(
			table.href(names::PLAYER_DETAIL, &Params::from_iter([("id", "1/2")])),
			Err(Error::InvalidParam { .. }),
		));

		assert!(matches!(table.href("standings", &id), Err(Error::UnknownRouteName { .. })));

		Ok(())
	}
}
