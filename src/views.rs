//! The views routes resolve to, and the data each of them loads.

use std::fmt;

use serde::Serialize;

use crate::api::Endpoint;
use crate::routing::{self, RouteMatch};

/// A screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View
{
	/// Today's games and the league leaders.
	#[serde(rename = "HomeView")]
	Home,

	/// Schedule lookup by date and search.
	#[serde(rename = "DataView")]
	Data,

	/// A single player.
	#[serde(rename = "PlayerDetailView")]
	PlayerDetail,

	/// A single team.
	#[serde(rename = "TeamDetailView")]
	TeamDetail,

	/// A single game.
	#[serde(rename = "GameDetailView")]
	GameDetail,
}

impl View
{
	/// The view's identifier.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::Home => "HomeView",
			Self::Data => "DataView",
			Self::PlayerDetail => "PlayerDetailView",
			Self::TeamDetail => "TeamDetailView",
			Self::GameDetail => "GameDetailView",
		}
	}

	/// The API requests this view makes when it is shown for `route`.
	///
	/// `DataView` searches if the location has a `q` query parameter, and
	/// otherwise shows the schedule for its `date` query parameter (or today).
	/// `GameDetailView` has no data source.
	pub fn endpoints(&self, route: &RouteMatch) -> routing::Result<Vec<Endpoint>>
	{
		let id = || {
			route.params.get("id").ok_or_else(|| routing::Error::MissingParam {
				route: route.name.clone(),
				param: String::from("id"),
			})
		};

		Ok(match self {
			Self::Home => vec![Endpoint::schedule(None), Endpoint::LeagueLeaders],
			Self::Data => match route.query.get("q") {
				Some(query) => vec![Endpoint::search(query)],
				None => vec![Endpoint::schedule(route.query.get("date"))],
			},
			Self::PlayerDetail => {
				let player_id = id()?;
				vec![Endpoint::player_details(player_id), Endpoint::player_stats(player_id)]
			}
			Self::TeamDetail => vec![Endpoint::team_details(id()?)],
			Self::GameDetail => Vec::new(),
		})
	}
}

impl fmt::Display for View
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}
