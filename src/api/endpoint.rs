//! The REST endpoints of the stats backend.

use reqwest::Method;
use url::Url;

use super::{Error, Result};

/// A single request the [`ApiClient`] knows how to make.
///
/// [`ApiClient`]: super::ApiClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint
{
	/// `GET /schedule` or `GET /schedule/{date}`.
	Schedule
	{
		/// A `YYYY-MM-DD` date; the backend defaults to today.
		date: Option<String>,
	},

	/// `GET /search?q={query}`.
	Search
	{
		/// Player or team name to search for.
		query: String,
	},

	/// `GET /player/{player_id}/stats`.
	PlayerStats
	{
		/// The player's MLB ID.
		player_id: String,
	},

	/// `GET /player/{player_id}/details`.
	PlayerDetails
	{
		/// The player's MLB ID.
		player_id: String,
	},

	/// `GET /leaders`.
	LeagueLeaders,

	/// `GET /team/{team_id}/details`.
	TeamDetails
	{
		/// The team's ID or abbreviation.
		team_id: String,
	},
}

impl Endpoint
{
	/// The schedule for `date`, or for today if there is none.
	///
	/// An empty date counts as no date.
	pub fn schedule(date: Option<&str>) -> Self
	{
		Self::Schedule { date: date.filter(|date| !date.is_empty()).map(str::to_owned) }
	}

	/// Search players and teams.
	pub fn search(query: &str) -> Self
	{
		Self::Search { query: query.to_owned() }
	}

	/// A player's stats.
	pub fn player_stats(player_id: &str) -> Self
	{
		Self::PlayerStats { player_id: player_id.to_owned() }
	}

	/// A player's biographical details.
	pub fn player_details(player_id: &str) -> Self
	{
		Self::PlayerDetails { player_id: player_id.to_owned() }
	}

	/// A team's details.
	pub fn team_details(team_id: &str) -> Self
	{
		Self::TeamDetails { team_id: team_id.to_owned() }
	}

	/// The name of the facade operation this endpoint belongs to.
	pub const fn operation(&self) -> &'static str
	{
		match self {
			Self::Schedule { .. } => "get_schedule",
			Self::Search { .. } => "search_data",
			Self::PlayerStats { .. } => "get_player_stats",
			Self::PlayerDetails { .. } => "get_player_details",
			Self::LeagueLeaders => "get_league_leaders",
			Self::TeamDetails { .. } => "get_team_details",
		}
	}

	/// All endpoints are plain `GET`s.
	pub fn method(&self) -> Method
	{
		Method::GET
	}

	/// Path segments relative to the API's base URL.
	pub fn path_segments(&self) -> Vec<&str>
	{
		match self {
			Self::Schedule { date: None } => vec!["schedule"],
			Self::Schedule { date: Some(date) } => vec!["schedule", date.as_str()],
			Self::Search { .. } => vec!["search"],
			Self::PlayerStats { player_id } => vec!["player", player_id.as_str(), "stats"],
			Self::PlayerDetails { player_id } => vec!["player", player_id.as_str(), "details"],
			Self::LeagueLeaders => vec!["leaders"],
			Self::TeamDetails { team_id } => vec!["team", team_id.as_str(), "details"],
		}
	}

	/// Query parameters, if any.
	pub fn query(&self) -> Vec<(&'static str, &str)>
	{
		match self {
			Self::Search { query } => vec![("q", query.as_str())],
			_ => Vec::new(),
		}
	}

	/// The full URL of this endpoint below `base_url`.
	///
	/// Path segments are percent-encoded.
	pub fn url(&self, base_url: &Url) -> Result<Url>
	{
		let mut url = base_url.clone();

		url.path_segments_mut()
			.map_err(|()| Error::InvalidBaseUrl { url: base_url.clone() })?
			.pop_if_empty()
			.extend(self.path_segments());

		let query = self.query();

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query);
		}

		Ok(url)
	}
}
