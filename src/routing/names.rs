//! Names of the routes registered by [`route_table()`].
//!
//! [`route_table()`]: super::route_table

/// `/`
pub const HOME: &str = "home";

/// `/data`
pub const DATA: &str = "data";

/// `/player/:id`
pub const PLAYER_DETAIL: &str = "playerDetail";

/// `/team/:id`
pub const TEAM_DETAIL: &str = "teamDetail";

/// `/game/:id`
pub const GAME_DETAIL: &str = "gameDetail";
