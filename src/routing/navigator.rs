//! History and scroll restoration.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::{Error, Params, Result, RouteMatch, RouteTable};

/// A scroll offset in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScrollPosition
{
	/// Horizontal offset.
	pub left: u32,

	/// Vertical offset.
	pub top: u32,
}

impl ScrollPosition
{
	/// The top of the page.
	pub const TOP: Self = Self { left: 0, top: 0 };

	/// Creates a new [`ScrollPosition`].
	pub const fn new(left: u32, top: u32) -> Self
	{
		Self { left, top }
	}
}

/// Where to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget
{
	/// A concrete location, e.g. `/player/42` or `/data?q=judge`.
	Path(String),

	/// A named route plus the parameters for its pattern.
	Named
	{
		/// The route's name.
		name: String,

		/// Values for the route's parameters.
		params: Params,
	},
}

impl NavigationTarget
{
	/// Creates a [`NavigationTarget::Named`].
	pub fn named<N>(name: N, params: Params) -> Self
	where
		N: Into<String>,
	{
		Self::Named { name: name.into(), params }
	}
}

impl From<&str> for NavigationTarget
{
	fn from(path: &str) -> Self
	{
		Self::Path(path.to_owned())
	}
}

impl From<String> for NavigationTarget
{
	fn from(path: String) -> Self
	{
		Self::Path(path)
	}
}

/// The outcome of a successful navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation
{
	/// The route that is now current.
	pub route: RouteMatch,

	/// Where the page should scroll to.
	pub scroll: ScrollPosition,
}

/// Keeps track of the navigation history.
///
/// Whenever the current location is left, the caller reports its scroll
/// position, which is saved for that location. Arriving at a location with a
/// saved position restores it; any other location starts at
/// [`ScrollPosition::TOP`].
///
/// Like a browser tab, neither history nor saved positions are ever pruned;
/// both grow for as long as the navigator lives. `push` only drops the
/// forward entries it replaces.
#[derive(Debug)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct Navigator
{
	routes: Arc<RouteTable>,
	history: Vec<RouteMatch>,
	current: Option<usize>,
	saved_positions: HashMap<String, ScrollPosition>,
}

impl Navigator
{
	/// Creates a navigator with empty history.
	pub fn new(routes: Arc<RouteTable>) -> Self
	{
		Self { routes, history: Vec::new(), current: None, saved_positions: HashMap::new() }
	}

	/// The route table this navigator resolves against.
	pub fn routes(&self) -> &RouteTable
	{
		&self.routes
	}

	/// The current history entry.
	pub fn current(&self) -> Option<&RouteMatch>
	{
		self.current.and_then(|idx| self.history.get(idx))
	}

	/// All history entries, oldest first.
	pub fn history(&self) -> &[RouteMatch]
	{
		&self.history
	}

	/// The scroll position saved for `full_path`, if any.
	pub fn saved_position(&self, full_path: &str) -> Option<ScrollPosition>
	{
		self.saved_positions.get(full_path).copied()
	}

	/// Navigates to `target`, discarding any forward history.
	///
	/// `scroll` is the scroll position of the page being left. If `target`
	/// does not resolve, history is left untouched.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	pub fn push(&mut self, target: NavigationTarget, scroll: ScrollPosition) -> Result<Navigation>
	{
		let route = self.resolve(&target)?;

		self.save_position(scroll);

		let idx = match self.current {
			Some(current) => {
				self.history.truncate(current + 1);
				current + 1
			}
			None => 0,
		};

		self.history.push(route.clone());
		self.current = Some(idx);

		Ok(self.arrive(route))
	}

	/// Navigates to `target`, replacing the current history entry.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	pub fn replace(&mut self, target: NavigationTarget, scroll: ScrollPosition) -> Result<Navigation>
	{
		let route = self.resolve(&target)?;

		self.save_position(scroll);

		match self.current.and_then(|idx| self.history.get_mut(idx)) {
			Some(entry) => *entry = route.clone(),
			None => {
				self.history.push(route.clone());
				self.current = Some(self.history.len() - 1);
			}
		}

		Ok(self.arrive(route))
	}

	/// Moves `delta` entries through history; negative values go back.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	pub fn go(&mut self, delta: isize, scroll: ScrollPosition) -> Result<Navigation>
	{
		let (idx, route) = self
			.current
			.and_then(|current| current.checked_add_signed(delta))
			.and_then(|idx| self.history.get(idx).map(|route| (idx, route.clone())))
			.ok_or(Error::HistoryOutOfRange { delta })?;

		self.save_position(scroll);
		self.current = Some(idx);

		Ok(self.arrive(route))
	}

	/// Goes back one entry.
	pub fn back(&mut self, scroll: ScrollPosition) -> Result<Navigation>
	{
		self.go(-1, scroll)
	}

	/// Goes forward one entry.
	pub fn forward(&mut self, scroll: ScrollPosition) -> Result<Navigation>
	{
		self.go(1, scroll)
	}

	fn resolve(&self, target: &NavigationTarget) -> Result<RouteMatch>
	{
		match target {
			NavigationTarget::Path(path) => self.routes.resolve(path),
			NavigationTarget::Named { name, params } => {
				let path = self.routes.href(name, params)?;
				self.routes.resolve(&path)
			}
		}
	}

	/// Remembers `scroll` for the location we are about to leave.
	fn save_position(&mut self, scroll: ScrollPosition)
	{
		if let Some(full_path) = self.current().map(|route| route.full_path.clone()) {
			self.saved_positions.insert(full_path, scroll);
		}
	}

	fn arrive(&self, route: RouteMatch) -> Navigation
	{
		let scroll = self
			.saved_position(&route.full_path)
			.unwrap_or(ScrollPosition::TOP);

		tracing::debug!(route = route.name.as_str(), path = route.full_path.as_str(), ?scroll, "navigated");

		Navigation { route, scroll }
	}
}
