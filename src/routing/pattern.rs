//! Path patterns such as `/player/:id`.
//!
//! A pattern is parsed once, when its route is registered, into a list of
//! [`Segment`]s. Matching a path then only compares segments.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::{Error, Params, Result};

/// A single `/`-separated segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment
{
	/// Matches a path segment that is exactly equal to this string.
	Literal(String),

	/// Matches any non-empty path segment and binds it under this name.
	Param(String),
}

impl fmt::Display for Segment
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::Literal(literal) => f.write_str(literal),
			Self::Param(name) => write!(f, ":{name}"),
		}
	}
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern
{
	segments: Vec<Segment>,
}

impl PathPattern
{
	/// Parses a pattern like `/team/:id`.
	pub fn parse(pattern: &str) -> Result<Self>
	{
		let invalid = |reason| Error::InvalidPattern { pattern: pattern.to_owned(), reason };

		if !pattern.starts_with('/') {
			return Err(invalid("must start with `/`"));
		}

		let mut segments = Vec::new();

		for raw in split_segments(pattern) {
			let segment = match raw.strip_prefix(':') {
				None if raw.is_empty() => return Err(invalid("empty segment")),
				None => Segment::Literal(raw.to_owned()),
				Some("") => return Err(invalid("parameter name cannot be empty")),
				Some(name) if segments.contains(&Segment::Param(name.to_owned())) => {
					return Err(invalid("duplicate parameter name"));
				}
				Some(name) => Segment::Param(name.to_owned()),
			};

			segments.push(segment);
		}

		Ok(Self { segments })
	}

	/// The pattern's segments, in order.
	pub fn segments(&self) -> &[Segment]
	{
		&self.segments
	}

	/// The names of all parameters bound by this pattern, in order.
	pub fn param_names(&self) -> impl Iterator<Item = &str>
	{
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Literal(_) => None,
			Segment::Param(name) => Some(name.as_str()),
		})
	}

	/// Matches a concrete path against this pattern.
	///
	/// `path` must not contain a query string or fragment. Returns the bound
	/// parameters on success.
	pub fn matches(&self, path: &str) -> Option<Params>
	{
		let mut actual = split_segments(path);
		let mut params = Params::new();

		for expected in &self.segments {
			let segment = actual.next()?;

			match expected {
				Segment::Literal(literal) if literal == segment => {}
				Segment::Literal(_) => return None,
				Segment::Param(_) if segment.is_empty() => return None,
				Segment::Param(name) => {
					params.insert(name.as_str(), segment);
				}
			}
		}

		if actual.next().is_some() {
			return None;
		}

		Some(params)
	}

	/// Compares how specific two patterns are.
	///
	/// Segments are compared from left to right and a literal is more specific
	/// than a parameter, so `/player/leaders` ranks above `/player/:id`, and
	/// `/game/745444/:part` ranks above `/game/:id/box`. Patterns whose segments
	/// are of the same kind everywhere compare as equal.
	pub fn cmp_specificity(&self, other: &Self) -> Ordering
	{
		let is_literal = |segment: &Segment| matches!(segment, Segment::Literal(_));

		self.segments
			.iter()
			.map(is_literal)
			.cmp(other.segments.iter().map(is_literal))
	}

	/// Whether every path matched by `later` is already matched by `self` with
	/// the same specificity.
	///
	/// If `self` is registered first, `later` can never be selected.
	pub fn shadows(&self, later: &Self) -> bool
	{
		self.segments.len() == later.segments.len()
			&& self
				.segments
				.iter()
				.zip(&later.segments)
				.all(|pair| match pair {
					(Segment::Param(_), Segment::Param(_)) => true,
					(Segment::Literal(a), Segment::Literal(b)) => a == b,
					(Segment::Literal(_), Segment::Param(_)) | (Segment::Param(_), Segment::Literal(_)) => false,
				})
	}

	/// Builds a concrete path by substituting `params` into this pattern.
	///
	/// On failure, returns the name of the first parameter that is missing.
	pub(super) fn render<'a>(&'a self, params: &Params) -> std::result::Result<String, &'a str>
	{
		if self.segments.is_empty() {
			return Ok(String::from("/"));
		}

		let mut path = String::new();

		for segment in &self.segments {
			path.push('/');

			match segment {
				Segment::Literal(literal) => path.push_str(literal),
				Segment::Param(name) => path.push_str(params.get(name).ok_or(name.as_str())?),
			}
		}

		Ok(path)
	}
}

impl FromStr for PathPattern
{
	type Err = Error;

	fn from_str(pattern: &str) -> Result<Self>
	{
		Self::parse(pattern)
	}
}

impl fmt::Display for PathPattern
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "/{}", self.segments.iter().format("/"))
	}
}

/// Splits an absolute path into its segments.
///
/// The leading `/` and a single trailing `/` are ignored, so `/` has no
/// segments and `/data/` has the same segments as `/data`.
pub(super) fn split_segments(path: &str) -> impl Iterator<Item = &str>
{
	let path = path.strip_prefix('/').unwrap_or(path);
	let path = path.strip_suffix('/').unwrap_or(path);

	(!path.is_empty())
		.then(|| path.split('/'))
		.into_iter()
		.flatten()
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn parse_and_display()
	{
		for pattern in ["/", "/data", "/player/:id", "/game/:id/box/:inning"] {
			let parsed = PathPattern::parse(pattern).unwrap();

			assert_eq!(parsed.to_string(), pattern);
		}

		let parsed = PathPattern::parse("/team/:id").unwrap();

		assert_eq!(parsed.segments(), [
			Segment::Literal(String::from("team")),
			Segment::Param(String::from("id")),
		]);
	}

	#[test]
	fn rejects_invalid_patterns()
	{
		for pattern in ["", "player/:id", "/player/:", "/a//b", "/game/:id/:id"] {
			assert!(
				matches!(PathPattern::parse(pattern), Err(Error::InvalidPattern { .. })),
				"`{pattern}` should be rejected",
			);
		}
	}

	#[test]
	fn matching()
	{
		let pattern = PathPattern::parse("/player/:id").unwrap();

		let params = pattern.matches("/player/592450").unwrap();
		assert_eq!(params.get("id"), Some("592450"));

		assert!(pattern.matches("/player/592450/").is_some());
		assert!(pattern.matches("/player").is_none());
		assert!(pattern.matches("/player/").is_none());
		assert!(pattern.matches("/player//").is_none());
		assert!(pattern.matches("/player/592450/stats").is_none());
		assert!(pattern.matches("/team/592450").is_none());
	}

	#[test]
	fn root_only_matches_root()
	{
		let root = PathPattern::parse("/").unwrap();

		assert!(root.matches("/").is_some_and(|params| params.is_empty()));
		assert!(root.matches("").is_some());
		assert!(root.matches("/data").is_none());
	}

	#[test]
	fn shadowing()
	{
		let by_id = PathPattern::parse("/team/:id").unwrap();
		let by_abbr = PathPattern::parse("/team/:abbr").unwrap();
		let leaders = PathPattern::parse("/team/leaders").unwrap();

		assert!(by_id.shadows(&by_abbr));
		assert!(leaders.shadows(&leaders.clone()));
		assert!(!by_id.shadows(&leaders));
		assert!(!leaders.shadows(&by_id));
	}

	#[test]
	fn specificity()
	{
		let parse = |pattern| PathPattern::parse(pattern).unwrap();

		assert_eq!(parse("/player/leaders").cmp_specificity(&parse("/player/:id")), Ordering::Greater);
		assert_eq!(parse("/player/:id").cmp_specificity(&parse("/player/leaders")), Ordering::Less);
		assert_eq!(parse("/team/:id").cmp_specificity(&parse("/team/:abbr")), Ordering::Equal);

		// the leftmost differing segment decides
		assert_eq!(parse("/game/745444/:part").cmp_specificity(&parse("/game/:id/box")), Ordering::Greater);
	}

	#[test]
	fn render()
	{
		let pattern = PathPattern::parse("/game/:id").unwrap();

		assert_eq!(pattern.render(&Params::from_iter([("id", "745444")])), Ok(String::from("/game/745444")));
		assert_eq!(pattern.render(&Params::new()), Err("id"));
		assert_eq!(PathPattern::parse("/").unwrap().render(&Params::new()), Ok(String::from("/")));
	}
}
