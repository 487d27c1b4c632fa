//! The errors that can occur while registering or resolving routes.

use thiserror::Error;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur while registering or resolving routes.
#[derive(Debug, Error)]
pub enum Error
{
	/// No registered route matches the requested path.
	#[error("no route matches `{path}`")]
	RouteNotFound
	{
		/// The path we tried to resolve.
		path: String,
	},

	/// A path pattern could not be parsed.
	#[error("invalid route pattern `{pattern}`: {reason}")]
	InvalidPattern
	{
		/// The pattern as it was passed in.
		pattern: String,

		/// What is wrong with it.
		reason: &'static str,
	},

	/// A route with the same name has already been registered.
	#[error("a route named `{name}` is already registered")]
	DuplicateRouteName
	{
		/// The conflicting name.
		name: String,
	},

	/// There is no route with the given name.
	#[error("no route named `{name}`")]
	UnknownRouteName
	{
		/// The name we looked up.
		name: String,
	},

	/// A route needs a parameter that was not supplied.
	#[error("route `{route}` requires parameter `{param}`")]
	MissingParam
	{
		/// The route's name.
		route: String,

		/// The missing parameter.
		param: String,
	},

	/// A parameter value cannot be used to build a path.
	#[error("invalid value `{value}` for parameter `{param}`")]
	InvalidParam
	{
		/// The parameter's name.
		param: String,

		/// The rejected value.
		value: String,
	},

	/// The query string of a location could not be decoded.
	#[error("invalid query string")]
	InvalidQuery(#[from] serde_urlencoded::de::Error),

	/// A history traversal went past either end of the history.
	#[error("cannot move {delta} entries through history")]
	HistoryOutOfRange
	{
		/// The requested offset from the current entry.
		delta: isize,
	},
}
