//! Named string parameters extracted from paths and query strings.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A set of named parameters.
///
/// Used both for path parameters (`:id` in `/player/:id`) and for the decoded
/// query string of a location.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params
{
	/// Creates an empty set of parameters.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Returns the value bound to `name`, if any.
	pub fn get(&self, name: &str) -> Option<&str>
	{
		self.0.get(name).map(String::as_str)
	}

	/// Parses the value bound to `name` into a `T`.
	///
	/// Returns [`None`] if there is no such parameter.
	pub fn parse<T>(&self, name: &str) -> Option<Result<T, T::Err>>
	where
		T: FromStr,
	{
		self.get(name).map(str::parse)
	}

	/// Binds `value` to `name`, returning the previous value.
	pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<String>
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.0.insert(name.into(), value.into())
	}

	/// Whether there are no parameters.
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}

	/// The number of parameters.
	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	/// Iterates over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)>
	{
		self.0
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Decodes an `application/x-www-form-urlencoded` query string.
	///
	/// If a key occurs more than once, the last value wins.
	pub(super) fn from_query(query: &str) -> Result<Self, serde_urlencoded::de::Error>
	{
		serde_urlencoded::from_str(query).map(Self)
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}
