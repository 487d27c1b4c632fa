//! This module contains the [`Config`] struct - a set of configuration options
//! that can be read from the environment on startup.
//!
//! Every option has a default suitable for local development, so an empty
//! environment yields a working configuration.

use std::env;
use std::str::FromStr;

use derive_more::Debug;
use thiserror::Error;
use url::Url;

use crate::api::DEFAULT_API_URL;

/// Default `tracing` filter directives.
pub const DEFAULT_LOG_FILTER: &str = "mlb_stats_web=info,warn";

/// Runtime configuration.
#[derive(Debug, Clone, clap::Parser)]
pub struct Config
{
	/// Base URL of the stats backend.
	#[arg(long, env = "STATS_API_URL", default_value = DEFAULT_API_URL)]
	#[debug("{:?}", api_url.as_str())]
	pub api_url: Url,

	/// `tracing` filter directives, e.g. `mlb_stats_web=debug`.
	#[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
	pub log_filter: String,
}

/// Error that can occur while initializing a [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// An environment variable was set, but is not valid UTF-8.
	#[error("failed to read environment variable `{var}`: {source}")]
	Env
	{
		/// The environment variable we tried to read.
		var: &'static str,

		/// The error returned by [`std::env::var()`].
		source: env::VarError,
	},

	/// A configuration value could not be parsed into the required type.
	#[error("failed to parse configuration value `{var}`: {source}")]
	Parse
	{
		/// The environment variable containing the value.
		var: &'static str,

		/// The parsing error.
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	///
	/// Unset or empty variables fall back to their defaults.
	#[tracing::instrument(err(Debug))]
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		Self::from_lookup(env::var)
	}

	/// Initializes a [`Config`] from `lookup`, which behaves like
	/// [`std::env::var()`].
	fn from_lookup<F>(lookup: F) -> Result<Self, InitializeConfigError>
	where
		F: Fn(&'static str) -> Result<String, env::VarError>,
	{
		let api_url = parse_or(&lookup, "STATS_API_URL", DEFAULT_API_URL)?;
		let log_filter = parse_or(&lookup, "RUST_LOG", DEFAULT_LOG_FILTER)?;

		Ok(Self { api_url, log_filter })
	}
}

/// Looks up and parses a variable, using `default` if it does not exist or is
/// empty.
fn parse_or<T, F>(lookup: &F, var: &'static str, default: &str) -> Result<T, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
	F: Fn(&'static str) -> Result<String, env::VarError>,
{
	let value = match lookup(var) {
		Ok(value) if !value.is_empty() => value,
		Ok(_) | Err(env::VarError::NotPresent) => default.to_owned(),
		Err(source) => return Err(InitializeConfigError::Env { var, source }),
	};

	value
		.parse::<T>()
		.map_err(|error| InitializeConfigError::Parse { var, source: Box::new(error) })
}

#[cfg(test)]
mod tests
{
	use std::ffi::OsString;

	use clap::Parser;

	use super::*;

	#[test]
	fn defaults() -> color_eyre::Result<()>
	{
		let config = Config::try_parse_from(["mlb-stats-web"])?;

		// `RUST_LOG` may be set by whoever runs the tests
		assert_eq!(config.api_url.as_str(), "http://localhost:5000/api");

		Ok(())
	}

	#[test]
	fn cli_overrides() -> color_eyre::Result<()>
	{
		let config = Config::try_parse_from([
			"mlb-stats-web",
			"--api-url",
			"https://stats.example.com/v1",
			"--log-filter",
			"debug",
		])?;

		assert_eq!(config.api_url.as_str(), "https://stats.example.com/v1");
		assert_eq!(config.log_filter, "debug");

		Ok(())
	}

	#[test]
	fn invalid_url()
	{
		assert!(Config::try_parse_from(["mlb-stats-web", "--api-url", "not a url"]).is_err());
	}

	#[test]
	fn unset_or_empty_variables_use_defaults() -> color_eyre::Result<()>
	{
		let config = Config::from_lookup(|var| match var {
			"RUST_LOG" => Ok(String::new()),
			_ => Err(env::VarError::NotPresent),
		})?;

		assert_eq!(config.api_url.as_str(), "http://localhost:5000/api");
		assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

		Ok(())
	}

	#[test]
	fn variables_override_defaults() -> color_eyre::Result<()>
	{
		let config = Config::from_lookup(|var| match var {
			"STATS_API_URL" => Ok(String::from("https://stats.example.com/v1")),
			"RUST_LOG" => Ok(String::from("mlb_stats_web=trace")),
			_ => Err(env::VarError::NotPresent),
		})?;

		assert_eq!(config.api_url.as_str(), "https://stats.example.com/v1");
		assert_eq!(config.log_filter, "mlb_stats_web=trace");

		Ok(())
	}

	#[test]
	fn unparsable_api_url()
	{
		let result = Config::from_lookup(|var| match var {
			"STATS_API_URL" => Ok(String::from("not a url")),
			_ => Err(env::VarError::NotPresent),
		});

		assert!(matches!(
			result,
			Err(InitializeConfigError::Parse { var: "STATS_API_URL", .. }),
		));
	}

	#[test]
	fn non_unicode_variable()
	{
		let result = Config::from_lookup(|var| match var {
			"RUST_LOG" => Err(env::VarError::NotUnicode(OsString::from("warn"))),
			_ => Err(env::VarError::NotPresent),
		});

		assert!(matches!(
			result,
			Err(InitializeConfigError::Env { var: "RUST_LOG", source: env::VarError::NotUnicode(_) }),
		));
	}

	#[test]
	fn new_reads_the_environment() -> color_eyre::Result<()>
	{
		let config = Config::new()?;

		assert!(!config.log_filter.is_empty());

		Ok(())
	}

	#[test]
	fn debug_output_is_compact()
	{
		let config = Config {
			api_url: Url::parse("http://localhost:5000/api").unwrap(),
			log_filter: String::from("warn"),
		};

		assert_eq!(
			format!("{config:?}"),
			r#"Config { api_url: "http://localhost:5000/api", log_filter: "warn" }"#,
		);
	}
}
