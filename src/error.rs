//! Errors surfaced by [`App`].
//!
//! Each component has its own error type; this one only wraps them so that
//! operations spanning several components can use `?`.
//!
//! [`App`]: crate::App

use thiserror::Error;

use crate::{api, routing};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error that can occur while navigating and loading a view's data.
#[derive(Debug, Error)]
pub enum Error
{
	/// Resolving or navigating to a location failed.
	#[error(transparent)]
	Routing(#[from] routing::Error),

	/// Talking to the stats backend failed.
	#[error(transparent)]
	Api(#[from] api::Error),
}
