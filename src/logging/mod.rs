//! Log-capturing facilities.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod stderr;

/// Initializes [`tracing-subscriber`].
///
/// `filter` uses the same syntax as `RUST_LOG`.
pub fn init(filter: &str) -> anyhow::Result<()>
{
	let filter = EnvFilter::try_new(filter).context("parse log filter")?;

	tracing_subscriber::registry()
		.with(stderr::layer(filter))
		.try_init()
		.context("install global subscriber")?;

	tracing::debug!("initialized logging");

	Ok(())
}
