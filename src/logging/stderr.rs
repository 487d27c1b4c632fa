use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Provides a tracing layer for emitting logs to STDERR.
pub fn layer<S>(filter: EnvFilter) -> impl tracing_subscriber::Layer<S>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	tracing_subscriber::fmt::layer()
		.pretty()
		.with_ansi(io::stderr().is_terminal())
		.with_file(true)
		.with_line_number(true)
		.with_target(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_writer(io::stderr)
		.with_filter(filter)
}
