use std::fmt::Write;

use anyhow::Context;
use clap::Parser;
use mlb_stats_web::routing::ScrollPosition;
use mlb_stats_web::{App, Config};

mod logging;

/// Visits locations of the stats browser and prints the data of each view.
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
	#[command(flatten)]
	config: Config,

	/// Locations to visit, in order.
	#[arg(default_value = "/")]
	paths: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let Args { config, paths } = Args::parse();

	logging::init(&config.log_filter)?;

	tracing::debug!(?config, "loaded configuration");

	let mut app = App::new(&config).context("initialize app")?;
	let mut routes_message = String::from("registered routes:\n");

	for route in app.routes().routes() {
		writeln!(&mut routes_message, "    • {} => {} ({})", route.pattern(), route.view(), route.name())?;
	}

	tracing::info!("{routes_message}");

	for path in paths {
		let page = app
			.visit(path.as_str(), ScrollPosition::TOP)
			.await
			.with_context(|| format!("visit `{path}`"))?;

		println!("{}", serde_json::to_string_pretty(&page)?);
	}

	Ok(())
}
