use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use folio_engine::config::CliArgs;
use folio_engine::engine::Recommender;
use folio_engine::persistence::load_library;
use folio_engine::server::FolioServer;
use folio_engine::transport::NdjsonTransport;

fn main() -> Result<()> {
	let args = CliArgs::parse();

	// Logs go to stderr; stdout carries the protocol
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let library = load_library(&args.artifact_paths()).context("Failed to load artifacts")?;
	let recommender = Recommender::new(Arc::new(library), args.recommender_config());

	let server = FolioServer::new(NdjsonTransport::new(), recommender);

	tracing::info!("folio-engine ready");
	server.run().context("Server error")
}
