use std::path::PathBuf;

use clap::Parser;

use crate::engine::{RecommenderConfig, DEFAULT_PLACEHOLDER_IMAGE};
use crate::persistence::ArtifactPaths;
use crate::ranker::DEFAULT_TOP_K;

#[derive(Parser, Debug)]
#[command(name = "folio-engine", about = "Book recommendation engine over JSON-RPC 2.0 / NDJSON stdio")]
pub struct CliArgs {
	/// Item index artifact: JSON array of titles, one per matrix row
	#[arg(long, default_value = "data/item_index.json", env = "FOLIO_ITEM_INDEX")]
	pub item_index: PathBuf,

	/// Similarity matrix artifact: square JSON array of score rows
	#[arg(long, default_value = "data/similarity.json", env = "FOLIO_SIMILARITY")]
	pub similarity: PathBuf,

	/// Catalog metadata artifact (may repeat titles)
	#[arg(long, default_value = "data/books.json", env = "FOLIO_CATALOG")]
	pub catalog: PathBuf,

	/// Popularity listing artifact
	#[arg(long, default_value = "data/popular.json", env = "FOLIO_POPULAR")]
	pub popular: PathBuf,

	/// Image URL used when a book has no usable cover
	#[arg(long, default_value = DEFAULT_PLACEHOLDER_IMAGE, env = "FOLIO_PLACEHOLDER_IMAGE")]
	pub placeholder_image: String,

	/// Recommendations returned when a request does not set `k`
	#[arg(long, default_value_t = DEFAULT_TOP_K, env = "FOLIO_TOP_K")]
	pub top_k: usize,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "FOLIO_LOG_LEVEL")]
	pub log_level: String,
}

impl CliArgs {
	pub fn artifact_paths(&self) -> ArtifactPaths {
		ArtifactPaths {
			item_index: self.item_index.clone(),
			similarity: self.similarity.clone(),
			catalog: self.catalog.clone(),
			popular: self.popular.clone(),
		}
	}

	pub fn recommender_config(&self) -> RecommenderConfig {
		RecommenderConfig {
			placeholder_image: self.placeholder_image.clone(),
			default_k: self.top_k,
		}
	}
}
