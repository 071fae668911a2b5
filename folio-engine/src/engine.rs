// ---------------------------------------------------------------------------
// Recommender — resolve, rank, materialize
// ---------------------------------------------------------------------------
//
// Wires the resolver, ranker and materializer over a `Library` that is built
// once at startup and shared read-only behind an `Arc`. Cloning a
// `Recommender` is cheap; every clone sees the same tables.
// ---------------------------------------------------------------------------

use std::sync::Arc;

use crate::catalog::{Catalog, ItemIndex};
use crate::error::FolioError;
use crate::materializer::{materialize, UNKNOWN_AUTHOR};
use crate::matrix::SimilarityMatrix;
use crate::ranker::{top_k, DEFAULT_TOP_K};
use crate::resolver::resolve_with_tier;
use crate::types::{
	DisplayRecord, ImageField, ItemHandle, PopularityEntry, RankedItem, Resolution,
};
use crate::url::normalize_or;

/// Placeholder image served by the rendering layer.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/static/placeholder.png";

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// The immutable tables everything else reads from.
#[derive(Debug)]
pub struct Library {
	index: ItemIndex,
	matrix: SimilarityMatrix,
	catalog: Catalog,
}

impl Library {
	/// Fails when the matrix is not aligned 1:1 with the item index.
	pub fn new(
		index: ItemIndex,
		matrix: SimilarityMatrix,
		catalog: Catalog,
	) -> Result<Self, FolioError> {
		if index.len() != matrix.size() {
			return Err(FolioError::DimensionMismatch {
				items: index.len(),
				rows: matrix.size(),
			});
		}
		Ok(Self {
			index,
			matrix,
			catalog,
		})
	}

	pub fn index(&self) -> &ItemIndex {
		&self.index
	}

	pub fn matrix(&self) -> &SimilarityMatrix {
		&self.matrix
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecommenderConfig {
	pub placeholder_image: String,
	pub default_k: usize,
}

impl Default for RecommenderConfig {
	fn default() -> Self {
		Self {
			placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
			default_k: DEFAULT_TOP_K,
		}
	}
}

// ---------------------------------------------------------------------------
// Recommender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Recommender {
	library: Arc<Library>,
	config: RecommenderConfig,
}

impl Recommender {
	pub fn new(library: Arc<Library>, config: RecommenderConfig) -> Self {
		Self { library, config }
	}

	pub fn library(&self) -> &Library {
		&self.library
	}

	pub fn config(&self) -> &RecommenderConfig {
		&self.config
	}

	/// Resolve free text to an item, reporting the matching tier.
	pub fn resolve(&self, query: &str) -> Option<Resolution> {
		resolve_with_tier(self.library.index(), query)
	}

	pub fn rank(&self, handle: ItemHandle, k: usize) -> Vec<RankedItem> {
		top_k(self.library.matrix(), handle, k)
	}

	/// Recommend up to `k` books similar to `query` (`None` uses the
	/// configured default). Blank or unmatched queries yield an empty list.
	pub fn resolve_and_rank(&self, query: &str, k: Option<usize>) -> Vec<DisplayRecord> {
		let query = query.trim();
		if query.is_empty() {
			tracing::debug!("Empty query received");
			return Vec::new();
		}

		let Some(resolution) = self.resolve(query) else {
			tracing::info!(query = %query, "Query not found in item index");
			return Vec::new();
		};
		tracing::debug!(
			query = %query,
			handle = resolution.handle.index(),
			tier = ?resolution.tier,
			"Query resolved"
		);

		let k = k.unwrap_or(self.config.default_k);
		let ranked: Vec<ItemHandle> = self
			.rank(resolution.handle, k)
			.into_iter()
			.map(|r| r.handle)
			.collect();
		let records = materialize(
			self.library.index(),
			self.library.catalog(),
			&ranked,
			&self.config.placeholder_image,
		);
		tracing::debug!(count = records.len(), recommendations = ?records, "Recommendations");
		records
	}

	/// Popularity listing in artifact order. Only the medium image is shown,
	/// normalized, with the placeholder when it is missing.
	pub fn popularity_listing(&self) -> Vec<PopularityEntry> {
		self.library
			.catalog()
			.popular()
			.iter()
			.map(|p| PopularityEntry {
				title: p.item.title.clone(),
				author: p
					.item
					.author
					.as_deref()
					.map(str::trim)
					.filter(|a| !a.is_empty())
					.unwrap_or(UNKNOWN_AUTHOR)
					.to_string(),
				image: normalize_or(
					p.item.image(ImageField::Medium),
					&self.config.placeholder_image,
				),
				num_ratings: p.num_ratings,
				avg_rating: p.avg_rating,
			})
			.collect()
	}
}
