// ---------------------------------------------------------------------------
// Artifact loading — JSON, optionally gzip-compressed
// ---------------------------------------------------------------------------
//
// Reads the four startup artifacts (item index, similarity matrix, catalog
// metadata, popularity listing). Gzip is detected by magic bytes, so `.json`
// and `.json.gz` files are both accepted. Every failure here is fatal: the
// process must not start serving on a missing or inconsistent artifact.
// ---------------------------------------------------------------------------

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::catalog::{Catalog, ItemIndex};
use crate::engine::Library;
use crate::error::FolioError;
use crate::matrix::SimilarityMatrix;
use crate::types::{ItemRecord, PopularityRecord};

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ArtifactPaths {
	pub item_index: PathBuf,
	pub similarity: PathBuf,
	pub catalog: PathBuf,
	pub popular: PathBuf,
}

// ---------------------------------------------------------------------------
// Gzip
// ---------------------------------------------------------------------------

/// Gunzip-decompress a byte slice.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, FolioError> {
	let mut decoder = GzDecoder::new(data);
	let mut decompressed = Vec::new();
	decoder
		.read_to_end(&mut decompressed)
		.map_err(|e| FolioError::Corruption(format!("Invalid gzip stream: {}", e)))?;
	Ok(decompressed)
}

/// Check if data starts with gzip magic bytes (0x1f, 0x8b).
pub fn is_gzipped(data: &[u8]) -> bool {
	data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read an artifact, decompressing if needed, and parse it as JSON.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FolioError> {
	if !path.exists() {
		return Err(FolioError::MissingArtifact(path.display().to_string()));
	}
	let raw_bytes = std::fs::read(path)?;
	let json_bytes = if is_gzipped(&raw_bytes) {
		decompress(&raw_bytes)?
	} else {
		raw_bytes
	};

	let json_str = std::str::from_utf8(&json_bytes).map_err(|e| {
		FolioError::Corruption(format!("Invalid UTF-8 in {}: {}", path.display(), e))
	})?;
	serde_json::from_str(json_str)
		.map_err(|e| FolioError::Serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Load and cross-validate every artifact.
pub fn load_library(paths: &ArtifactPaths) -> Result<Library, FolioError> {
	let titles: Vec<String> = read_json(&paths.item_index)?;
	let rows: Vec<Vec<f64>> = read_json(&paths.similarity)?;
	let records: Vec<ItemRecord> = read_json(&paths.catalog)?;
	let popular: Vec<PopularityRecord> = read_json(&paths.popular)?;

	let matrix = SimilarityMatrix::from_rows(rows)?;
	let library = Library::new(
		ItemIndex::new(titles),
		matrix,
		Catalog::new(records, popular),
	)?;

	tracing::info!(
		items = library.index().len(),
		catalog_rows = library.catalog().items().len(),
		distinct_titles = library.catalog().distinct_titles(),
		popular = library.catalog().popular().len(),
		"Artifacts loaded"
	);
	Ok(library)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
