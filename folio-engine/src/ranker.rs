// ---------------------------------------------------------------------------
// Top-K ranker
// ---------------------------------------------------------------------------
//
// Ranks a full matrix row on every call: O(n log n), no caching. Scores are
// validated finite at load, so `partial_cmp` is total here.
// ---------------------------------------------------------------------------

use std::cmp::Ordering;

use crate::matrix::SimilarityMatrix;
use crate::types::{ItemHandle, RankedItem};

/// Default number of recommendations per query.
pub const DEFAULT_TOP_K: usize = 4;

/// The `k` items most similar to `handle`, best first.
///
/// Ordered by descending score, ties broken by ascending index. `handle`
/// itself is never returned, so the result holds `min(k, n - 1)` items. An
/// out-of-range handle yields an empty result.
pub fn top_k(matrix: &SimilarityMatrix, handle: ItemHandle, k: usize) -> Vec<RankedItem> {
	let Some(row) = matrix.row(handle) else {
		return Vec::new();
	};

	let mut ranked: Vec<RankedItem> = row
		.iter()
		.enumerate()
		.map(|(i, &score)| RankedItem {
			handle: ItemHandle(i),
			score,
		})
		.collect();
	// Stable: equal scores keep ascending index order.
	ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

	ranked
		.into_iter()
		.filter(|r| r.handle != handle)
		.take(k)
		.collect()
}
