// ---------------------------------------------------------------------------
// Title resolver — tiered matching of free text onto the item index
// ---------------------------------------------------------------------------
//
// Tiers, first hit wins:
//   1. exact byte-for-byte title
//   2. case-insensitive equality
//   3. case-insensitive substring containment
// Within a tier the lowest index wins. Plain sequential scans.
// ---------------------------------------------------------------------------

use crate::catalog::ItemIndex;
use crate::types::{ItemHandle, MatchTier, Resolution};

/// Resolve `query` to a handle, ignoring which tier matched.
pub fn resolve(index: &ItemIndex, query: &str) -> Option<ItemHandle> {
	resolve_with_tier(index, query).map(|r| r.handle)
}

/// Resolve `query` and report the tier that produced the match.
///
/// Returns `None` for blank input or when no tier matches. Absence is the
/// common case for user input and is never an error.
pub fn resolve_with_tier(index: &ItemIndex, query: &str) -> Option<Resolution> {
	let query = query.trim();
	if query.is_empty() {
		return None;
	}

	if let Some(i) = index.titles().iter().position(|t| t == query) {
		return Some(found(i, MatchTier::Exact));
	}

	let lowered = query.to_lowercase();
	if let Some(i) = index.lowered().iter().position(|t| *t == lowered) {
		return Some(found(i, MatchTier::CaseInsensitive));
	}

	if let Some(i) = index.lowered().iter().position(|t| t.contains(&lowered)) {
		return Some(found(i, MatchTier::Substring));
	}

	None
}

fn found(i: usize, tier: MatchTier) -> Resolution {
	Resolution {
		handle: ItemHandle(i),
		tier,
	}
}
