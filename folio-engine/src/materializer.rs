// ---------------------------------------------------------------------------
// Result materializer — ranked handles to display records
// ---------------------------------------------------------------------------

use crate::catalog::{Catalog, ItemIndex};
use crate::types::{DisplayRecord, Item, ItemHandle};
use crate::url::normalize_or;

pub const UNKNOWN_TITLE: &str = "Unknown title";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Expand ranked handles into display records, preserving order.
///
/// Each handle maps to its canonical title, then to the first catalog row
/// carrying that title. Missing rows and fields are filled with sentinels;
/// a missing or unusable image becomes `placeholder`.
pub fn materialize(
	index: &ItemIndex,
	catalog: &Catalog,
	ranked: &[ItemHandle],
	placeholder: &str,
) -> Vec<DisplayRecord> {
	ranked
		.iter()
		.map(|&handle| {
			let item = index.title(handle).and_then(|t| catalog.lookup(t));
			if item.is_none() {
				tracing::debug!(handle = handle.index(), "No catalog metadata for ranked item");
			}
			display_record(item, placeholder)
		})
		.collect()
}

fn display_record(item: Option<&Item>, placeholder: &str) -> DisplayRecord {
	let Some(item) = item else {
		return DisplayRecord {
			title: UNKNOWN_TITLE.to_string(),
			author: UNKNOWN_AUTHOR.to_string(),
			image: placeholder.to_string(),
		};
	};
	let author = item
		.author
		.as_deref()
		.map(str::trim)
		.filter(|a| !a.is_empty())
		.unwrap_or(UNKNOWN_AUTHOR);
	DisplayRecord {
		title: item.title.clone(),
		author: author.to_string(),
		image: normalize_or(item.first_image(), placeholder),
	}
}
