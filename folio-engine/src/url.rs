// ---------------------------------------------------------------------------
// Image URL normalization
// ---------------------------------------------------------------------------
//
// Pure helpers that upgrade cover image URLs to https so the rendering layer
// never embeds mixed content. No validation, no network access.
// ---------------------------------------------------------------------------

/// Normalize an image URL.
///
/// Trims whitespace, prefixes protocol-relative URLs (`//host/...`) with
/// `https:` and rewrites a leading `http://` to `https://` (first occurrence
/// only). Anything else, including the empty string, is returned trimmed but
/// otherwise unchanged.
pub fn normalize(url: Option<&str>) -> Option<String> {
	let url = url?.trim();
	if url.starts_with("//") {
		return Some(format!("https:{}", url));
	}
	if url.starts_with("http://") {
		return Some(url.replacen("http://", "https://", 1));
	}
	Some(url.to_string())
}

/// Normalize `url`, substituting `placeholder` when nothing usable remains.
pub fn normalize_or(url: Option<&str>, placeholder: &str) -> String {
	match normalize(url) {
		Some(u) if !u.is_empty() => u,
		_ => placeholder.to_string(),
	}
}
