use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Position of a title in the item index. Doubles as the row/column of the
/// similarity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemHandle(pub usize);

impl ItemHandle {
	pub fn index(self) -> usize {
		self.0
	}
}

// ---------------------------------------------------------------------------
// Artifact rows
// ---------------------------------------------------------------------------

/// One row of the catalog-metadata artifact, keyed by the dataset's column names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
	#[serde(rename = "Book-Title", alias = "title")]
	pub title: String,
	#[serde(rename = "Book-Author", alias = "author", default)]
	pub author: Option<String>,
	#[serde(rename = "Image-URL-M", default)]
	pub image_url_m: Option<String>,
	#[serde(rename = "Image-URL-L", default)]
	pub image_url_l: Option<String>,
	#[serde(rename = "Image-URL-S", default)]
	pub image_url_s: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub img: Option<String>,
	#[serde(default)]
	pub cover: Option<String>,
}

/// One row of the popularity artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularityRecord {
	#[serde(flatten)]
	pub item: ItemRecord,
	#[serde(default, deserialize_with = "deserialize_count")]
	pub num_ratings: u64,
	#[serde(default, deserialize_with = "deserialize_rating")]
	pub avg_rating: f64,
}

/// Rating counts arrive as integers or, from dataframe exports, as
/// whole-number floats (`412.0`). `null` reads as zero.
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Count {
		Int(u64),
		Float(f64),
	}

	match Option::<Count>::deserialize(deserializer)? {
		None => Ok(0),
		Some(Count::Int(n)) => Ok(n),
		Some(Count::Float(f))
			if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 =>
		{
			Ok(f as u64)
		}
		Some(Count::Float(f)) => Err(serde::de::Error::custom(format!(
			"invalid rating count {}: expected a non-negative whole number",
			f
		))),
	}
}

fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
	Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

// ---------------------------------------------------------------------------
// Catalog entities
// ---------------------------------------------------------------------------

/// Image-bearing field of a catalog row, listed in lookup priority order by
/// [`crate::catalog::IMAGE_FIELDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageField {
	Medium,
	Large,
	Small,
	Image,
	Img,
	Cover,
}

/// A catalog entry as held in memory after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub title: String,
	pub author: Option<String>,
	/// Present image values, already in lookup priority order.
	pub images: Vec<(ImageField, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularBook {
	pub item: Item,
	pub num_ratings: u64,
	pub avg_rating: f64,
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
	pub handle: ItemHandle,
	pub score: f64,
}

/// A display-ready recommendation. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
	pub title: String,
	pub author: String,
	pub image: String,
}

/// Popularity listing entry with its image already normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityEntry {
	pub title: String,
	pub author: String,
	pub image: String,
	#[serde(rename = "numRatings")]
	pub num_ratings: u64,
	#[serde(rename = "avgRating")]
	pub avg_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
	Exact,
	CaseInsensitive,
	Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
	pub handle: ItemHandle,
	pub tier: MatchTier,
}
