// ---------------------------------------------------------------------------
// Catalog store — item index, metadata rows, popularity listing
// ---------------------------------------------------------------------------
//
// Immutable in-memory tables built once from the loaded artifacts. The item
// index is the canonical handle space; the metadata table may repeat titles
// and is collapsed to its first occurrence per title.
// ---------------------------------------------------------------------------

use std::collections::HashMap;
use std::collections::HashSet;

use crate::types::{ImageField, Item, ItemHandle, ItemRecord, PopularBook, PopularityRecord};

// ---------------------------------------------------------------------------
// Image field priority
// ---------------------------------------------------------------------------

/// Image fields in priority order.
pub const IMAGE_FIELDS: [ImageField; 6] = [
	ImageField::Medium,
	ImageField::Large,
	ImageField::Small,
	ImageField::Image,
	ImageField::Img,
	ImageField::Cover,
];

impl ImageField {
	fn read(self, record: &ItemRecord) -> Option<&str> {
		let value = match self {
			Self::Medium => &record.image_url_m,
			Self::Large => &record.image_url_l,
			Self::Small => &record.image_url_s,
			Self::Image => &record.image,
			Self::Img => &record.img,
			Self::Cover => &record.cover,
		};
		value.as_deref()
	}
}

impl Item {
	pub fn from_record(record: ItemRecord) -> Self {
		let images = IMAGE_FIELDS
			.iter()
			.filter_map(|&field| field.read(&record).map(|v| (field, v.to_string())))
			.collect();
		Self {
			title: record.title,
			author: record.author,
			images,
		}
	}

	/// Value of one image field, if present.
	pub fn image(&self, field: ImageField) -> Option<&str> {
		self.images
			.iter()
			.find(|(f, _)| *f == field)
			.map(|(_, v)| v.as_str())
	}

	/// First image value that is not blank, in priority order.
	pub fn first_image(&self) -> Option<&str> {
		self.images
			.iter()
			.map(|(_, v)| v.as_str())
			.find(|v| !v.trim().is_empty())
	}
}

// ---------------------------------------------------------------------------
// ItemIndex
// ---------------------------------------------------------------------------

/// Ordered titles, one per similarity-matrix row. Order is preserved exactly
/// as loaded.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
	titles: Vec<String>,
	lowered: Vec<String>,
}

impl ItemIndex {
	pub fn new(titles: Vec<String>) -> Self {
		let mut seen = HashSet::new();
		for (i, title) in titles.iter().enumerate() {
			if !seen.insert(title.as_str()) {
				tracing::warn!(index = i, title = %title, "Duplicate title in item index");
			}
		}
		let lowered = titles.iter().map(|t| t.to_lowercase()).collect();
		Self { titles, lowered }
	}

	pub fn len(&self) -> usize {
		self.titles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.titles.is_empty()
	}

	pub fn title(&self, handle: ItemHandle) -> Option<&str> {
		self.titles.get(handle.index()).map(String::as_str)
	}

	pub fn titles(&self) -> &[String] {
		&self.titles
	}

	/// Lower-cased titles, aligned with [`ItemIndex::titles`].
	pub fn lowered(&self) -> &[String] {
		&self.lowered
	}
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Catalog {
	items: Vec<Item>,
	first_by_title: HashMap<String, usize>,
	popular: Vec<PopularBook>,
}

impl Catalog {
	pub fn new(records: Vec<ItemRecord>, popular: Vec<PopularityRecord>) -> Self {
		let items: Vec<Item> = records.into_iter().map(Item::from_record).collect();
		let mut first_by_title = HashMap::with_capacity(items.len());
		for (i, item) in items.iter().enumerate() {
			first_by_title.entry(item.title.clone()).or_insert(i);
		}
		let popular = popular
			.into_iter()
			.map(|p| PopularBook {
				item: Item::from_record(p.item),
				num_ratings: p.num_ratings,
				avg_rating: p.avg_rating,
			})
			.collect();
		Self {
			items,
			first_by_title,
			popular,
		}
	}

	/// Representative row for `title`: the first one loaded.
	pub fn lookup(&self, title: &str) -> Option<&Item> {
		self.first_by_title.get(title).map(|&i| &self.items[i])
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	/// Number of distinct titles in the metadata table.
	pub fn distinct_titles(&self) -> usize {
		self.first_by_title.len()
	}

	pub fn popular(&self) -> &[PopularBook] {
		&self.popular
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(title: &str, author: &str) -> ItemRecord {
		ItemRecord {
			title: title.into(),
			author: Some(author.into()),
			..Default::default()
		}
	}

	#[test]
	fn images_follow_field_priority() {
		let item = Item::from_record(ItemRecord {
			title: "Dune".into(),
			image_url_s: Some("s.jpg".into()),
			cover: Some("cover.jpg".into()),
			image_url_l: Some("l.jpg".into()),
			..Default::default()
		});
		let fields: Vec<ImageField> = item.images.iter().map(|(f, _)| *f).collect();
		assert_eq!(
			fields,
			vec![ImageField::Large, ImageField::Small, ImageField::Cover]
		);
		assert_eq!(item.first_image(), Some("l.jpg"));
	}

	#[test]
	fn blank_images_are_skipped() {
		let item = Item::from_record(ItemRecord {
			title: "Dune".into(),
			image_url_m: Some("  ".into()),
			img: Some("img.jpg".into()),
			..Default::default()
		});
		assert_eq!(item.first_image(), Some("img.jpg"));
	}

	#[test]
	fn no_images_yields_none() {
		let item = Item::from_record(record("Dune", "Herbert"));
		assert_eq!(item.first_image(), None);
	}

	#[test]
	fn lookup_returns_first_loaded_row() {
		let catalog = Catalog::new(
			vec![
				record("Dune", "Frank Herbert"),
				record("Emma", "Jane Austen"),
				record("Dune", "Someone Else"),
			],
			vec![],
		);
		assert_eq!(catalog.items().len(), 3);
		assert_eq!(catalog.distinct_titles(), 2);
		let dune = catalog.lookup("Dune").unwrap();
		assert_eq!(dune.author.as_deref(), Some("Frank Herbert"));
		assert!(catalog.lookup("dune").is_none());
	}

	#[test]
	fn item_index_keeps_order_and_lowered_shadow() {
		let index = ItemIndex::new(vec!["The Hobbit".into(), "DUNE".into()]);
		assert_eq!(index.len(), 2);
		assert_eq!(index.title(ItemHandle(1)), Some("DUNE"));
		assert_eq!(index.lowered()[0], "the hobbit");
		assert_eq!(index.title(ItemHandle(2)), None);
	}

	#[test]
	fn image_reads_a_single_field() {
		let item = Item::from_record(ItemRecord {
			title: "Dune".into(),
			image_url_l: Some("l.jpg".into()),
			..Default::default()
		});
		assert_eq!(item.image(ImageField::Medium), None);
		assert_eq!(item.image(ImageField::Large), Some("l.jpg"));
	}
}
