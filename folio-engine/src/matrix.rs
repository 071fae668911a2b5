// ---------------------------------------------------------------------------
// SimilarityMatrix — immutable square score table
// ---------------------------------------------------------------------------
//
// Row-major storage of precomputed item-to-item similarity. Validated once on
// construction; read-only afterwards.
// ---------------------------------------------------------------------------

use crate::error::FolioError;
use crate::types::ItemHandle;

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
	size: usize,
	scores: Vec<f64>,
}

impl SimilarityMatrix {
	/// Build from nested rows. Every row must have exactly `rows.len()`
	/// columns and every score must be finite.
	pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, FolioError> {
		let size = rows.len();
		let mut scores = Vec::with_capacity(size * size);
		for (row, values) in rows.into_iter().enumerate() {
			if values.len() != size {
				return Err(FolioError::NotSquare {
					row,
					expected: size,
					found: values.len(),
				});
			}
			if let Some(col) = values.iter().position(|v| !v.is_finite()) {
				return Err(FolioError::NonFiniteScore { row, col });
			}
			scores.extend(values);
		}
		Ok(Self { size, scores })
	}

	/// Number of rows (and columns).
	pub fn size(&self) -> usize {
		self.size
	}

	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Scores of `handle` against every item, or `None` when out of range.
	pub fn row(&self, handle: ItemHandle) -> Option<&[f64]> {
		let i = handle.index();
		if i >= self.size {
			return None;
		}
		Some(&self.scores[i * self.size..(i + 1) * self.size])
	}
}
