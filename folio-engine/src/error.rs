use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Missing artifact: {0}")]
	MissingArtifact(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("Artifact corruption: {0}")]
	Corruption(String),
	#[error("Dimension mismatch: item index has {items} titles but similarity matrix has {rows} rows")]
	DimensionMismatch { items: usize, rows: usize },
	#[error("Similarity matrix is not square: row {row} has {found} columns, expected {expected}")]
	NotSquare {
		row: usize,
		expected: usize,
		found: usize,
	},
	#[error("Similarity matrix holds a non-finite score at ({row}, {col})")]
	NonFiniteScore { row: usize, col: usize },
	#[error("Invalid params: {0}")]
	InvalidParams(String),
}

impl FolioError {
	pub fn code(&self) -> &str {
		match self {
			Self::Io(_) => "FOLIO_IO",
			Self::MissingArtifact(_) => "FOLIO_MISSING_ARTIFACT",
			Self::Serialization(_) => "FOLIO_SERIALIZATION",
			Self::Corruption(_) => "FOLIO_CORRUPT",
			Self::DimensionMismatch { .. } => "FOLIO_DIMENSION_MISMATCH",
			Self::NotSquare { .. } => "FOLIO_NOT_SQUARE",
			Self::NonFiniteScore { .. } => "FOLIO_NON_FINITE",
			Self::InvalidParams(_) => "FOLIO_INVALID_PARAMS",
		}
	}

	pub fn to_json_rpc_error(&self) -> serde_json::Value {
		serde_json::json!({
			"folioCode": self.code(),
			"message": self.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dimension_mismatch_message_names_both_sizes() {
		let err = FolioError::DimensionMismatch { items: 3, rows: 2 };
		let msg = err.to_string();
		assert!(msg.contains('3'));
		assert!(msg.contains('2'));
		assert_eq!(err.code(), "FOLIO_DIMENSION_MISMATCH");
	}

	#[test]
	fn json_rpc_payload_carries_code_and_message() {
		let err = FolioError::InvalidParams("missing query".into());
		let payload = err.to_json_rpc_error();
		assert_eq!(payload["folioCode"], "FOLIO_INVALID_PARAMS");
		assert_eq!(payload["message"], "Invalid params: missing query");
	}
}
