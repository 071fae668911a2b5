// ---------------------------------------------------------------------------
// FolioServer — JSON-RPC dispatcher
// ---------------------------------------------------------------------------
//
// Routes JSON-RPC 2.0 requests (NDJSON over stdin) to a `Recommender`. The
// recommender is immutable, so every handler takes `&self`.
// ---------------------------------------------------------------------------

use std::io::{self, BufRead, Stdout, Write};

use serde::Deserialize;

use crate::engine::Recommender;
use crate::error::FolioError;
use crate::protocol::*;
use crate::transport::NdjsonTransport;

pub struct FolioServer<W: Write = Stdout> {
	transport: NdjsonTransport<W>,
	recommender: Recommender,
}

impl FolioServer {
	/// Main loop: read JSON-RPC messages from stdin until EOF.
	pub fn run(&self) -> Result<(), FolioError> {
		let stdin = io::stdin();
		self.serve(stdin.lock())
	}
}

impl<W: Write> FolioServer<W> {
	pub fn new(transport: NdjsonTransport<W>, recommender: Recommender) -> Self {
		Self {
			transport,
			recommender,
		}
	}

	pub fn into_transport(self) -> NdjsonTransport<W> {
		self.transport
	}

	/// Answer every request line from `reader` until EOF.
	pub fn serve<R: BufRead>(&self, reader: R) -> Result<(), FolioError> {
		for line_result in reader.lines() {
			let line = line_result?;
			if line.trim().is_empty() {
				continue;
			}

			let request: JsonRpcRequest = match serde_json::from_str(&line) {
				Ok(r) => r,
				Err(e) => {
					tracing::error!("Failed to parse request: {}", e);
					continue;
				}
			};

			self.dispatch(request);
		}

		Ok(())
	}

	// ── Dispatch ──────────────────────────────────────────────────────────

	fn dispatch(&self, req: JsonRpcRequest) {
		let id = &req.id;
		let Some(result) = self.handle(&req.method, req.params) else {
			self.transport.write_error(
				id,
				METHOD_NOT_FOUND,
				format!("Unknown method: {}", req.method),
				None,
			);
			return;
		};

		match result {
			Ok(value) => self.transport.write_response(id, value),
			Err(e) => {
				let code = match &e {
					FolioError::InvalidParams(_) => INVALID_PARAMS,
					_ => FOLIO_ERROR,
				};
				self.transport
					.write_error(id, code, e.to_string(), Some(e.to_json_rpc_error()))
			}
		}
	}

	/// Run one method. `None` means the method is unknown.
	pub fn handle(
		&self,
		method: &str,
		params: serde_json::Value,
	) -> Option<Result<serde_json::Value, FolioError>> {
		let r = &self.recommender;
		let result = match method {
			"recommend/resolveAndRank" => handle_resolve_and_rank(r, params),
			"catalog/resolve" => handle_resolve(r, params),
			"catalog/popular" => Ok(serde_json::json!({ "books": r.popularity_listing() })),
			"catalog/size" => Ok(serde_json::json!({ "count": r.library().index().len() })),
			_ => return None,
		};
		Some(result)
	}
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_resolve_and_rank(
	r: &Recommender,
	params: serde_json::Value,
) -> Result<serde_json::Value, FolioError> {
	let p: RecommendParams = parse_params(params)?;
	let books = r.resolve_and_rank(&p.query, p.k);
	Ok(serde_json::json!({ "books": books }))
}

fn handle_resolve(r: &Recommender, params: serde_json::Value) -> Result<serde_json::Value, FolioError> {
	let p: QueryParams = parse_params(params)?;
	let found = r.resolve(&p.query).map(|res| {
		serde_json::json!({
			"handle": res.handle,
			"title": r.library().index().title(res.handle),
			"tier": res.tier,
		})
	});
	Ok(serde_json::json!({ "match": found }))
}

// ---------------------------------------------------------------------------
// Param types
// ---------------------------------------------------------------------------

fn parse_params<T: serde::de::DeserializeOwned>(params: serde_json::Value) -> Result<T, FolioError> {
	serde_json::from_value(params).map_err(|e| FolioError::InvalidParams(e.to_string()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendParams {
	query: String,
	k: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams {
	query: String,
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use serde_json::json;

	use super::*;
	use crate::catalog::{Catalog, ItemIndex};
	use crate::engine::{Library, RecommenderConfig};
	use crate::matrix::SimilarityMatrix;
	use crate::types::ItemRecord;

	fn recommender() -> Recommender {
		let index = ItemIndex::new(vec!["Harry Potter".into(), "The Hobbit".into(), "Dune".into()]);
		let matrix = SimilarityMatrix::from_rows(vec![
			vec![1.0, 0.2, 0.9],
			vec![0.2, 1.0, 0.4],
			vec![0.9, 0.4, 1.0],
		])
		.unwrap();
		let catalog = Catalog::new(
			vec![ItemRecord {
				title: "Dune".into(),
				author: Some("Frank Herbert".into()),
				..Default::default()
			}],
			vec![],
		);
		let library = Library::new(index, matrix, catalog).unwrap();
		Recommender::new(Arc::new(library), RecommenderConfig::default())
	}

	fn server() -> FolioServer {
		FolioServer::new(NdjsonTransport::new(), recommender())
	}

	/// Feed `input` through a server writing to memory; one JSON value per
	/// response line.
	fn serve_lines(input: &str) -> Vec<serde_json::Value> {
		let s = FolioServer::new(NdjsonTransport::with_writer(Vec::new()), recommender());
		s.serve(input.as_bytes()).unwrap();
		let out = String::from_utf8(s.into_transport().into_inner()).unwrap();
		out.lines()
			.map(|l| serde_json::from_str(l).unwrap())
			.collect()
	}

	#[test]
	fn resolve_and_rank_returns_books() {
		let s = server();
		let v = s
			.handle("recommend/resolveAndRank", json!({ "query": "Harry Potter", "k": 1 }))
			.unwrap()
			.unwrap();
		assert_eq!(v["books"][0]["title"], "Dune");
		assert_eq!(v["books"][0]["author"], "Frank Herbert");
		assert_eq!(v["books"].as_array().unwrap().len(), 1);
	}

	#[test]
	fn resolve_reports_tier() {
		let s = server();
		let v = s
			.handle("catalog/resolve", json!({ "query": "hobbit" }))
			.unwrap()
			.unwrap();
		assert_eq!(v["match"]["handle"], 1);
		assert_eq!(v["match"]["title"], "The Hobbit");
		assert_eq!(v["match"]["tier"], "substring");
	}

	#[test]
	fn resolve_miss_is_null() {
		let s = server();
		let v = s
			.handle("catalog/resolve", json!({ "query": "Moby Dick" }))
			.unwrap()
			.unwrap();
		assert!(v["match"].is_null());
	}

	#[test]
	fn missing_query_is_invalid_params() {
		let s = server();
		let err = s.handle("recommend/resolveAndRank", json!({})).unwrap().unwrap_err();
		assert!(matches!(err, FolioError::InvalidParams(_)));
	}

	#[test]
	fn unknown_method_is_none() {
		let s = server();
		assert!(s.handle("contact/submit", json!({})).is_none());
	}

	#[test]
	fn size_reports_item_count() {
		let s = server();
		let v = s.handle("catalog/size", json!(null)).unwrap().unwrap();
		assert_eq!(v["count"], 3);
	}

	#[test]
	fn string_ids_are_echoed_back() {
		let responses = serve_lines(concat!(
			r#"{"jsonrpc":"2.0","id":"req-1","method":"catalog/size"}"#,
			"\n",
			r#"{"jsonrpc":"2.0","id":2,"method":"catalog/size"}"#,
			"\n",
		));
		assert_eq!(responses.len(), 2);
		assert_eq!(responses[0]["id"], "req-1");
		assert_eq!(responses[0]["result"]["count"], 3);
		assert_eq!(responses[1]["id"], 2);
	}

	#[test]
	fn errors_echo_string_ids() {
		let responses = serve_lines(concat!(
			r#"{"jsonrpc":"2.0","id":"bad","method":"contact/submit"}"#,
			"\n",
		));
		assert_eq!(responses[0]["id"], "bad");
		assert_eq!(responses[0]["error"]["code"], METHOD_NOT_FOUND);
	}

	#[test]
	fn blank_and_malformed_lines_get_no_response() {
		let responses = serve_lines(concat!(
			"\n",
			"not json\n",
			r#"{"jsonrpc":"2.0","id":9,"method":"catalog/size"}"#,
			"\n",
		));
		assert_eq!(responses.len(), 1);
		assert_eq!(responses[0]["id"], 9);
	}
}
