use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 error codes
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const FOLIO_ERROR: i32 = -32000;

/// An incoming call. `id` may be a number or a string and is echoed back
/// verbatim.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
	#[serde(default)]
	pub id: serde_json::Value,
	pub method: String,
	#[serde(default)]
	pub params: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse<'a> {
	pub jsonrpc: &'static str,
	pub id: &'a serde_json::Value,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<JsonRpcErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcErrorBody {
	pub code: i32,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_string_and_numeric_ids() {
		let req: JsonRpcRequest =
			serde_json::from_str(r#"{"jsonrpc":"2.0","id":"req-1","method":"catalog/size"}"#)
				.unwrap();
		assert_eq!(req.id, serde_json::json!("req-1"));

		let req: JsonRpcRequest =
			serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"catalog/size"}"#).unwrap();
		assert_eq!(req.id, serde_json::json!(7));
		assert!(req.params.is_null());
	}

	#[test]
	fn response_omits_absent_members() {
		let id = serde_json::json!("req-1");
		let line = serde_json::to_string(&JsonRpcResponse {
			jsonrpc: "2.0",
			id: &id,
			result: Some(serde_json::json!({ "count": 2 })),
			error: None,
		})
		.unwrap();
		assert_eq!(line, r#"{"jsonrpc":"2.0","id":"req-1","result":{"count":2}}"#);
	}
}
