// ---------------------------------------------------------------------------
// NDJSON transport — one JSON-RPC response per line
// ---------------------------------------------------------------------------

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crate::protocol::{JsonRpcErrorBody, JsonRpcResponse};

/// Writes newline-delimited JSON-RPC responses. Stdout by default; any
/// `Write` sink can be used instead.
pub struct NdjsonTransport<W: Write = Stdout> {
	out: Mutex<W>,
}

impl Default for NdjsonTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl NdjsonTransport {
	pub fn new() -> Self {
		Self::with_writer(io::stdout())
	}
}

impl<W: Write> NdjsonTransport<W> {
	pub fn with_writer(out: W) -> Self {
		Self {
			out: Mutex::new(out),
		}
	}

	pub fn into_inner(self) -> W {
		match self.out.into_inner() {
			Ok(w) => w,
			Err(poisoned) => poisoned.into_inner(),
		}
	}

	pub fn write_response(&self, id: &serde_json::Value, result: serde_json::Value) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: Some(result),
			error: None,
		});
	}

	pub fn write_error(
		&self,
		id: &serde_json::Value,
		code: i32,
		message: impl Into<String>,
		data: Option<serde_json::Value>,
	) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: None,
			error: Some(JsonRpcErrorBody {
				code,
				message: message.into(),
				data,
			}),
		});
	}

	fn write_line(&self, response: &JsonRpcResponse<'_>) {
		let line = match serde_json::to_string(response) {
			Ok(l) => l,
			Err(e) => {
				tracing::error!("Failed to serialize: {}", e);
				return;
			}
		};
		let mut out = match self.out.lock() {
			Ok(guard) => guard,
			Err(poisoned) => poisoned.into_inner(),
		};
		if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
			tracing::error!("Failed to write response: {}", e);
		}
	}
}
