//! Stdio tool server: a synchronous, request-per-line JSON-RPC 2.0 loop
//! exposing the analysis operations to external callers.
//!
//! Stdout is the protocol channel; diagnostics go to stderr only.

mod protocol;
mod tools;

pub use protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallResult, ToolContent, ToolDefinition,
};
pub use tools::{ANALYZE_TOOL, BEST_PRACTICES_TOOL};

use std::io::{BufRead, Write};

use serde_json::{Value, json};

use crate::error::Result;
use protocol::{INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION};

pub struct ToolServer {
    verbose: bool,
}

impl ToolServer {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Serves requests from stdin until EOF.
    ///
    /// # Errors
    /// Returns an error only for I/O failures on the transport itself;
    /// request-level problems become JSON-RPC error responses.
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with_io(stdin.lock(), stdout.lock())
    }

    /// Serves requests from an arbitrary reader/writer pair.
    ///
    /// # Errors
    /// Returns an error for I/O failures on `reader` or `writer`.
    pub fn run_with_io<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line) {
                serde_json::to_writer(&mut writer, &response)?;
                writeln!(writer)?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Handles one request line. Returns `None` for notifications.
    fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::new(PARSE_ERROR, format!("Invalid request: {err}")),
                ));
            }
        };

        if self.verbose {
            eprintln!("icecast-guard serve: {} request", request.method);
        }

        let id = request.id?;
        Some(Self::dispatch(id, &request.method, request.params.as_ref()))
    }

    fn dispatch(id: Value, method: &str, params: Option<&Value>) -> JsonRpcResponse {
        match method {
            "initialize" => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            ),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": tools::definitions() }),
            ),
            "tools/call" => Self::dispatch_tool_call(id, params),
            other => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(METHOD_NOT_FOUND, format!("Unknown method: {other}")),
            ),
        }
    }

    fn dispatch_tool_call(id: Value, params: Option<&Value>) -> JsonRpcResponse {
        let Some(name) = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
        else {
            return JsonRpcResponse::failure(
                id,
                JsonRpcError::new(INVALID_REQUEST, "tools/call requires a tool name"),
            );
        };

        let empty_args = json!({});
        let arguments = params
            .and_then(|p| p.get("arguments"))
            .unwrap_or(&empty_args);

        let result = tools::call(name, arguments);
        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(err) => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(INVALID_REQUEST, format!("Unserializable result: {err}")),
            ),
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
