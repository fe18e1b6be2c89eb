use serde::{Deserialize, Serialize};

/// Id sent with every request. Requests are never in flight concurrently so
/// it does not need to change between calls.
pub const REQUEST_ID: u64 = 67;

const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcRequest {
    NetPeerCount,
}

impl RpcRequest {
    pub fn method(&self) -> &'static str {
        match self {
            Self::NetPeerCount => "net_peerCount",
        }
    }

    pub fn to_json(&self, id: u64) -> JsonRpcRequest {
        match self {
            Self::NetPeerCount => JsonRpcRequest {
                jsonrpc: JSONRPC_VERSION,
                method: self.method(),
                params: Vec::new(),
                id,
            },
        }
    }
}

/// Wire form of a single request. Field order is kept as
/// `jsonrpc, method, params, id`.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: Option<String>,
    pub id: Option<serde_json::Value>,
    pub result: Option<String>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}
