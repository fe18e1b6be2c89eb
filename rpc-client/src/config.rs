use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcClientConfig {
    /// JSON-RPC endpoint of the node
    pub url: Url,
    /// Timeout for a whole http request, including reading the body.
    ///
    /// No timeout is applied if this is not set.
    pub http_req_timeout_millis: Option<NonZeroU64>,
}
