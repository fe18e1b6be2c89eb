mod config;
mod error;
mod quantity;
mod rpc_client;
mod types;

pub use config::RpcClientConfig;
pub use error::{Error, Result};
pub use quantity::decode_quantity;
pub use rpc_client::{build_http_client, RpcClient};
pub use types::{JsonRpcRequest, RpcErrorObject, RpcRequest, RpcResponse, REQUEST_ID};
