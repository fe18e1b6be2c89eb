use reqwest::StatusCode;
use std::result::Result as StdResult;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to encode rpc request:\n{0}")]
    EncodeRequest(serde_json::Error),
    #[error("Failed to execute http request:\n{0}")]
    HttpRequest(reqwest::Error),
    #[error("server returned non-OK status: {0}")]
    HttpStatus(StatusCode),
    #[error("Failed to read http response body:\n{0}")]
    ReadResponseBody(reqwest::Error),
    #[error("Invalid RPC response.\n{0}")]
    InvalidRpcResponse(serde_json::Error),
    #[error("RPC response has no result.")]
    MissingResult,
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("failed to convert hex to decimal: {0:?}")]
    InvalidQuantity(String),
}

pub type Result<T> = StdResult<T, Error>;
