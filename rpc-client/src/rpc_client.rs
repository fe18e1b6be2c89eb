use crate::{decode_quantity, Error, Result, RpcClientConfig, RpcRequest, RpcResponse, REQUEST_ID};
use num_bigint::BigUint;
use reqwest::{header, Method, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds the http client that is shared by every call for the lifetime of the process.
pub fn build_http_client(config: &RpcClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.http_req_timeout_millis {
        builder = builder.timeout(Duration::from_millis(timeout.get()));
    }

    builder.build().map_err(Error::HttpRequest)
}

#[derive(Debug, Clone)]
pub struct RpcClient {
    url: Url,
    http_client: reqwest::Client,
}

impl RpcClient {
    pub fn new(http_client: reqwest::Client, config: RpcClientConfig) -> Self {
        Self {
            url: config.url,
            http_client,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Queries `net_peerCount` and decodes the hex result.
    pub async fn peer_count(&self) -> Result<BigUint> {
        let result = self.send(RpcRequest::NetPeerCount).await?;

        decode_quantity(&result)
    }

    /// Sends a single request and returns the raw `result` field of the response.
    pub async fn send(&self, req: RpcRequest) -> Result<String> {
        let body = serde_json::to_vec(&req.to_json(REQUEST_ID)).map_err(Error::EncodeRequest)?;

        log::debug!("sending {} to {}", req.method(), self.url);

        let res = self
            .http_client
            .request(Method::POST, self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::HttpRequest)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus(status));
        }

        let bytes = res.bytes().await.map_err(Error::ReadResponseBody)?;

        let resp: RpcResponse =
            serde_json::from_slice(&bytes).map_err(Error::InvalidRpcResponse)?;

        if let Some(err) = resp.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        resp.result.ok_or(Error::MissingResult)
    }
}
