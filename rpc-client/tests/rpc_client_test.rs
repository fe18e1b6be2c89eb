use mockito::{Matcher, Server, ServerGuard};
use num_bigint::BigUint;
use peerwatch_rpc_client::{build_http_client, Error, RpcClient, RpcClientConfig};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

const REQUEST_BODY: &str = r#"{"jsonrpc":"2.0","method":"net_peerCount","params":[],"id":67}"#;

fn client_for(server: &ServerGuard) -> RpcClient {
    let config = RpcClientConfig {
        url: server.url().parse().unwrap(),
        http_req_timeout_millis: Some(5000.try_into().unwrap()),
    };

    RpcClient::new(build_http_client(&config).unwrap(), config)
}

async fn respond_with(server: &mut ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(REQUEST_BODY.to_owned()))
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_valid_response() {
    let mut server = Server::new_async().await;
    let mock = respond_with(&mut server, 200, r#"{"jsonrpc":"2.0","id":67,"result":"0x10"}"#).await;

    let peers = client_for(&server).peer_count().await.unwrap();

    assert_eq!(peers, BigUint::from(16u32));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_ignores_body() {
    let mut server = Server::new_async().await;
    let mock = respond_with(&mut server, 500, r#"{"jsonrpc":"2.0","id":67,"result":"0x10"}"#).await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus(s) if s.as_u16() == 500), "{err}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_request_with_non_json_body() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(&mut server, 400, "Bad request").await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus(s) if s.as_u16() == 400), "{err}");
}

#[tokio::test]
async fn test_non_hex_result() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(&mut server, 200, r#"{"jsonrpc":"2.0","id":67,"result":"not hex"}"#).await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::InvalidQuantity(_)), "{err}");
    assert!(err.to_string().starts_with("failed to convert hex to decimal"));
}

#[tokio::test]
async fn test_result_shorter_than_prefix() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(&mut server, 200, r#"{"jsonrpc":"2.0","id":67,"result":"0"}"#).await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::InvalidQuantity(_)), "{err}");
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(&mut server, 200, "{\"jsonrpc\":").await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::InvalidRpcResponse(_)), "{err}");
}

#[tokio::test]
async fn test_missing_result() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(&mut server, 200, r#"{"jsonrpc":"2.0","id":67}"#).await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(matches!(err, Error::MissingResult), "{err}");
}

#[tokio::test]
async fn test_rpc_error_object() {
    let mut server = Server::new_async().await;
    let _mock = respond_with(
        &mut server,
        200,
        r#"{"jsonrpc":"2.0","id":67,"error":{"code":-32601,"message":"method not found"}}"#,
    )
    .await;

    let err = client_for(&server).peer_count().await.unwrap_err();

    assert!(
        matches!(&err, Error::Rpc { code: -32601, message } if message == "method not found"),
        "{err}"
    );
}

#[tokio::test]
async fn test_connection_refused() {
    let config = RpcClientConfig {
        url: "http://127.0.0.1:1/".parse().unwrap(),
        http_req_timeout_millis: Some(5000.try_into().unwrap()),
    };
    let client = RpcClient::new(build_http_client(&config).unwrap(), config);

    let err = client.peer_count().await.unwrap_err();

    assert!(matches!(err, Error::HttpRequest(_)), "{err}");
}

#[tokio::test]
async fn test_truncated_body() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0; 4096];
        socket.read(&mut buf).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"result\":")
            .await
            .unwrap();
    });

    let config = RpcClientConfig {
        url: format!("http://{addr}/").parse().unwrap(),
        http_req_timeout_millis: Some(5000.try_into().unwrap()),
    };
    let client = RpcClient::new(build_http_client(&config).unwrap(), config);

    let err = client.peer_count().await.unwrap_err();

    assert!(matches!(err, Error::ReadResponseBody(_)), "{err}");
}

#[tokio::test]
async fn test_repeated_calls_yield_same_value() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":67,"result":"0x2a"}"#)
        .expect(3)
        .create_async()
        .await;

    let client = client_for(&server);
    for _ in 0..3 {
        assert_eq!(client.peer_count().await.unwrap(), BigUint::from(42u32));
    }

    mock.assert_async().await;
}
