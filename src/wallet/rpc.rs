//! JSON-RPC wallet provider (EIP-1193 methods over HTTP)

use super::{WalletError, WalletProvider, USER_REJECTED_CODE};
use crate::settings::Settings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    #[serde(default)]
    message: String,
}

/// Wallet provider reached through a local JSON-RPC endpoint
pub struct JsonRpcProvider {
    endpoint: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl JsonRpcProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { endpoint: endpoint.into(), client, next_id: AtomicU64::new(1) }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, WalletError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params });
        debug!(endpoint = %self.endpoint, method, id, "Sending wallet request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(WalletError::TransientFailure(format!("HTTP {}", response.status())));
        }

        let parsed: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| WalletError::TransientFailure(format!("invalid response: {}", e)))?;

        match (parsed.result, parsed.error) {
            (_, Some(err)) if err.code == USER_REJECTED_CODE => Err(WalletError::UserRejected),
            (_, Some(err)) => Err(WalletError::TransientFailure(format!(
                "rpc error {}: {}",
                err.code, err.message
            ))),
            (Some(result), None) => Ok(result),
            (None, None) => Err(WalletError::TransientFailure("empty response".into())),
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> WalletError {
    if e.is_connect() {
        WalletError::ProviderUnavailable
    } else if e.is_builder() {
        warn!(error = %e, "Wallet provider endpoint is not a valid URL");
        WalletError::ProviderUnavailable
    } else {
        WalletError::TransientFailure(e.to_string())
    }
}

/// Parse a `0x`-prefixed hex quantity
fn parse_quantity(raw: &str) -> Result<u128, WalletError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| WalletError::TransientFailure(format!("not a hex quantity: {}", raw)))?;
    if digits.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| WalletError::TransientFailure(format!("bad quantity {}: {}", raw, e)))
}

#[async_trait]
impl WalletProvider for JsonRpcProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.call("eth_requestAccounts", json!([])).await
    }

    async fn get_balance(&self, address: &str) -> Result<u128, WalletError> {
        let raw: String = self.call("eth_getBalance", json!([address, "latest"])).await?;
        parse_quantity(&raw)
    }
}

/// Build the provider configured in settings. `None` when no endpoint is set.
pub fn provider_from_settings(settings: &Settings) -> Option<Arc<dyn WalletProvider>> {
    let endpoint = settings.provider_url()?;
    debug!(endpoint = %endpoint, "Wallet provider configured");
    Some(Arc::new(JsonRpcProvider::new(endpoint)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn quantities() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x").unwrap(), 0);
        assert_eq!(parse_quantity("0x1bc16d674ec80000").unwrap(), 2_000_000_000_000_000_000);
        assert!(parse_quantity("1234").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[tokio::test]
    async fn request_accounts_and_balance() {
        let mut server = mockito::Server::new_async().await;
        let accounts = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_requestAccounts",
                "params": []
            })))
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":["0xabc0000000000000000000000000000000001234"]}"#)
            .create_async()
            .await;
        let balance = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "id": 2,
                "method": "eth_getBalance",
                "params": ["0xabc0000000000000000000000000000000001234", "latest"]
            })))
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":2,"result":"0x112209c76de80000"}"#)
            .create_async()
            .await;

        let provider = JsonRpcProvider::new(server.url());
        let list = provider.request_accounts().await.unwrap();
        assert_eq!(list, vec!["0xabc0000000000000000000000000000000001234".to_string()]);
        let wei = provider.get_balance(&list[0]).await.unwrap();
        assert_eq!(wei, 1_234_560_000_000_000_000);

        accounts.assert_async().await;
        balance.assert_async().await;
    }

    #[tokio::test]
    async fn user_rejection_code_maps_to_user_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#)
            .create_async()
            .await;

        let provider = JsonRpcProvider::new(server.url());
        assert_eq!(provider.request_accounts().await, Err(WalletError::UserRejected));
    }

    #[tokio::test]
    async fn other_rpc_errors_are_transient() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32603,"message":"internal"}}"#)
            .create_async()
            .await;

        let provider = JsonRpcProvider::new(server.url());
        assert_eq!(
            provider.request_accounts().await,
            Err(WalletError::TransientFailure("rpc error -32603: internal".into()))
        );
    }

    #[tokio::test]
    async fn http_failure_is_transient() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/").with_status(502).create_async().await;

        let provider = JsonRpcProvider::new(server.url());
        assert!(matches!(
            provider.request_accounts().await,
            Err(WalletError::TransientFailure(msg)) if msg.starts_with("HTTP 502")
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let provider = JsonRpcProvider::new("http://127.0.0.1:1");
        assert_eq!(provider.request_accounts().await, Err(WalletError::ProviderUnavailable));
    }

    #[tokio::test]
    async fn endpoint_without_scheme_is_unavailable() {
        let provider = JsonRpcProvider::new("127.0.0.1:1248");
        assert_eq!(provider.request_accounts().await, Err(WalletError::ProviderUnavailable));
    }

    #[test]
    fn settings_without_endpoint_yield_no_provider() {
        let settings = Settings { provider_url: Some("   ".into()), ..Settings::default() };
        assert!(provider_from_settings(&settings).is_none());
    }
}
