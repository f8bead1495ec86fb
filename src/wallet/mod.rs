//! Wallet connector - one-shot adapter over an injected wallet provider

mod format;
mod rpc;

pub use format::{format_balance, format_ether, truncate_address};
pub use rpc::provider_from_settings;

use crate::types::WalletInfo;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// EIP-1193 "user rejected the request" error code
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet provider is available")]
    ProviderUnavailable,
    #[error("the wallet user rejected the request")]
    UserRejected,
    #[error("the wallet returned no accounts")]
    NoAccounts,
    #[error("wallet request failed: {0}")]
    TransientFailure(String),
}

/// Account authorisation and balance queries exposed by a wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access. May prompt the user out of band.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Balance of `address` in wei
    async fn get_balance(&self, address: &str) -> Result<u128, WalletError>;
}

pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletConnector {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Request the primary account and its balance, formatted for display.
    ///
    /// No retries and no caching: each call talks to the provider again.
    pub async fn connect(&self) -> Result<WalletInfo, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderUnavailable)?;

        let accounts = provider.request_accounts().await?;
        debug!(count = accounts.len(), "Accounts received");
        let account = accounts.first().ok_or(WalletError::NoAccounts)?;

        let wei = provider.get_balance(account).await?;
        let info = WalletInfo::new(truncate_address(account), format_balance(wei));
        info!(address = %account, balance = %format_ether(wei), "Wallet connected");
        Ok(info)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// One scripted answer to `request_accounts`
    pub struct Scripted {
        pub delay: Duration,
        pub result: Result<Vec<String>, WalletError>,
        pub wei: u128,
    }

    /// Provider that replays scripted answers in call order.
    #[derive(Default)]
    pub struct ScriptedProvider {
        script: Mutex<VecDeque<Scripted>>,
        balances: Mutex<Vec<(String, u128)>>,
        pub account_calls: AtomicUsize,
        pub balance_calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub fn new(script: Vec<Scripted>) -> Self {
            Self { script: Mutex::new(script.into()), ..Default::default() }
        }

        pub fn ok(address: &str, wei: u128) -> Self {
            Self::new(vec![Scripted {
                delay: Duration::ZERO,
                result: Ok(vec![address.to_string()]),
                wei,
            }])
        }

        pub fn failing(err: WalletError) -> Self {
            Self::new(vec![Scripted { delay: Duration::ZERO, result: Err(err), wei: 0 }])
        }

        pub fn calls(&self) -> usize {
            self.account_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WalletProvider for ScriptedProvider {
        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            self.account_calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop_front();
            let Some(step) = next else {
                return Err(WalletError::TransientFailure("script exhausted".into()));
            };
            tokio::time::sleep(step.delay).await;
            if let Ok(accounts) = &step.result {
                if let Some(first) = accounts.first() {
                    self.balances.lock().unwrap().push((first.clone(), step.wei));
                }
            }
            step.result
        }

        async fn get_balance(&self, address: &str) -> Result<u128, WalletError> {
            self.balance_calls.fetch_add(1, Ordering::SeqCst);
            self.balances
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(a, _)| a == address)
                .map(|(_, wei)| *wei)
                .ok_or_else(|| WalletError::TransientFailure("unknown address".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use std::sync::atomic::Ordering;

    const ADDRESS: &str = "0xABCDEF0123456789abcdef0123456789ABCD1234";

    #[tokio::test]
    async fn connect_formats_address_and_balance() {
        let provider = Arc::new(ScriptedProvider::ok(ADDRESS, 1_234_560_000_000_000_000));
        let connector = WalletConnector::new(Some(provider.clone()));

        let info = connector.connect().await.unwrap();
        assert_eq!(info.address(), Some("0xABCD...1234"));
        assert_eq!(info.balance(), Some("1.234"));
        assert_eq!(provider.balance_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_provider_is_unavailable() {
        let connector = WalletConnector::new(None);
        assert!(!connector.has_provider());
        assert_eq!(connector.connect().await, Err(WalletError::ProviderUnavailable));
    }

    #[tokio::test]
    async fn rejection_skips_balance_query() {
        let provider = Arc::new(ScriptedProvider::failing(WalletError::UserRejected));
        let connector = WalletConnector::new(Some(provider.clone()));

        assert_eq!(connector.connect().await, Err(WalletError::UserRejected));
        assert_eq!(provider.balance_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_account_list_is_an_error() {
        let provider = Arc::new(ScriptedProvider::new(vec![Scripted {
            delay: std::time::Duration::ZERO,
            result: Ok(Vec::new()),
            wei: 0,
        }]));
        let connector = WalletConnector::new(Some(provider));
        assert_eq!(connector.connect().await, Err(WalletError::NoAccounts));
    }

    #[tokio::test]
    async fn each_connect_queries_the_provider_again() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Scripted {
                delay: std::time::Duration::ZERO,
                result: Ok(vec![ADDRESS.to_string()]),
                wei: 0,
            },
            Scripted {
                delay: std::time::Duration::ZERO,
                result: Ok(vec![ADDRESS.to_string()]),
                wei: 2_000_000_000_000_000_000,
            },
        ]));
        let connector = WalletConnector::new(Some(provider.clone()));

        assert_eq!(connector.connect().await.unwrap().balance(), Some("0.0"));
        assert_eq!(connector.connect().await.unwrap().balance(), Some("2.0"));
        assert_eq!(provider.calls(), 2);
    }
}
