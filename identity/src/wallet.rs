//! # Wallet Provider Boundary
//!
//! Seed material may optionally be enriched with an address obtained from
//! an injected external wallet. The provider sits outside this crate (in
//! the original deployment it is a browser-injected wallet object); here it
//! is modeled as a single-capability async trait.
//!
//! The contract at this boundary is deliberately one-sided: the resolver
//! treats provider absence, rejection, error, and timeout identically, as
//! "no address available". Nothing a provider does can make derivation
//! fail or hang. The timeout is [`crate::config::WALLET_RESOLVE_TIMEOUT`].

use crate::config::WALLET_RESOLVE_TIMEOUT;
use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors a wallet provider may report.
///
/// These exist for providers to be honest about what went wrong; the
/// resolver swallows all of them.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No provider is installed or reachable.
    #[error("wallet provider is unavailable")]
    Unavailable,

    /// The provider refused the address request.
    #[error("wallet request rejected: {reason}")]
    Rejected {
        /// Provider-supplied explanation.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// A source of optional external wallet addresses.
///
/// Implementations may take as long as they like; the resolver imposes its
/// own timeout. `Ok(None)` means the provider is present but has no
/// address to offer.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request an address from the wallet, if one is available.
    async fn request_address(&self) -> Result<Option<String>, WalletError>;
}

/// The provider used when no wallet is injected at all. Always absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWallet;

#[async_trait]
impl WalletProvider for NoWallet {
    async fn request_address(&self) -> Result<Option<String>, WalletError> {
        Ok(None)
    }
}

/// A provider over a fixed, pre-known address. Used by the CLI (where the
/// address arrives as a flag rather than from a live wallet) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    address: Option<String>,
}

impl StaticWallet {
    /// A provider that always returns the given address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// A provider that is present but has nothing to offer.
    pub fn absent() -> Self {
        Self { address: None }
    }
}

#[async_trait]
impl WalletProvider for StaticWallet {
    async fn request_address(&self) -> Result<Option<String>, WalletError> {
        Ok(self.address.clone())
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolve an optional address from a provider, swallowing every failure
/// mode.
///
/// Returns the address lowercased, or `None` if the provider has nothing,
/// errors, or exceeds the resolve timeout. Failures are logged at `warn`
/// and never propagated.
pub async fn resolve_optional_address<P>(provider: &P) -> Option<String>
where
    P: WalletProvider + ?Sized,
{
    match tokio::time::timeout(WALLET_RESOLVE_TIMEOUT, provider.request_address()).await {
        Ok(Ok(Some(address))) => Some(address.to_lowercase()),
        Ok(Ok(None)) => None,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "wallet provider failed, continuing without address");
            None
        }
        Err(_) => {
            tracing::warn!(
                timeout = ?WALLET_RESOLVE_TIMEOUT,
                "wallet provider timed out, continuing without address"
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
