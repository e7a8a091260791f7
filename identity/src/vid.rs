//! # VID — Virtual Identity Handles
//!
//! A VID is the short, human-shareable identifier derived from a
//! participant's seed material:
//!
//! ```text
//! seed fragments (name, mobile, wallet address, ...)
//!     -> joined with '|', empties discarded
//!     -> seed_digest -> 64 bits
//!     -> "vid:" + base-58 (11 chars minimum)
//! ```
//!
//! Derivation is a pure function of the seed. Equal seeds always produce
//! equal VIDs; there is no registry, no randomness, and no clock anywhere
//! in the path. The only optional impurity is the wallet enrichment step
//! ([`SeedBuilder::with_wallet`]), which consults an injected external
//! provider and degrades to the pure path when the provider is absent,
//! slow, or broken.

use crate::config::{SEED_DELIMITER, VID_ENCODED_WIDTH, VID_PREFIX};
use crate::digest::{encode_digest, seed_digest};
use crate::wallet::{resolve_optional_address, WalletProvider};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a VID handle.
///
/// Derivation itself is total and never fails; only the inverse direction
/// has failure modes.
#[derive(Debug, Error)]
pub enum VidError {
    /// The handle does not start with `vid:`.
    #[error("missing 'vid:' prefix")]
    MissingPrefix,

    /// The encoded payload is shorter than the fixed minimum width.
    #[error("handle too short: expected at least {expected} encoded characters, got {got}")]
    TooShort {
        /// The minimum encoded width.
        expected: usize,
        /// The width that was actually found.
        got: usize,
    },

    /// The payload contains characters outside the base-58 alphabet.
    #[error("base58 decode error: {0}")]
    Decode(String),

    /// The payload decodes to a value wider than the 64-bit digest.
    #[error("encoded value exceeds 64 bits")]
    Overflow,
}

// ---------------------------------------------------------------------------
// Vid
// ---------------------------------------------------------------------------

/// A derived virtual identity handle.
///
/// Internally stores the 64-bit digest; the `vid:`-prefixed base-58 handle
/// is rendered on the fly. Two equal seeds always yield the same `Vid`.
///
/// # Examples
///
/// ```
/// use sehat_identity::vid::Vid;
///
/// let vid = Vid::derive("alice|9876543210");
/// assert_eq!(vid.to_handle(), "vid:YFEp936FJkG");
///
/// let parsed = Vid::parse(&vid.to_handle()).unwrap();
/// assert_eq!(vid, parsed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vid {
    digest: u64,
}

impl Vid {
    /// Derive a VID from seed text. Pure, total, deterministic.
    pub fn derive(seed: &str) -> Self {
        Self {
            digest: seed_digest(seed),
        }
    }

    /// Wrap an already-computed digest.
    pub fn from_digest(digest: u64) -> Self {
        Self { digest }
    }

    /// The raw 64-bit digest underlying this handle.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    /// Render the full handle: `vid:` + base-58 payload, left-padded with
    /// `'1'` to at least eleven characters.
    pub fn to_handle(&self) -> String {
        format!("{}{}", VID_PREFIX, encode_digest(self.digest))
    }

    /// Parse a handle back into a [`Vid`].
    ///
    /// Strict inverse of [`to_handle`](Self::to_handle): the prefix, the
    /// minimum payload width, the alphabet, and the 64-bit range are all
    /// enforced.
    pub fn parse(handle: &str) -> Result<Self, VidError> {
        let payload = handle
            .strip_prefix(VID_PREFIX)
            .ok_or(VidError::MissingPrefix)?;

        if payload.len() < VID_ENCODED_WIDTH {
            return Err(VidError::TooShort {
                expected: VID_ENCODED_WIDTH,
                got: payload.len(),
            });
        }

        let bytes = bs58::decode(payload)
            .into_vec()
            .map_err(|e| VidError::Decode(e.to_string()))?;

        // Leading '1' digits decode to leading zero bytes. Anything beyond
        // eight significant bytes cannot fit the digest.
        let (high, value) = bytes.split_at(bytes.len().saturating_sub(8));
        if high.iter().any(|b| *b != 0) {
            return Err(VidError::Overflow);
        }

        let mut buf = [0u8; 8];
        buf[8 - value.len()..].copy_from_slice(value);
        Ok(Self {
            digest: u64::from_be_bytes(buf),
        })
    }
}

impl fmt::Display for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_handle())
    }
}

impl fmt::Debug for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vid({})", self.to_handle())
    }
}

impl Serialize for Vid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_handle())
        } else {
            serializer.serialize_bytes(&self.digest.to_be_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Vid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Vid::parse(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != 8 {
                return Err(serde::de::Error::custom(format!(
                    "expected 8-byte digest, got {}",
                    bytes.len()
                )));
            }
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes);
            Ok(Vid {
                digest: u64::from_be_bytes(buf),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// SeedBuilder
// ---------------------------------------------------------------------------

/// Assembles seed material from ordered, optional fragments.
///
/// Fragments are kept in insertion order; empty fragments are discarded.
/// The joined form uses `|` between fragments, so the same fragments in
/// the same order always produce the same seed and therefore the same VID.
///
/// # Examples
///
/// ```
/// use sehat_identity::vid::{SeedBuilder, Vid};
///
/// let vid = SeedBuilder::new()
///     .fragment("alice")
///     .optional_fragment(Some("9876543210"))
///     .optional_fragment(None::<String>)
///     .derive();
/// assert_eq!(vid, Vid::derive("alice|9876543210"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeedBuilder {
    fragments: Vec<String>,
}

impl SeedBuilder {
    /// Start with no fragments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty fragments are dropped, not joined.
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
        self
    }

    /// Append a fragment that may be absent.
    pub fn optional_fragment(self, fragment: Option<impl Into<String>>) -> Self {
        match fragment {
            Some(fragment) => self.fragment(fragment),
            None => self,
        }
    }

    /// Append a wallet address, lowercased. Wallet addresses are
    /// case-insensitive in the ecosystems that inject them, so seeding
    /// with a canonical casing keeps derivation stable.
    pub fn wallet_address(self, address: impl AsRef<str>) -> Self {
        self.fragment(address.as_ref().to_lowercase())
    }

    /// Ask an external wallet provider for an address and append it when
    /// one is available. Provider absence, rejection, error, or timeout
    /// all degrade to the pure path; this method never fails.
    pub async fn with_wallet<P>(self, provider: &P) -> Self
    where
        P: WalletProvider + ?Sized,
    {
        match resolve_optional_address(provider).await {
            Some(address) => self.fragment(address),
            None => self,
        }
    }

    /// The joined seed string.
    pub fn join(&self) -> String {
        self.fragments.join(SEED_DELIMITER)
    }

    /// Derive the VID for the assembled seed.
    pub fn derive(&self) -> Vid {
        Vid::derive(&self.join())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
