//! Muxed accounts: one Ed25519 key multiplexed by a 64-bit id.
//!
//! Payload layout is the id, big-endian, followed by the 32-byte key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::decode_fixed;
use crate::errors::StrkeyError;
use crate::keys::{encode_fixed, AccountId};
use crate::version::{VersionByte, KEY_LEN, MUXED_ACCOUNT_LEN};
use crate::Result;

const ID_LEN: usize = MUXED_ACCOUNT_LEN - KEY_LEN;

/// A logical account sharing the key of an underlying [`AccountId`].
///
/// # Example
///
/// ```
/// use strkey_lib::{AccountId, MuxedAccount};
///
/// let base: AccountId = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ"
///     .parse()
///     .unwrap();
/// let muxed = MuxedAccount::new(base, 1234);
/// assert!(muxed.to_string().starts_with('M'));
///
/// let parsed: MuxedAccount = muxed.to_string().parse().unwrap();
/// assert_eq!(parsed.id(), 1234);
/// assert_eq!(parsed.account_id(), base);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MuxedAccount {
    ed25519: AccountId,
    id: u64,
}

impl MuxedAccount {
    /// Version byte this type encodes with.
    pub const VERSION: VersionByte = VersionByte::MuxedAccount;

    /// Multiplex `account` under `id`.
    pub const fn new(account: AccountId, id: u64) -> Self {
        Self {
            ed25519: account,
            id,
        }
    }

    /// The multiplexing id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The underlying account.
    pub fn account_id(&self) -> AccountId {
        self.ed25519
    }

    /// Same account under another id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Raw 40-byte payload.
    pub fn to_payload(&self) -> [u8; MUXED_ACCOUNT_LEN] {
        let mut payload = [0u8; MUXED_ACCOUNT_LEN];
        payload[..ID_LEN].copy_from_slice(&self.id.to_be_bytes());
        payload[ID_LEN..].copy_from_slice(self.ed25519.as_bytes());
        payload
    }

    /// Split a raw 40-byte payload.
    pub fn from_payload(payload: &[u8; MUXED_ACCOUNT_LEN]) -> Self {
        let (id, key) = payload.split_at(ID_LEN);
        let mut id_bytes = [0u8; ID_LEN];
        id_bytes.copy_from_slice(id);
        let mut key_bytes = [0u8; KEY_LEN];
        key_bytes.copy_from_slice(key);
        Self {
            ed25519: AccountId::from_bytes(key_bytes),
            id: u64::from_be_bytes(id_bytes),
        }
    }

    /// Canonical strkey.
    pub fn to_strkey(&self) -> String {
        encode_fixed(Self::VERSION, &self.to_payload())
    }
}

impl FromStr for MuxedAccount {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self> {
        let payload = decode_fixed::<MUXED_ACCOUNT_LEN>(Self::VERSION, s)?;
        Ok(Self::from_payload(&payload))
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl fmt::Debug for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MuxedAccount")
            .field("account", &self.ed25519.to_strkey())
            .field("id", &self.id)
            .finish()
    }
}

impl Serialize for MuxedAccount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MuxedAccount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
