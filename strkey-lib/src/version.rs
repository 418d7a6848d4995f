//! Version registry.
//!
//! The leading byte of every strkey names the payload type and fixes its
//! length. The set is closed: any other byte is rejected by the decoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base32;
use crate::checksum::CHECKSUM_LEN;
use crate::errors::StrkeyError;

/// Length of an Ed25519 key or a SHA-256 hash.
pub const KEY_LEN: usize = 32;

/// Length of a muxed account payload: key plus 8-byte id.
pub const MUXED_ACCOUNT_LEN: usize = KEY_LEN + 8;

/// Recognized version bytes.
///
/// Each value is a base-32 symbol index shifted left by three, so the first
/// character of an encoding identifies its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum VersionByte {
    /// Ed25519 public key (`G...`).
    AccountId = 6 << 3,
    /// Ed25519 public key with a 64-bit id (`M...`).
    MuxedAccount = 12 << 3,
    /// Ed25519 secret seed (`S...`).
    Seed = 18 << 3,
    /// Pre-authorized transaction hash (`T...`).
    #[serde(rename = "pre-auth-tx")]
    HashTx = 19 << 3,
    /// Hash of a signer preimage (`X...`).
    HashX = 23 << 3,
}

impl VersionByte {
    /// Every recognized version, in registry order.
    pub const ALL: [VersionByte; 5] = [
        Self::AccountId,
        Self::MuxedAccount,
        Self::Seed,
        Self::HashTx,
        Self::HashX,
    ];

    /// The raw leading byte.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Fixed payload length in bytes.
    pub const fn payload_len(self) -> usize {
        match self {
            Self::AccountId | Self::Seed | Self::HashTx | Self::HashX => KEY_LEN,
            Self::MuxedAccount => MUXED_ACCOUNT_LEN,
        }
    }

    /// Length of the decoded record: version, payload and checksum.
    pub const fn record_len(self) -> usize {
        1 + self.payload_len() + CHECKSUM_LEN
    }

    /// Length of the canonical encoding in characters.
    pub const fn encoded_len(self) -> usize {
        base32::encoded_len(self.record_len())
    }

    /// Registry lookup. `None` for any byte outside the closed set.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b if b == Self::AccountId as u8 => Some(Self::AccountId),
            b if b == Self::MuxedAccount as u8 => Some(Self::MuxedAccount),
            b if b == Self::Seed as u8 => Some(Self::Seed),
            b if b == Self::HashTx as u8 => Some(Self::HashTx),
            b if b == Self::HashX as u8 => Some(Self::HashX),
            _ => None,
        }
    }

    /// The character every encoding of this version starts with.
    pub const fn prefix(self) -> char {
        base32::ALPHABET[(self as u8 >> 3) as usize] as char
    }

    /// Kebab-case name used by `Display`, `FromStr` and serde.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccountId => "account-id",
            Self::MuxedAccount => "muxed-account",
            Self::Seed => "seed",
            Self::HashTx => "pre-auth-tx",
            Self::HashX => "hash-x",
        }
    }
}

/// Payload length for a raw version byte, if it is recognized.
pub fn payload_length(byte: u8) -> Option<usize> {
    VersionByte::from_byte(byte).map(VersionByte::payload_len)
}

impl TryFrom<u8> for VersionByte {
    type Error = StrkeyError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(StrkeyError::InvalidVersionByte(byte))
    }
}

impl From<VersionByte> for u8 {
    fn from(version: VersionByte) -> Self {
        version.as_byte()
    }
}

impl fmt::Display for VersionByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing a version name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strkey version {0:?}; use account-id, muxed-account, seed, pre-auth-tx or hash-x")]
pub struct ParseVersionError(pub String);

impl FromStr for VersionByte {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "account-id" | "account" | "g" => Ok(Self::AccountId),
            "muxed-account" | "muxed" | "m" => Ok(Self::MuxedAccount),
            "seed" | "s" => Ok(Self::Seed),
            "pre-auth-tx" | "hash-tx" | "t" => Ok(Self::HashTx),
            "hash-x" | "x" => Ok(Self::HashX),
            _ => Err(ParseVersionError(s.to_string())),
        }
    }
}
