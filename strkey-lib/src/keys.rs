//! Typed wrappers over fixed-length strkey payloads.
//!
//! Each type fixes its version byte, so encoding cannot fail and decoding
//! rejects strkeys of any other type with [`StrkeyError::VersionMismatch`].

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::codec::{self, decode_fixed};
use crate::errors::StrkeyError;
use crate::version::{VersionByte, KEY_LEN};
use crate::Result;

macro_rules! public_strkey {
    ($(#[$meta:meta])* $name:ident, $version:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; KEY_LEN]);

        impl $name {
            /// Version byte this type encodes with.
            pub const VERSION: VersionByte = $version;

            /// Wrap raw bytes.
            pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
                Self(bytes)
            }

            /// Raw bytes.
            pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
                &self.0
            }

            /// Canonical strkey.
            pub fn to_strkey(&self) -> String {
                encode_fixed(Self::VERSION, &self.0)
            }
        }

        impl FromStr for $name {
            type Err = StrkeyError;

            fn from_str(s: &str) -> Result<Self> {
                decode_fixed(Self::VERSION, s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_strkey())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_strkey())
            }
        }

        impl From<[u8; KEY_LEN]> for $name {
            fn from(bytes: [u8; KEY_LEN]) -> Self {
                Self(bytes)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

public_strkey!(
    /// Ed25519 public key, displayed as a `G...` account address.
    AccountId,
    VersionByte::AccountId
);

public_strkey!(
    /// Hash of a pre-authorized transaction, displayed as `T...`.
    PreAuthTx,
    VersionByte::HashTx
);

public_strkey!(
    /// Hash of a signer preimage, displayed as `X...`.
    HashX,
    VersionByte::HashX
);

/// Encode a payload whose length matches `version` by construction.
pub(crate) fn encode_fixed(version: VersionByte, payload: &[u8]) -> String {
    match codec::encode(version, payload) {
        Ok(encoded) => encoded,
        Err(err) => unreachable!("typed payload has the registry length: {err}"),
    }
}

/// Ed25519 secret seed (`S...`).
///
/// Wiped on drop. Has no `Display`, serde or equality impls; use
/// [`SecretSeed::to_strkey`] when the secret has to leave the process.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed([u8; KEY_LEN]);

impl SecretSeed {
    /// Version byte this type encodes with.
    pub const VERSION: VersionByte = VersionByte::Seed;

    /// Wrap raw seed bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Fresh seed from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        let seed = Self(bytes);
        bytes.zeroize();
        seed
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Canonical strkey. Handle with the same care as the seed itself.
    pub fn to_strkey(&self) -> String {
        encode_fixed(Self::VERSION, &self.0)
    }

    /// Account address of the Ed25519 key pair this seed generates.
    pub fn account_id(&self) -> AccountId {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&self.0);
        AccountId(signing_key.verifying_key().to_bytes())
    }
}

impl FromStr for SecretSeed {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = decode_fixed::<KEY_LEN>(Self::VERSION, s)?;
        let seed = Self(bytes);
        bytes.zeroize();
        Ok(seed)
    }
}

impl fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretSeed(<redacted>)")
    }
}

/// Any key that can authorize a signature: a public key or one of the hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignerKey {
    /// Ed25519 public key (`G...`).
    Ed25519(AccountId),
    /// Pre-authorized transaction hash (`T...`).
    PreAuthTx(PreAuthTx),
    /// Hash-of-preimage signer (`X...`).
    HashX(HashX),
}

impl SignerKey {
    /// Version byte of the wrapped key.
    pub fn version(&self) -> VersionByte {
        match self {
            Self::Ed25519(_) => AccountId::VERSION,
            Self::PreAuthTx(_) => PreAuthTx::VERSION,
            Self::HashX(_) => HashX::VERSION,
        }
    }

    /// Raw bytes of the wrapped key.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        match self {
            Self::Ed25519(key) => key.as_bytes(),
            Self::PreAuthTx(hash) => hash.as_bytes(),
            Self::HashX(hash) => hash.as_bytes(),
        }
    }

    /// Canonical strkey.
    pub fn to_strkey(&self) -> String {
        encode_fixed(self.version(), self.as_bytes())
    }
}

impl FromStr for SignerKey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self> {
        let (version, payload) = codec::decode_any(s)?;
        let payload = Zeroizing::new(payload);
        let bytes = <[u8; KEY_LEN]>::try_from(payload.as_slice())
            .map_err(|_| StrkeyError::UnexpectedVersion(version))?;
        match version {
            VersionByte::AccountId => Ok(Self::Ed25519(AccountId(bytes))),
            VersionByte::HashTx => Ok(Self::PreAuthTx(PreAuthTx(bytes))),
            VersionByte::HashX => Ok(Self::HashX(HashX(bytes))),
            VersionByte::Seed | VersionByte::MuxedAccount => {
                Err(StrkeyError::UnexpectedVersion(version))
            }
        }
    }
}

impl fmt::Display for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl Serialize for SignerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SignerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
