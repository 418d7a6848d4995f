//! Strkey library.
//!
//! Human-readable, checksum-protected text encoding for public keys, secret
//! seeds, signer hashes and muxed accounts. A strkey is
//! `base32(version || payload || crc16)` and every payload has exactly one
//! accepted encoding: the decoder rejects padding, stray trailing symbols,
//! non-zero unused bits, unknown version bytes, the wrong type and bad
//! checksums, each with its own error.
//!
//! The crate is stateless. All functions are pure and safe to call from any
//! number of threads.
//!
//! # Features
//!
//! - **Codec**: [`encode`], [`decode`], [`decode_any`] over raw payloads
//! - **Version registry**: the closed [`VersionByte`] set and its fixed lengths
//! - **Typed keys**: [`AccountId`], [`SecretSeed`], [`MuxedAccount`],
//!   [`PreAuthTx`], [`HashX`], [`SignerKey`] with `FromStr`/`Display`/serde
//!
//! # Example
//!
//! ```
//! use strkey_lib::{AccountId, SecretSeed, StrkeyErrorCode};
//!
//! let seed: SecretSeed = "SBU2RRGLXH3E5CQHTD3ODLDF2BWDCYUSSBLLZ5GNW7JXHDIYKXZWHOKR"
//!     .parse()
//!     .unwrap();
//! let address = seed.account_id();
//! assert_eq!(
//!     address.to_string(),
//!     "GA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5"
//! );
//!
//! // A seed is never accepted where an account address is expected.
//! let err = "SBU2RRGLXH3E5CQHTD3ODLDF2BWDCYUSSBLLZ5GNW7JXHDIYKXZWHOKR"
//!     .parse::<AccountId>()
//!     .unwrap_err();
//! assert_eq!(err.code(), StrkeyErrorCode::VersionMismatch);
//! ```

pub mod base32;
pub mod checksum;
mod codec;
pub mod errors;
mod keys;
mod muxed;
pub mod prelude;
pub mod version;

/// Known vectors and tampering helpers.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use codec::{
    decode, decode_any, encode, is_valid, is_valid_ed25519_public_key,
    is_valid_ed25519_secret_seed, is_valid_muxed_account, version,
};
pub use errors::{NonCanonical, StrkeyError, StrkeyErrorCode};
pub use keys::{AccountId, HashX, PreAuthTx, SecretSeed, SignerKey};
pub use muxed::MuxedAccount;
pub use version::{payload_length, ParseVersionError, VersionByte};

/// Common result alias for strkey operations.
pub type Result<T> = std::result::Result<T, StrkeyError>;
