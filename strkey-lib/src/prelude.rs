//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use strkey_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Codec: `encode`, `decode`, `decode_any`
//! - Registry: `VersionByte`
//! - Error types: `StrkeyError`, `StrkeyErrorCode`, `Result`
//! - Typed keys: `AccountId`, `SecretSeed`, `MuxedAccount`, `SignerKey`

pub use crate::{decode, decode_any, encode, VersionByte};

pub use crate::errors::{StrkeyError, StrkeyErrorCode};
pub use crate::Result;

pub use crate::{AccountId, HashX, MuxedAccount, PreAuthTx, SecretSeed, SignerKey};
