//! Test utilities for strkey.
//!
//! Known-good vectors and helpers for building deliberately malformed
//! strings. Available in this crate's tests and, with the `test-utils`
//! feature, to dependants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strkey_lib::test_utils::{fixtures, tamper_last_symbol};
//!
//! let bad = tamper_last_symbol(fixtures::MUXED_ACCOUNT, 'H');
//! assert!(strkey_lib::decode(strkey_lib::VersionByte::MuxedAccount, &bad).is_err());
//! ```

pub mod fixtures;

pub use fixtures::{KnownVector, KNOWN_VECTORS};

/// Replace the final symbol of `encoded` with `symbol`.
pub fn tamper_last_symbol(encoded: &str, symbol: char) -> String {
    let mut out: String = encoded
        .chars()
        .take(encoded.chars().count().saturating_sub(1))
        .collect();
    out.push(symbol);
    out
}

/// Build a strkey-shaped string from raw record bytes, checksum included or not.
///
/// No validation: the result is whatever base-32 makes of `record`.
pub fn raw_strkey(record: &[u8]) -> String {
    crate::base32::encode(record)
}

/// Record bytes with a valid checksum for an arbitrary version byte and payload.
pub fn record_with_checksum(version: u8, payload: &[u8]) -> Vec<u8> {
    let mut record = Vec::with_capacity(payload.len() + 3);
    record.push(version);
    record.extend_from_slice(payload);
    crate::checksum::append_checksum(&mut record);
    record
}
