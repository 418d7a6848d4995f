//! Strkey encode and decode.
//!
//! Encoding is `base32(version || payload || crc16_le(version || payload))`.
//!
//! Decoding validates in a fixed order and the first failing check decides
//! the error:
//!
//! 1. empty input
//! 2. base-32 alphabet
//! 3. leftover character
//! 4. non-zero unused bits
//! 5. at least version plus checksum
//! 6. version byte is recognized
//! 7. version byte is the expected one
//! 8. exact record length for that version
//! 9. checksum

use zeroize::Zeroizing;

use crate::base32;
use crate::checksum::{self, CHECKSUM_LEN};
use crate::errors::{NonCanonical, StrkeyError};
use crate::version::VersionByte;
use crate::Result;

/// Smallest decodable record: a version byte and a checksum.
const MIN_RECORD_LEN: usize = 1 + CHECKSUM_LEN;

/// Encode `payload` as a strkey of type `version`.
///
/// # Errors
///
/// Returns [`StrkeyError::InvalidPayloadLength`] when `payload` is not exactly
/// [`VersionByte::payload_len`] bytes.
///
/// # Example
///
/// ```
/// use strkey_lib::{encode, VersionByte};
///
/// let address = encode(VersionByte::AccountId, &[0u8; 32]).unwrap();
/// assert_eq!(address, "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF");
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(payload), fields(payload_len = payload.len()))
)]
pub fn encode(version: VersionByte, payload: &[u8]) -> Result<String> {
    let expected = version.payload_len();
    if payload.len() != expected {
        return Err(StrkeyError::InvalidPayloadLength {
            version,
            expected,
            actual: payload.len(),
        });
    }

    let mut record = Zeroizing::new(Vec::with_capacity(version.record_len()));
    record.push(version.as_byte());
    record.extend_from_slice(payload);
    checksum::append_checksum(&mut record);

    Ok(base32::encode(&record))
}

/// Decode a strkey that must be of type `expected`, returning the raw payload.
///
/// # Errors
///
/// One [`StrkeyError`] per failure class, checked in the order listed in the
/// module documentation. A well-formed strkey of the wrong type yields
/// [`StrkeyError::VersionMismatch`].
///
/// # Example
///
/// ```
/// use strkey_lib::{decode, StrkeyError, VersionByte};
///
/// let address = "GA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5";
/// let key = decode(VersionByte::AccountId, address).unwrap();
/// assert_eq!(key.len(), 32);
///
/// let err = decode(VersionByte::Seed, address).unwrap_err();
/// assert!(matches!(err, StrkeyError::VersionMismatch { .. }));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(encoded), fields(len = encoded.len()))
)]
pub fn decode(expected: VersionByte, encoded: &str) -> Result<Vec<u8>> {
    unpack(encoded, Some(expected)).map(|(_, payload)| payload)
}

/// Decode a strkey of any recognized type.
///
/// Runs the same pipeline as [`decode`] without the expected-version check.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(encoded), fields(len = encoded.len()))
)]
pub fn decode_any(encoded: &str) -> Result<(VersionByte, Vec<u8>)> {
    unpack(encoded, None)
}

/// Version of a fully valid strkey.
pub fn version(encoded: &str) -> Result<VersionByte> {
    decode_any(encoded).map(|(version, _)| version)
}

/// Whether `encoded` is a valid strkey of type `version`.
pub fn is_valid(version: VersionByte, encoded: &str) -> bool {
    decode(version, encoded).is_ok()
}

/// Whether `encoded` is a valid `G...` account address.
pub fn is_valid_ed25519_public_key(encoded: &str) -> bool {
    is_valid(VersionByte::AccountId, encoded)
}

/// Whether `encoded` is a valid `S...` secret seed.
pub fn is_valid_ed25519_secret_seed(encoded: &str) -> bool {
    is_valid(VersionByte::Seed, encoded)
}

/// Whether `encoded` is a valid `M...` muxed account.
pub fn is_valid_muxed_account(encoded: &str) -> bool {
    is_valid(VersionByte::MuxedAccount, encoded)
}

/// Decode into a fixed-size array.
///
/// `N` must equal the version's payload length; the typed key wrappers
/// guarantee it.
pub(crate) fn decode_fixed<const N: usize>(
    expected: VersionByte,
    encoded: &str,
) -> Result<[u8; N]> {
    let payload = Zeroizing::new(decode(expected, encoded)?);
    <[u8; N]>::try_from(payload.as_slice()).map_err(|_| StrkeyError::InvalidPayloadLength {
        version: expected,
        expected: N,
        actual: payload.len(),
    })
}

fn unpack(encoded: &str, expected: Option<VersionByte>) -> Result<(VersionByte, Vec<u8>)> {
    let result = unpack_inner(encoded, expected);
    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(code = %err.code(), "strkey rejected");
    }
    result
}

fn unpack_inner(encoded: &str, expected: Option<VersionByte>) -> Result<(VersionByte, Vec<u8>)> {
    if encoded.is_empty() {
        return Err(StrkeyError::EmptyInput);
    }

    let decoded = base32::decode(encoded)?;
    if decoded.has_leftover_character() {
        return Err(StrkeyError::NonCanonicalEncoding(
            NonCanonical::LeftoverCharacter,
        ));
    }
    if decoded.has_nonzero_unused_bits() {
        return Err(StrkeyError::NonCanonicalEncoding(
            NonCanonical::NonZeroUnusedBits,
        ));
    }
    let record = Zeroizing::new(decoded.bytes);

    if record.len() < MIN_RECORD_LEN {
        return Err(StrkeyError::invalid_encoding(format!(
            "decoded {} bytes; a strkey needs at least {}",
            record.len(),
            MIN_RECORD_LEN
        )));
    }

    let version = VersionByte::try_from(record[0])?;

    if let Some(expected) = expected {
        if version != expected {
            return Err(StrkeyError::VersionMismatch {
                expected,
                actual: version,
            });
        }
    }

    if record.len() != version.record_len() {
        return Err(StrkeyError::invalid_encoding(format!(
            "{} strkey decodes to {} bytes, expected {}",
            version,
            record.len(),
            version.record_len()
        )));
    }

    let Some((body, computed, carried)) = checksum::split_checksum(&record) else {
        return Err(StrkeyError::invalid_encoding("missing checksum"));
    };
    if computed != carried {
        return Err(StrkeyError::ChecksumMismatch {
            expected: computed,
            actual: carried,
        });
    }

    Ok((version, body[1..].to_vec()))
}
