//! Error types for strkey operations.
//!
//! Every decode failure is terminal. Callers receive a distinct variant per
//! failure class so that "not an account address" can be told apart from
//! "corrupted address" without string matching.

use std::fmt;

use crate::base32::Base32Error;
use crate::version::VersionByte;

/// Error codes for FFI and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StrkeyErrorCode {
    /// Input string was empty
    EmptyInput = 1000,
    /// Alphabet violation or inconsistent decoded length
    InvalidEncoding = 2000,
    /// Decodable but not the unique minimal representation
    NonCanonicalEncoding = 2001,
    /// Leading byte outside the version registry
    InvalidVersionByte = 3000,
    /// Recognized version, but not the one the caller asked for
    VersionMismatch = 3001,
    /// Recognized version that the typed parser does not accept
    UnexpectedVersion = 3002,
    /// Trailing CRC does not match version and payload
    ChecksumMismatch = 4000,
    /// Payload handed to the encoder has the wrong length
    InvalidPayloadLength = 5000,
}

impl StrkeyErrorCode {
    /// Stable snake_case name, used by the CLI's JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidEncoding => "invalid_encoding",
            Self::NonCanonicalEncoding => "non_canonical_encoding",
            Self::InvalidVersionByte => "invalid_version_byte",
            Self::VersionMismatch => "version_mismatch",
            Self::UnexpectedVersion => "unexpected_version",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::InvalidPayloadLength => "invalid_payload_length",
        }
    }
}

impl fmt::Display for StrkeyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a string was rejected as a non-canonical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonCanonical {
    /// The final symbol carries no bits of any whole byte.
    LeftoverCharacter,
    /// The final symbol has padding bits that are not zero.
    NonZeroUnusedBits,
}

impl fmt::Display for NonCanonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftoverCharacter => f.write_str("unused leftover character"),
            Self::NonZeroUnusedBits => f.write_str("unused bits should be set to 0"),
        }
    }
}

/// Error type for strkey encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrkeyError {
    /// Input string has zero length.
    #[error("strkey is empty")]
    EmptyInput,

    /// Alphabet violation, or a decoded length that no version allows.
    #[error("invalid strkey encoding: {0}")]
    InvalidEncoding(String),

    /// Decodable, but some other string is the canonical form.
    #[error("non-canonical strkey; {0}")]
    NonCanonicalEncoding(NonCanonical),

    /// Leading byte is not in the version registry.
    #[error("invalid version byte 0x{0:02x}")]
    InvalidVersionByte(u8),

    /// Leading byte is valid but differs from the caller's expectation.
    #[error("version byte mismatch: expected {expected}, found {actual}")]
    VersionMismatch {
        /// Version the caller asked for
        expected: VersionByte,
        /// Version found in the string
        actual: VersionByte,
    },

    /// Recognized version that is not accepted in this position.
    #[error("strkey of type {0} is not accepted here")]
    UnexpectedVersion(VersionByte),

    /// Recomputed CRC differs from the one carried in the string.
    #[error("checksum mismatch: computed 0x{expected:04x}, found 0x{actual:04x}")]
    ChecksumMismatch {
        /// CRC computed over version and payload
        expected: u16,
        /// CRC read from the trailing two bytes
        actual: u16,
    },

    /// Payload length does not match the version's fixed length.
    #[error("{version} payload must be {expected} bytes, got {actual}")]
    InvalidPayloadLength {
        /// Version being encoded
        version: VersionByte,
        /// Fixed length for that version
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}

impl StrkeyError {
    /// Get the error code for FFI/diagnostics.
    pub fn code(&self) -> StrkeyErrorCode {
        match self {
            Self::EmptyInput => StrkeyErrorCode::EmptyInput,
            Self::InvalidEncoding(_) => StrkeyErrorCode::InvalidEncoding,
            Self::NonCanonicalEncoding(_) => StrkeyErrorCode::NonCanonicalEncoding,
            Self::InvalidVersionByte(_) => StrkeyErrorCode::InvalidVersionByte,
            Self::VersionMismatch { .. } => StrkeyErrorCode::VersionMismatch,
            Self::UnexpectedVersion(_) => StrkeyErrorCode::UnexpectedVersion,
            Self::ChecksumMismatch { .. } => StrkeyErrorCode::ChecksumMismatch,
            Self::InvalidPayloadLength { .. } => StrkeyErrorCode::InvalidPayloadLength,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn invalid_encoding(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding(reason.into())
    }
}

impl From<Base32Error> for StrkeyError {
    fn from(err: Base32Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = StrkeyError::VersionMismatch {
            expected: VersionByte::Seed,
            actual: VersionByte::AccountId,
        };
        assert_eq!(err.code(), StrkeyErrorCode::VersionMismatch);
        assert_eq!(err.code().as_str(), "version_mismatch");
        assert_eq!(StrkeyErrorCode::ChecksumMismatch as i32, 4000);
    }

    #[test]
    fn test_error_display() {
        let err = StrkeyError::NonCanonicalEncoding(NonCanonical::NonZeroUnusedBits);
        assert!(err.to_string().contains("unused bits should be set to 0"));

        let err = StrkeyError::NonCanonicalEncoding(NonCanonical::LeftoverCharacter);
        assert!(err.message().contains("unused leftover character"));

        let err = StrkeyError::InvalidVersionByte(2);
        assert_eq!(err.to_string(), "invalid version byte 0x02");
    }

    #[test]
    fn test_base32_error_maps_to_invalid_encoding() {
        let err: StrkeyError = Base32Error::InvalidCharacter {
            character: '1',
            position: 4,
        }
        .into();
        assert_eq!(err.code(), StrkeyErrorCode::InvalidEncoding);
        assert!(err.to_string().contains("'1'"));
    }
}
