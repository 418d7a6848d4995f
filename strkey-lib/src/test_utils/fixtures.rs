//! Known strkey vectors.

use crate::version::VersionByte;

/// A strkey with its type and decoded payload.
#[derive(Debug, Clone, Copy)]
pub struct KnownVector {
    /// Case name for assertion messages
    pub name: &'static str,
    /// Version the address decodes as
    pub version: VersionByte,
    /// Canonical encoding
    pub address: &'static str,
    /// Raw payload bytes
    pub payload: &'static [u8],
}

/// Canonical account address.
pub const ACCOUNT_ID: &str = "GA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5";

/// [`ACCOUNT_ID`] with the final checksum characters corrupted.
pub const ACCOUNT_ID_BAD_CHECKSUM: &str =
    "GA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHE55";

/// [`ACCOUNT_ID`] with payload characters overwritten and one dropped.
pub const ACCOUNT_ID_BAD_PAYLOAD: &str = "GA3D5KRYM6CB7OWOOOORR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5";

/// Secret seed whose Ed25519 public key is [`ACCOUNT_ID`].
pub const SEED: &str = "SBU2RRGLXH3E5CQHTD3ODLDF2BWDCYUSSBLLZ5GNW7JXHDIYKXZWHOKR";

/// Account underlying the muxed vectors.
pub const MUXED_BASE_ACCOUNT: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

/// [`MUXED_BASE_ACCOUNT`] with id 2^63.
pub const MUXED_ACCOUNT: &str =
    "MCAAAAAAAAAAAAB7BQ2L7E5NBWMXDUCMZSIPOBKRDSBYVLMXGSSKF6YNPIB7Y77ITKNOG";

/// [`MUXED_BASE_ACCOUNT`] with id 0.
pub const MUXED_ID_ZERO: &str =
    "MAAAAAAAAAAAAAB7BQ2L7E5NBWMXDUCMZSIPOBKRDSBYVLMXGSSKF6YNPIB7Y77ITLVL6";

/// [`MUXED_BASE_ACCOUNT`] with id 1234.
pub const MUXED_ID_1234: &str =
    "MAAAAAAAAAAAJUR7BQ2L7E5NBWMXDUCMZSIPOBKRDSBYVLMXGSSKF6YNPIB7Y77ITJXB2";

/// 32 bytes shared by the seed, pre-auth and hash-x vectors.
pub const HASH_PAYLOAD: [u8; 32] = [
    0x69, 0xa8, 0xc4, 0xcb, 0xb9, 0xf6, 0x4e, 0x8a, 0x07, 0x98, 0xf6, 0xe1, 0xac, 0x65, 0xd0, 0x6c,
    0x31, 0x62, 0x92, 0x90, 0x56, 0xbc, 0xf4, 0xcd, 0xb7, 0xd3, 0x73, 0x8d, 0x18, 0x55, 0xf3, 0x63,
];

/// Raw key behind [`ACCOUNT_ID`].
pub const ACCOUNT_PAYLOAD: [u8; 32] = [
    0x36, 0x3e, 0xaa, 0x38, 0x67, 0x84, 0x1f, 0xba, 0xd0, 0xf4, 0xed, 0x88, 0xc7, 0x79, 0xe4, 0xfe,
    0x66, 0xe5, 0x6a, 0x24, 0x70, 0xdc, 0x98, 0xc0, 0xec, 0x9c, 0x07, 0x3d, 0x05, 0xc7, 0xb1, 0x03,
];

/// Raw payload behind [`MUXED_ACCOUNT`].
pub const MUXED_PAYLOAD: [u8; 40] = [
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x0c, 0x34, 0xbf, 0x93, 0xad, 0x0d, 0x99,
    0x71, 0xd0, 0x4c, 0xcc, 0x90, 0xf7, 0x05, 0x51, 0x1c, 0x83, 0x8a, 0xad, 0x97, 0x34, 0xa4, 0xa2,
    0xfb, 0x0d, 0x7a, 0x03, 0xfc, 0x7f, 0xe8, 0x9a,
];

/// One vector per registered version.
pub const KNOWN_VECTORS: &[KnownVector] = &[
    KnownVector {
        name: "AccountID",
        version: VersionByte::AccountId,
        address: ACCOUNT_ID,
        payload: &ACCOUNT_PAYLOAD,
    },
    KnownVector {
        name: "MuxedAccount",
        version: VersionByte::MuxedAccount,
        address: MUXED_ACCOUNT,
        payload: &MUXED_PAYLOAD,
    },
    KnownVector {
        name: "Seed",
        version: VersionByte::Seed,
        address: SEED,
        payload: &HASH_PAYLOAD,
    },
    KnownVector {
        name: "HashTx",
        version: VersionByte::HashTx,
        address: "TBU2RRGLXH3E5CQHTD3ODLDF2BWDCYUSSBLLZ5GNW7JXHDIYKXZWHXL7",
        payload: &HASH_PAYLOAD,
    },
    KnownVector {
        name: "HashX",
        version: VersionByte::HashX,
        address: "XBU2RRGLXH3E5CQHTD3ODLDF2BWDCYUSSBLLZ5GNW7JXHDIYKXZWGTOG",
        payload: &HASH_PAYLOAD,
    },
];
