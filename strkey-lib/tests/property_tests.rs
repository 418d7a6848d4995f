//! Property-based tests for the strkey codec.

use proptest::prelude::*;
use strkey_lib::{
    base32, checksum, decode, encode, AccountId, MuxedAccount, NonCanonical, StrkeyError,
    StrkeyErrorCode, VersionByte,
};

fn any_version() -> impl Strategy<Value = VersionByte> {
    prop::sample::select(VersionByte::ALL.to_vec())
}

fn version_and_payload() -> impl Strategy<Value = (VersionByte, Vec<u8>)> {
    any_version().prop_flat_map(|version| {
        (
            Just(version),
            prop::collection::vec(any::<u8>(), version.payload_len()),
        )
    })
}

proptest! {
    /// Every payload of the right length survives encode then decode
    #[test]
    fn test_round_trip((version, payload) in version_and_payload()) {
        let encoded = encode(version, &payload).unwrap();
        prop_assert_eq!(encoded.len(), version.encoded_len());
        prop_assert!(encoded.starts_with(version.prefix()));
        prop_assert_eq!(decode(version, &encoded).unwrap(), payload);
    }

    /// A valid strkey never decodes as another type
    #[test]
    fn test_version_isolation(
        (version, payload) in version_and_payload(),
        other in any_version(),
    ) {
        prop_assume!(version != other);
        let encoded = encode(version, &payload).unwrap();
        prop_assert_eq!(
            decode(other, &encoded),
            Err(StrkeyError::VersionMismatch { expected: other, actual: version })
        );
    }

    /// Appending any symbol to a canonical strkey adds no bytes and is rejected
    #[test]
    fn test_extra_symbol_is_leftover(
        (version, payload) in version_and_payload(),
        symbol in prop::sample::select(base32::ALPHABET.to_vec()),
    ) {
        let mut encoded = encode(version, &payload).unwrap();
        encoded.push(symbol as char);
        prop_assert_eq!(
            decode(version, &encoded),
            Err(StrkeyError::NonCanonicalEncoding(NonCanonical::LeftoverCharacter))
        );
    }

    /// The one unused bit of a muxed strkey must stay zero
    #[test]
    fn test_muxed_unused_bit_is_canonical(key in any::<[u8; 32]>(), id in any::<u64>()) {
        let muxed = MuxedAccount::new(AccountId::from_bytes(key), id);
        let encoded = muxed.to_string();
        let last = *encoded.as_bytes().last().unwrap();
        let index = base32::ALPHABET.iter().position(|c| *c == last).unwrap();
        prop_assert_eq!(index & 1, 0);

        let mut twin = encoded[..encoded.len() - 1].to_string();
        twin.push(base32::ALPHABET[index | 1] as char);
        prop_assert_eq!(
            decode(VersionByte::MuxedAccount, &twin),
            Err(StrkeyError::NonCanonicalEncoding(NonCanonical::NonZeroUnusedBits))
        );
    }

    /// Any single-bit flip outside the version byte is caught by the checksum
    #[test]
    fn test_single_bit_flip_is_detected(
        (version, payload) in version_and_payload(),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut record = vec![version.as_byte()];
        record.extend_from_slice(&payload);
        checksum::append_checksum(&mut record);

        let index = 1 + position.index(record.len() - 1);
        record[index] ^= 1 << bit;
        let tampered = base32::encode(&record);

        prop_assert_eq!(
            decode(version, &tampered).unwrap_err().code(),
            StrkeyErrorCode::ChecksumMismatch
        );
    }

    /// Arbitrary input never panics and never yields a payload of the wrong size
    #[test]
    fn test_arbitrary_input_is_total(input in "[A-Z2-7=a-z0-9]{0,80}", version in any_version()) {
        if let Ok(payload) = decode(version, &input) {
            prop_assert_eq!(payload.len(), version.payload_len());
            prop_assert_eq!(encode(version, &payload).unwrap(), input);
        }
    }
}
