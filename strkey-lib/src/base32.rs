//! Unpadded RFC 4648 base-32 over the alphabet `A-Z2-7`.
//!
//! The decoder reports the bits of the final symbol that did not complete a
//! byte. A canonical string never has a whole symbol left over and always has
//! those bits set to zero; the codec enforces that using [`Base32Decoded`].

/// The RFC 4648 base-32 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xff;

const DECODE_MAP: [u8; 256] = build_decode_map();

const fn build_decode_map() -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Error from [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base32Error {
    /// A character outside the 32-symbol alphabet.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Zero-based character index
        position: usize,
    },
}

/// Result of [`decode`]: whole bytes plus the trailing bits that did not fill one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base32Decoded {
    /// Whole bytes, in order.
    pub bytes: Vec<u8>,
    /// Number of trailing bits that did not complete a byte (0..=7).
    pub unused_bits: u8,
    /// Value of those trailing bits.
    pub unused_value: u8,
}

impl Base32Decoded {
    /// The last symbol contributes nothing to any whole byte.
    ///
    /// Five or more leftover bits mean the final symbol could be dropped and
    /// the byte output would be identical.
    pub fn has_leftover_character(&self) -> bool {
        self.unused_bits >= 5
    }

    /// Leftover bits exist and at least one of them is set.
    pub fn has_nonzero_unused_bits(&self) -> bool {
        self.unused_value != 0
    }
}

/// Number of symbols [`encode`] produces for `byte_len` bytes.
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(5)
}

/// Encode `bytes` into the minimal unpadded base-32 string.
///
/// Unused low bits of the final symbol are zero.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    let mut buffer: u16 = 0;
    let mut bits = 0u8;

    for &byte in bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[usize::from((buffer >> bits) & 0x1f)] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ALPHABET[usize::from((buffer << (5 - bits)) & 0x1f)] as char);
    }

    out
}

/// Decode an unpadded base-32 string.
///
/// Never fails on length; the caller decides what to do with leftover bits.
pub fn decode(input: &str) -> Result<Base32Decoded, Base32Error> {
    let mut bytes = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits = 0u8;

    for (position, byte) in input.bytes().enumerate() {
        let value = DECODE_MAP[usize::from(byte)];
        if value == INVALID {
            // Report the full char even for a multi-byte UTF-8 sequence.
            let character = input[position..].chars().next().unwrap_or('\u{fffd}');
            return Err(Base32Error::InvalidCharacter {
                character,
                position,
            });
        }

        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push((buffer >> bits) as u8);
        }
        buffer &= (1 << bits) - 1;
    }

    Ok(Base32Decoded {
        bytes,
        unused_bits: bits,
        unused_value: buffer as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        // RFC 4648 section 10, with padding stripped.
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "MY");
        assert_eq!(encode(b"fo"), "MZXQ");
        assert_eq!(encode(b"foo"), "MZXW6");
        assert_eq!(encode(b"foob"), "MZXW6YQ");
        assert_eq!(encode(b"fooba"), "MZXW6YTB");
        assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
    }

    #[test]
    fn test_decode_reports_unused_bits() {
        let decoded = decode("MZXW6YQ").unwrap();
        assert_eq!(decoded.bytes, b"foob");
        assert_eq!(decoded.unused_bits, 3);
        assert_eq!(decoded.unused_value, 0);
        assert!(!decoded.has_leftover_character());

        // 'R' = 0b10001: the low three bits of the final symbol are 0b001.
        let decoded = decode("MZXW6YR").unwrap();
        assert_eq!(decoded.bytes, b"foob");
        assert_eq!(decoded.unused_value, 1);
        assert!(decoded.has_nonzero_unused_bits());
    }

    #[test]
    fn test_decode_exact_multiple_has_no_unused_bits() {
        let decoded = decode("MZXW6YTB").unwrap();
        assert_eq!(decoded.bytes, b"fooba");
        assert_eq!(decoded.unused_bits, 0);
    }

    #[test]
    fn test_decode_detects_leftover_character() {
        // 8 symbols make 5 bytes; a ninth adds 5 bits and no byte.
        let decoded = decode("MZXW6YTBA").unwrap();
        assert_eq!(decoded.bytes, b"fooba");
        assert_eq!(decoded.unused_bits, 5);
        assert!(decoded.has_leftover_character());

        let decoded = decode("A").unwrap();
        assert!(decoded.bytes.is_empty());
        assert!(decoded.has_leftover_character());
    }

    #[test]
    fn test_decode_rejects_characters_outside_alphabet() {
        assert_eq!(
            decode("MZXW1").unwrap_err(),
            Base32Error::InvalidCharacter {
                character: '1',
                position: 4
            }
        );
        assert!(decode("mzxw6").is_err());
        assert!(decode("MZXW6===").is_err());
        assert!(matches!(
            decode("MZ\u{e9}").unwrap_err(),
            Base32Error::InvalidCharacter {
                character: '\u{e9}',
                ..
            }
        ));
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(35), 56);
        assert_eq!(encoded_len(43), 69);
        assert_eq!(encode(&[0xff; 43]).len(), 69);
    }
}
