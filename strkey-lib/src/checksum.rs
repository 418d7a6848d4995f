//! CRC-16/XMODEM checksum utilities.
//!
//! Polynomial 0x1021, initial value 0, no reflection, no final xor. The
//! checksum is appended little-endian.

/// Generator polynomial.
pub const POLYNOMIAL: u16 = 0x1021;

/// Serialized checksum length in bytes.
pub const CHECKSUM_LEN: usize = 2;

const TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Computes the CRC-16/XMODEM of `data`.
pub fn checksum(data: &[u8]) -> u16 {
    update(0, data)
}

/// Extends a prior CRC with more bytes, i.e. `crc(data0 || data1)`.
pub fn update(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| {
        (crc << 8) ^ TABLE[usize::from((crc >> 8) as u8 ^ byte)]
    })
}

/// Appends the little-endian checksum of `data` to it in place.
pub fn append_checksum(data: &mut Vec<u8>) {
    let crc = checksum(data);
    data.extend_from_slice(&crc.to_le_bytes());
}

/// Splits `record` into body and trailing checksum and recomputes it.
///
/// Returns `(body, computed, carried)`; the caller decides what a mismatch
/// means. `None` when the record is shorter than a checksum.
pub fn split_checksum(record: &[u8]) -> Option<(&[u8], u16, u16)> {
    if record.len() < CHECKSUM_LEN {
        return None;
    }
    let (body, tail) = record.split_at(record.len() - CHECKSUM_LEN);
    let carried = u16::from_le_bytes([tail[0], tail[1]]);
    Some((body, checksum(body), carried))
}
