// Rust Bitcoin Library
// Written by
//   The Rust Bitcoin developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! CashAddr decoder
//!
//! The `prefix:payload` address format used by Bitcoin Cash and its
//! descendants. Shares the bech32 character set and 5-bit grouping but
//! uses a 40-bit BCH checksum over the expanded prefix and payload.

use bech32::{u5, FromBase32};

use util::Error;

/// Inner version byte for key-hash (P2PKH-style) payloads.
pub const ADDRESS_TYPE_P2KH: u8 = 0x00;
/// Inner version byte for script-hash (P2SH-style) payloads.
pub const ADDRESS_TYPE_P2SH: u8 = 0x08;

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const CHECKSUM_LEN: usize = 8;

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x0007_FFFF_FFFF) << 5) ^ d as u64;
        if c0 & 0x01 != 0 {
            c ^= 0x98_F2BC_8E61;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x79_B76D_99E2;
        }
        if c0 & 0x04 != 0 {
            c ^= 0xF3_3E5F_B3C4;
        }
        if c0 & 0x08 != 0 {
            c ^= 0xAE_2EAB_E2A8;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x1E_4F43_E470;
        }
    }
    c ^ 1
}

fn prefix_expand(prefix: &str) -> Vec<u8> {
    prefix.bytes().map(|b| b & 0x1F).chain(Some(0)).collect()
}

/// Decodes the payload part of a CashAddr (the text after the colon)
/// against the given prefix, returning the inner version byte and the
/// raw hash.
pub fn decode(prefix: &str, payload: &str) -> Result<(u8, Vec<u8>), Error> {
    let payload = payload.to_lowercase();
    let mut values = Vec::with_capacity(payload.len());
    for ch in payload.bytes() {
        match CHARSET.iter().position(|&c| c == ch) {
            Some(v) => values.push(v as u8),
            None => return Err(Error::InvalidAddress),
        }
    }
    if values.len() <= CHECKSUM_LEN {
        return Err(Error::InvalidAddress);
    }

    let mut checked = prefix_expand(prefix);
    checked.extend_from_slice(&values);
    if polymod(&checked) != 0 {
        return Err(Error::InvalidAddress);
    }

    let data5: Vec<u5> = values[..values.len() - CHECKSUM_LEN]
        .iter()
        .map(|&v| u5::try_from_u8(v).expect("charset indexes are 5 bit"))
        .collect();
    let data = Vec::<u8>::from_base32(&data5).map_err(|_| Error::InvalidAddress)?;
    if data.is_empty() {
        return Err(Error::InvalidAddress);
    }

    let version = data[0];
    if version & 0x80 != 0 {
        return Err(Error::InvalidAddress);
    }
    Ok((version, data[1..].to_vec()))
}

#[cfg(test)]
mod tests {
    use hashes::hex::FromHex;

    use super::*;

    #[test]
    fn decode_p2kh() {
        // Legacy 1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu
        let (version, hash) =
            decode("bitcoincash", "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a").unwrap();
        assert_eq!(version, ADDRESS_TYPE_P2KH);
        assert_eq!(
            hash,
            Vec::from_hex("76a04053bda0a88bda5177b86a15c3b29f559873").unwrap()
        );
    }

    #[test]
    fn decode_p2sh() {
        // Legacy 3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC
        let (version, hash) =
            decode("bitcoincash", "ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq").unwrap();
        assert_eq!(version, ADDRESS_TYPE_P2SH);
        assert_eq!(
            hash,
            Vec::from_hex("76a04053bda0a88bda5177b86a15c3b29f559873").unwrap()
        );
    }

    #[test]
    fn decode_rejects_bad_checksum() {
        assert_eq!(
            decode("bitcoincash", "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx7a"),
            Err(Error::InvalidAddress)
        );
    }

    #[test]
    fn decode_rejects_wrong_prefix() {
        assert_eq!(
            decode("bchtest", "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"),
            Err(Error::InvalidAddress)
        );
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        assert_eq!(decode("bitcoincash", "qpm2b"), Err(Error::InvalidAddress));
    }
}
