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

//! Addresses
//!
//! Decoding of bech32 (SegWit v0), base58check and CashAddr addresses
//! into raw `{version, program}` material for the output script
//! constructors. Address rendering for display is not a concern of this
//! core; only the bech32 encoder exists, for self-checks.

use bech32::{self, u5, FromBase32, ToBase32, Variant};

use network::constants::CoinInfo;
use util::{base58, cashaddr, Error};

// Supported witness version for bech32 addresses.
const BECH32_WITVER: u8 = 0x00;

/// Decodes a bech32 address with the expected human-readable prefix,
/// returning the witness program. Only witness version 0 programs of 20
/// or 32 bytes are accepted.
pub fn decode_bech32_address(prefix: &str, address: &str) -> Result<Vec<u8>, Error> {
    let (hrp, payload, variant) = bech32::decode(address)?;
    if hrp != prefix || variant != Variant::Bech32 || payload.is_empty() {
        return Err(Error::InvalidWitnessProgram);
    }

    let (witver, program5) = payload.split_at(1);
    if witver[0].to_u8() != BECH32_WITVER {
        return Err(Error::InvalidWitnessProgram);
    }

    let program = Vec::<u8>::from_base32(program5)?;
    if program.len() != 20 && program.len() != 32 {
        return Err(Error::InvalidWitnessProgram);
    }
    Ok(program)
}

/// Encodes a 20- or 32-byte witness program as a version-0 bech32
/// address under the given prefix.
pub fn encode_bech32_address(prefix: &str, program: &[u8]) -> Result<String, Error> {
    if program.len() != 20 && program.len() != 32 {
        return Err(Error::InvalidWitnessProgram);
    }
    let mut payload = vec![u5::try_from_u8(BECH32_WITVER).expect("witness version 0 is 5 bit")];
    payload.extend(program.to_base32());
    Ok(bech32::encode(prefix, payload, Variant::Bech32)?)
}

/// Decodes a base58check address with the coin's checksum digest,
/// returning the raw versioned payload.
pub fn decode_base58_address(address: &str, coin: &CoinInfo) -> Result<Vec<u8>, Error> {
    Ok(base58::from_check(address, coin.b58_hash)?)
}

/// Decodes the payload part of a CashAddr and translates its inner
/// version into the coin's base58 address types, returning the raw
/// versioned payload as if it had been base58check-decoded.
pub fn decode_cashaddr_address(
    prefix: &str,
    payload: &str,
    coin: &CoinInfo,
) -> Result<Vec<u8>, Error> {
    let (version, data) = cashaddr::decode(prefix, payload)?;
    let address_type = match version {
        cashaddr::ADDRESS_TYPE_P2KH => coin.address_type,
        cashaddr::ADDRESS_TYPE_P2SH => coin.address_type_p2sh,
        _ => return Err(Error::InvalidAddress),
    };
    let mut raw = address_type_bytes(address_type);
    raw.extend_from_slice(&data);
    Ok(raw)
}

/// Number of bytes an address-type prefix occupies.
pub fn address_type_length(address_type: u32) -> usize {
    if address_type <= 0xFF {
        1
    } else if address_type <= 0xFFFF {
        2
    } else if address_type <= 0xFF_FFFF {
        3
    } else {
        4
    }
}

/// Big-endian bytes of an address-type prefix, without leading zeros
/// beyond its natural width.
pub fn address_type_bytes(address_type: u32) -> Vec<u8> {
    let length = address_type_length(address_type);
    address_type.to_be_bytes()[4 - length..].to_vec()
}

/// Whether the raw address payload starts with the given address type.
pub fn check_address_type(address_type: u32, raw_address: &[u8]) -> bool {
    let prefix = address_type_bytes(address_type);
    raw_address.len() > prefix.len() && raw_address[..prefix.len()] == prefix[..]
}

/// Strips a verified address-type prefix from a raw address payload.
pub fn strip_address_type<'a>(address_type: u32, raw_address: &'a [u8]) -> Result<&'a [u8], Error> {
    if !check_address_type(address_type, raw_address) {
        return Err(Error::InvalidAddressType);
    }
    Ok(&raw_address[address_type_length(address_type)..])
}
