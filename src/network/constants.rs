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

//! Coin constants
//!
//! Per-coin policy records consumed by the script constructors and the
//! address codec. Only the fields the core actually reads are modeled;
//! the full table lives with the firmware build.

use hashes::{hash160, sha256d, Hash};

/// Address and script policy for one supported coin.
#[derive(Clone, Copy, Debug)]
pub struct CoinInfo {
    /// Canonical coin name, also the authorization matching key.
    pub coin_name: &'static str,
    /// Ticker used in confirmation prompts.
    pub coin_shortcut: &'static str,
    /// Number of decimal places in amount formatting.
    pub decimals: u32,
    /// Base58 address-type prefix for P2PKH. May be wider than one byte.
    pub address_type: u32,
    /// Base58 address-type prefix for P2SH.
    pub address_type_p2sh: u32,
    /// Human-readable part of bech32 addresses, if the coin has SegWit.
    pub bech32_prefix: Option<&'static str>,
    /// CashAddr prefix, for Bitcoin Cash style coins.
    pub cashaddr_prefix: Option<&'static str>,
    /// Decred inherits different CHECKMULTISIG semantics and drops the
    /// leading OP_FALSE in multisig scriptSigs.
    pub decred: bool,
    /// Name of the signing curve.
    pub curve_name: &'static str,
    /// Digest used for the base58check checksum.
    pub b58_hash: fn(&[u8]) -> [u8; 32],
    /// Digest turning a public key into a 20-byte script hash.
    pub script_hash: fn(&[u8]) -> [u8; 20],
}

fn sha256d_checksum(data: &[u8]) -> [u8; 32] {
    sha256d::Hash::hash(data).into_inner()
}

fn hash_160(data: &[u8]) -> [u8; 20] {
    hash160::Hash::hash(data).into_inner()
}

/// Bitcoin mainnet.
pub const BITCOIN: CoinInfo = CoinInfo {
    coin_name: "Bitcoin",
    coin_shortcut: "BTC",
    decimals: 8,
    address_type: 0,
    address_type_p2sh: 5,
    bech32_prefix: Some("bc"),
    cashaddr_prefix: None,
    decred: false,
    curve_name: "secp256k1",
    b58_hash: sha256d_checksum,
    script_hash: hash_160,
};

/// Bitcoin testnet and signet.
pub const TESTNET: CoinInfo = CoinInfo {
    coin_name: "Testnet",
    coin_shortcut: "TEST",
    decimals: 8,
    address_type: 111,
    address_type_p2sh: 196,
    bech32_prefix: Some("tb"),
    cashaddr_prefix: None,
    decred: false,
    curve_name: "secp256k1",
    b58_hash: sha256d_checksum,
    script_hash: hash_160,
};

/// Bitcoin Cash mainnet.
pub const BITCOIN_CASH: CoinInfo = CoinInfo {
    coin_name: "Bcash",
    coin_shortcut: "BCH",
    decimals: 8,
    address_type: 0,
    address_type_p2sh: 5,
    bech32_prefix: None,
    cashaddr_prefix: Some("bitcoincash"),
    decred: false,
    curve_name: "secp256k1",
    b58_hash: sha256d_checksum,
    script_hash: hash_160,
};

#[cfg(test)]
mod tests {
    use hashes::hex::FromHex;

    use super::*;

    #[test]
    fn bitcoin_digests() {
        // HASH160 of the generator-point pubkey.
        let pubkey = Vec::from_hex(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        let hash = (BITCOIN.script_hash)(&pubkey);
        assert_eq!(
            hash.to_vec(),
            Vec::from_hex("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap()
        );
    }

    #[test]
    fn coin_tables_are_distinct() {
        assert_ne!(BITCOIN.address_type, BITCOIN.address_type_p2sh);
        assert_ne!(TESTNET.address_type, TESTNET.address_type_p2sh);
        assert!(BITCOIN_CASH.cashaddr_prefix.is_some());
        assert!(BITCOIN_CASH.bech32_prefix.is_none());
    }
}
