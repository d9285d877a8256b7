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

//! # Rust Bitcoin Signer Library
//!
//! The transaction construction core of a hardware signing device:
//! byte-exact constructors and parsers for Bitcoin input scripts,
//! output scripts and SegWit witnesses across the supported script
//! types, the BIP-143 scriptCode rules, the multisig redeem script
//! model, address decoding for the Bitcoin family of coins, and the
//! user-consented CoinJoin authorization flow.
//!
//! Key derivation, curve arithmetic, hashing primitives and the user
//! interface are deliberately outside this crate; they are reached
//! through the `secp256k1`, `bitcoin_hashes` and `bech32` crates and
//! through narrow traits the embedding firmware implements.

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]
#![deny(unused_must_use)]

pub extern crate bech32;
pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

pub mod blockdata;
pub mod consensus;
pub mod network;
pub mod util;

pub use blockdata::opcodes;
pub use blockdata::script::{
    bip143_derive_script_code, input_derive_script, output_derive_script, InputScriptType,
    OutputScriptType, SIGHASH_ALL,
};
pub use consensus::encode::{HashWriter, Writer};
pub use network::constants::CoinInfo;
pub use util::coinjoin::{
    authorize_coinjoin, AuthorizeCoinJoin, CoinJoinAuthorization, PathValidator, Success,
    UserInterface,
};
pub use util::ecdsa::{ecdsa_hash_pubkey, ecdsa_sign, ecdsa_verify, HdNode};
pub use util::multisig::{MultisigPubkey, MultisigRedeemScript};
pub use util::session::Session;
pub use util::{Error, ErrorKind};
