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

//! Utility functions
//!
//! Shared error type and helper modules used by the script construction
//! core and the authorization flow.

pub mod address;
pub mod amount;
pub mod base58;
pub mod cashaddr;
pub mod coinjoin;
pub mod ecdsa;
pub mod multisig;
pub mod session;

use std::error;
use std::fmt;

use bech32;
use secp256k1;

/// The classes of failure the request handler distinguishes. Every
/// [`Error`] variant maps onto exactly one kind; nothing is retried at
/// this layer and all errors bubble up to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request or script data.
    Data,
    /// Well-formed data that is semantically impossible to act on.
    Process,
    /// Signature encoding or verification failure.
    Signature,
    /// Derivation path rejected by the keychain policy.
    Path,
    /// The user declined a confirmation prompt.
    Cancelled,
}

/// A failure surfaced by the signing core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data ended in the middle of an encoded element.
    UnexpectedEnd,
    /// A compact-size integer uses the unsupported `0xFF` prefix or is
    /// otherwise malformed.
    InvalidVarInt,
    /// A script push opcode is not in the `OP_PUSHBYTES`/`OP_PUSHDATA` family.
    InvalidOpPush,
    /// A scriptSig does not have the expected shape.
    InvalidScriptSig,
    /// A witness stack does not have the expected shape.
    InvalidWitness,
    /// Multisig threshold, key count, key length or signature slots are
    /// out of bounds.
    InvalidMultisigParameters,
    /// An output script claimed to be CHECKMULTISIG but is not.
    InvalidMultisigScript,
    /// A pubkey or script hash has the wrong length for its script slot.
    InvalidHashLength,
    /// A public key is neither compressed, uncompressed nor the point at
    /// infinity.
    InvalidPubkey,
    /// A signature is required for this script type but none was supplied.
    MissingSignature,
    /// A base58 or CashAddr address failed to decode.
    InvalidAddress,
    /// A decoded address carries an address-type prefix unknown to the coin.
    InvalidAddressType,
    /// A bech32 address carries a witness version or program this core
    /// does not produce.
    InvalidWitnessProgram,
    /// The CoinJoin coordinator name is empty, too long or not printable
    /// ASCII.
    InvalidCoordinator,
    /// The script type has no construction rule in the requested context.
    UnknownScriptType,
    /// DER signature decoding failure or over-long integer.
    InvalidSignature,
    /// The derivation path is outside the coin's allowed tree.
    InvalidPath,
    /// The user declined a confirmation prompt.
    Cancelled,
    /// Base58 decoding error.
    Base58(base58::Error),
    /// Bech32 decoding error.
    Bech32(bech32::Error),
    /// Curve operation error.
    Secp256k1(secp256k1::Error),
}

impl Error {
    /// Returns the request-handler class of this error.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::UnexpectedEnd
            | Error::InvalidVarInt
            | Error::InvalidOpPush
            | Error::InvalidScriptSig
            | Error::InvalidWitness
            | Error::InvalidMultisigParameters
            | Error::InvalidMultisigScript
            | Error::InvalidHashLength
            | Error::InvalidPubkey
            | Error::MissingSignature
            | Error::InvalidAddress
            | Error::InvalidAddressType
            | Error::InvalidCoordinator
            | Error::Base58(_) => ErrorKind::Data,
            Error::InvalidWitnessProgram
            | Error::UnknownScriptType
            | Error::Bech32(_) => ErrorKind::Process,
            Error::InvalidSignature | Error::Secp256k1(_) => ErrorKind::Signature,
            Error::InvalidPath => ErrorKind::Path,
            Error::Cancelled => ErrorKind::Cancelled,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnexpectedEnd => f.write_str("unexpected end of data"),
            Error::InvalidVarInt => f.write_str("invalid VarInt"),
            Error::InvalidOpPush => f.write_str("invalid OP_PUSH"),
            Error::InvalidScriptSig => f.write_str("invalid scriptSig"),
            Error::InvalidWitness => f.write_str("invalid witness"),
            Error::InvalidMultisigParameters => f.write_str("invalid multisig parameters"),
            Error::InvalidMultisigScript => f.write_str("invalid multisig script"),
            Error::InvalidHashLength => f.write_str("invalid hash length for script"),
            Error::InvalidPubkey => f.write_str("invalid public key encoding"),
            Error::MissingSignature => f.write_str("signature required but not provided"),
            Error::InvalidAddress => f.write_str("invalid address"),
            Error::InvalidAddressType => f.write_str("invalid address type"),
            Error::InvalidWitnessProgram => f.write_str("invalid address witness program"),
            Error::InvalidCoordinator => f.write_str("invalid coordinator name"),
            Error::UnknownScriptType => f.write_str("unknown script type"),
            Error::InvalidSignature => f.write_str("invalid DER signature"),
            Error::InvalidPath => f.write_str("forbidden key path"),
            Error::Cancelled => f.write_str("cancelled by user"),
            Error::Base58(ref e) => write!(f, "base58: {}", e),
            Error::Bech32(ref e) => write!(f, "bech32: {}", e),
            Error::Secp256k1(ref e) => write!(f, "secp256k1: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Base58(ref e) => Some(e),
            Error::Bech32(ref e) => Some(e),
            Error::Secp256k1(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<base58::Error> for Error {
    fn from(e: base58::Error) -> Error {
        Error::Base58(e)
    }
}

#[doc(hidden)]
impl From<bech32::Error> for Error {
    fn from(e: bech32::Error) -> Error {
        Error::Bech32(e)
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::Secp256k1(e)
    }
}
