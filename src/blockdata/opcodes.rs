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

//! Opcodes
//!
//! The subset of Bitcoin script opcodes emitted and recognized by the
//! supported script templates.

/// Push an empty array onto the stack (also known as `OP_FALSE`).
pub const OP_PUSHBYTES_0: u8 = 0x00;
/// Read the next byte as a data length and push that many bytes.
pub const OP_PUSHDATA1: u8 = 0x4C;
/// Read the next two bytes (LE) as a data length and push that many bytes.
pub const OP_PUSHDATA2: u8 = 0x4D;
/// Read the next four bytes (LE) as a data length and push that many bytes.
pub const OP_PUSHDATA4: u8 = 0x4E;
/// Push the number 1 onto the stack; numbers up to 16 follow consecutively.
pub const OP_PUSHNUM_1: u8 = 0x51;
/// Push the number 16 onto the stack.
pub const OP_PUSHNUM_16: u8 = 0x60;
/// Fail the script immediately; used to embed data in outputs.
pub const OP_RETURN: u8 = 0x6A;
/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;
/// Pop two items and push 1 if they are equal, 0 otherwise.
pub const OP_EQUAL: u8 = 0x87;
/// Like `OP_EQUAL` but fail the script on inequality.
pub const OP_EQUALVERIFY: u8 = 0x88;
/// Pop the top item and push its RIPEMD160(SHA256) hash.
pub const OP_HASH160: u8 = 0xA9;
/// Pop a pubkey and signature and verify the signature.
pub const OP_CHECKSIG: u8 = 0xAC;
/// Pop m signatures and n pubkeys and verify an m-of-n threshold. Pops
/// one extra item due to an original-implementation bug, which is why
/// every multisig spend leads with `OP_FALSE`.
pub const OP_CHECKMULTISIG: u8 = 0xAE;
