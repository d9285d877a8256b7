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

//! Multisig redeem script model
//!
//! The m-of-n CHECKMULTISIG arrangement as supplied by the coordinating
//! wallet. Key order is the coordinator's order; the device never sorts
//! (a protocol contract, since reordering would change the script hash
//! everyone committed to).

use util::Error;

/// One signer of a multisig arrangement: the public key resolved by the
/// keychain together with the derivation suffix it was resolved at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisigPubkey {
    /// 33-byte compressed public key.
    pub public_key: Vec<u8>,
    /// BIP-32 derivation suffix relative to the signer's account node.
    pub address_n: Vec<u32>,
}

/// An m-of-n multisig redeem script with per-signer signature slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisigRedeemScript {
    /// Signers, in coordinator-given order.
    pub pubkeys: Vec<MultisigPubkey>,
    /// Signature slots parallel to `pubkeys`. An empty vector marks an
    /// unfilled slot; the list may arrive shorter than `pubkeys` and is
    /// padded before use.
    pub signatures: Vec<Vec<u8>>,
    /// Signature threshold.
    pub m: usize,
}

impl MultisigRedeemScript {
    /// Number of participating public keys (n).
    pub fn pubkey_count(&self) -> usize {
        self.pubkeys.len()
    }

    /// The resolved public keys, each checked to be 33 bytes.
    pub fn pubkeys(&self) -> Result<Vec<&[u8]>, Error> {
        let mut keys = Vec::with_capacity(self.pubkeys.len());
        for pubkey in &self.pubkeys {
            if pubkey.public_key.len() != 33 {
                return Err(Error::InvalidMultisigParameters);
            }
            keys.push(&pubkey.public_key[..]);
        }
        Ok(keys)
    }

    /// Position of the given public key among the signers.
    pub fn pubkey_index(&self, public_key: &[u8]) -> Result<usize, Error> {
        self.pubkeys
            .iter()
            .position(|pubkey| pubkey.public_key == public_key)
            .ok_or(Error::InvalidMultisigParameters)
    }

    /// A copy of the signature slots stretched with empty sentinels to
    /// the number of pubkeys. Copying keeps the caller's structure
    /// unaliased when a builder fills in its own slot.
    pub fn padded_signatures(&self) -> Vec<Vec<u8>> {
        let mut signatures = self.signatures.clone();
        signatures.resize(self.pubkeys.len(), Vec::new());
        signatures
    }
}
