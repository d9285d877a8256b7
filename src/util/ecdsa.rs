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

//! ECDSA signature support
//!
//! Conversion between the in-memory 64-byte `r||s` form and the DER
//! sequence carried in scripts, plus thin signing and verification
//! wrappers over the curve library and the per-coin pubkey hashing used
//! throughout script construction.

use secp256k1::{Message, PublicKey, Secp256k1, SecretKey, Signature, Signing, Verification};

use network::constants::CoinInfo;
use util::Error;

/// Keychain node boundary: the only capability the signing core needs.
pub trait HdNode {
    /// The node's secp256k1 secret key.
    fn private_key(&self) -> [u8; 32];
}

fn der_encode_integer(out: &mut Vec<u8>, int: &[u8]) {
    let mut start = 0;
    // Strip leading zeros but keep one byte for the zero integer.
    while start < int.len() - 1 && int[start] == 0 {
        start += 1;
    }
    let pad = int[start] & 0x80 != 0;
    out.push(0x02);
    out.push((int.len() - start + pad as usize) as u8);
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(&int[start..]);
}

/// Encodes a 64-byte `r||s` signature as a DER
/// `SEQUENCE { INTEGER r, INTEGER s }`.
pub fn der_encode_signature(signature: &[u8; 64]) -> Vec<u8> {
    let mut body = Vec::with_capacity(68);
    der_encode_integer(&mut body, &signature[..32]);
    der_encode_integer(&mut body, &signature[32..]);

    let mut out = Vec::with_capacity(2 + body.len());
    out.push(0x30);
    out.push(body.len() as u8);
    out.extend_from_slice(&body);
    out
}

/// Decodes a DER signature into a fresh left-zero-padded 64-byte `r||s`
/// buffer. Sequences that are not exactly two integers of at most 32
/// value bytes each fail with [`Error::InvalidSignature`].
pub fn der_decode_signature(der: &[u8]) -> Result<[u8; 64], Error> {
    if der.len() < 2 || der[0] != 0x30 || der[1] as usize != der.len() - 2 {
        return Err(Error::InvalidSignature);
    }

    let mut signature = [0u8; 64];
    let mut offset = 2;
    for part in 0..2 {
        if offset + 2 > der.len() || der[offset] != 0x02 {
            return Err(Error::InvalidSignature);
        }
        let len = der[offset + 1] as usize;
        offset += 2;
        if len == 0 || offset + len > der.len() {
            return Err(Error::InvalidSignature);
        }
        let mut int = &der[offset..offset + len];
        offset += len;

        while int.len() > 1 && int[0] == 0 {
            int = &int[1..];
        }
        if int.len() > 32 {
            return Err(Error::InvalidSignature);
        }
        let end = 32 * (part + 1);
        signature[end - int.len()..end].copy_from_slice(int);
    }
    if offset != der.len() {
        return Err(Error::InvalidSignature);
    }
    Ok(signature)
}

/// Signs a 32-byte digest with the node's key and returns the DER
/// encoded signature.
pub fn ecdsa_sign<C: Signing, N: HdNode>(
    secp: &Secp256k1<C>,
    node: &N,
    digest: &[u8],
) -> Result<Vec<u8>, Error> {
    let seckey = SecretKey::from_slice(&node.private_key())?;
    let msg = Message::from_slice(digest)?;
    let compact = secp.sign(&msg, &seckey).serialize_compact();
    Ok(der_encode_signature(&compact))
}

/// Verifies a DER signature over a 32-byte digest against a serialized
/// public key.
pub fn ecdsa_verify<C: Verification>(
    secp: &Secp256k1<C>,
    public_key: &[u8],
    der_signature: &[u8],
    digest: &[u8],
) -> Result<bool, Error> {
    let compact = der_decode_signature(der_signature)?;
    let signature = Signature::from_compact(&compact)?;
    let pubkey = PublicKey::from_slice(public_key)?;
    let msg = Message::from_slice(digest)?;
    Ok(secp.verify(&msg, &signature, &pubkey).is_ok())
}

/// Hashes a serialized public key with the coin's script-hash digest.
/// Accepts the compressed, uncompressed and point-at-infinity encodings.
pub fn ecdsa_hash_pubkey(pubkey: &[u8], coin: &CoinInfo) -> Result<[u8; 20], Error> {
    let well_formed = match pubkey.first() {
        Some(&0x04) => pubkey.len() == 65,
        Some(&0x00) => pubkey.len() == 1,
        Some(_) => pubkey.len() == 33,
        None => false,
    };
    if !well_formed {
        return Err(Error::InvalidPubkey);
    }
    Ok((coin.script_hash)(pubkey))
}

#[cfg(test)]
mod tests {
    use hashes::hex::{FromHex, ToHex};
    use secp256k1;

    use network::constants::BITCOIN;
    use super::*;

    struct TestNode([u8; 32]);

    impl HdNode for TestNode {
        fn private_key(&self) -> [u8; 32] {
            self.0
        }
    }

    #[test]
    fn der_encode_small_integers() {
        let mut sig = [0u8; 64];
        sig[31] = 0x01;
        sig[63] = 0x02;
        assert_eq!(der_encode_signature(&sig).to_hex(), "3006020101020102");
        assert_eq!(der_decode_signature(&Vec::from_hex("3006020101020102").unwrap()).unwrap(), sig);
    }

    #[test]
    fn der_encode_preserves_sign_byte() {
        let mut sig = [0u8; 64];
        sig[0] = 0x80;
        sig[63] = 0x7F;
        let der = der_encode_signature(&sig);
        // r needs a 0x00 pad byte, s does not.
        let mut expected = vec![0x30, 0x26, 0x02, 0x21, 0x00, 0x80];
        expected.extend_from_slice(&[0u8; 31]);
        expected.extend_from_slice(&[0x02, 0x01, 0x7F]);
        assert_eq!(der, expected);
        assert_eq!(der_decode_signature(&der).unwrap(), sig);
    }

    #[test]
    fn der_encode_zero_integer() {
        let sig = [0u8; 64];
        assert_eq!(der_encode_signature(&sig).to_hex(), "3006020100020100");
        assert_eq!(der_decode_signature(&der_encode_signature(&sig)).unwrap(), sig);
    }

    #[test]
    fn der_decode_rejects_malformed() {
        // Wrong outer tag.
        assert!(der_decode_signature(&Vec::from_hex("3106020101020102").unwrap()).is_err());
        // Outer length mismatch.
        assert!(der_decode_signature(&Vec::from_hex("3007020101020102").unwrap()).is_err());
        // Only one integer.
        assert!(der_decode_signature(&Vec::from_hex("3003020101").unwrap()).is_err());
        // Trailing byte after the second integer.
        assert!(der_decode_signature(&Vec::from_hex("300702010102010200").unwrap()).is_err());
        // 33-byte integer that is not a sign-padded value.
        let oversized = Vec::from_hex(
            "30260221ff0000000000000000000000000000000000000000000000000000000000000001020101",
        )
        .unwrap();
        assert!(der_decode_signature(&oversized).is_err());
        // Empty integer body.
        assert!(der_decode_signature(&Vec::from_hex("30050200020101").unwrap()).is_err());
    }

    #[test]
    fn sign_verify_roundtrip() {
        let secp = Secp256k1::new();
        let node = TestNode([0x01; 32]);
        let digest = [0xAB; 32];

        let der = ecdsa_sign(&secp, &node, &digest).unwrap();
        // Our DER output must parse with the curve library as well.
        assert!(secp256k1::Signature::from_der(&der).is_ok());

        let seckey = SecretKey::from_slice(&node.private_key()).unwrap();
        let pubkey = PublicKey::from_secret_key(&secp, &seckey).serialize();
        assert_eq!(ecdsa_verify(&secp, &pubkey, &der, &digest).unwrap(), true);
        assert_eq!(ecdsa_verify(&secp, &pubkey, &der, &[0xAC; 32]).unwrap(), false);
    }

    #[test]
    fn hash_pubkey_encodings() {
        // Generator point, compressed.
        let compressed = Vec::from_hex(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        assert_eq!(
            ecdsa_hash_pubkey(&compressed, &BITCOIN).unwrap().to_vec(),
            Vec::from_hex("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap()
        );

        let uncompressed = [0x04; 65];
        assert!(ecdsa_hash_pubkey(&uncompressed, &BITCOIN).is_ok());
        assert!(ecdsa_hash_pubkey(&[0x00], &BITCOIN).is_ok());

        assert_eq!(
            ecdsa_hash_pubkey(&[0x02; 32], &BITCOIN),
            Err(Error::InvalidPubkey)
        );
        assert_eq!(ecdsa_hash_pubkey(&[], &BITCOIN), Err(Error::InvalidPubkey));
    }
}
