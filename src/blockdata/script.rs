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

//! Scripts
//!
//! Construction and parsing of the scriptSigs, scriptPubkeys and
//! witnesses of every supported spend type, together with the BIP-143
//! scriptCode used during SegWit digest computation. Everything here is
//! pure and byte-exact; the resulting buffers are serialized into the
//! transaction verbatim.
//!
//! Relevant BIPs:
//!
//! * [BIP-16](https://github.com/bitcoin/bips/blob/master/bip-0016.mediawiki) pay to script hash
//! * [BIP-141](https://github.com/bitcoin/bips/blob/master/bip-0141.mediawiki) segregated witness
//! * [BIP-143](https://github.com/bitcoin/bips/blob/master/bip-0143.mediawiki) segwit signature digests

use hashes::{sha256, Hash};

use blockdata::opcodes;
use consensus::encode::{
    read_bitcoin_varint, read_op_push, write_bitcoin_varint, write_op_push, HashWriter, Writer,
};
use network::constants::CoinInfo;
use util::ecdsa::ecdsa_hash_pubkey;
use util::multisig::MultisigRedeemScript;
use util::{address, Error};

/// Default signature hash type, committing to all inputs and outputs.
pub const SIGHASH_ALL: u8 = 0x01;

/// The spending method of a transaction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputScriptType {
    /// Legacy pay-to-pubkey-hash spend.
    SpendAddress,
    /// Legacy pay-to-script-hash multisig spend.
    SpendMultisig,
    /// P2WPKH or P2WSH program nested in P2SH for compatibility.
    SpendP2shWitness,
    /// Native SegWit v0 spend.
    SpendWitness,
    /// Input signed outside this device; only its scriptCode is ever
    /// derived here.
    External,
}

/// The script form of a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputScriptType {
    /// Pay to a plain address (P2PKH or P2SH, decided by the address).
    PayToAddress,
    /// Pay to a legacy multisig P2SH script.
    PayToMultisig,
    /// Pay to a SegWit program nested in P2SH.
    PayToP2shWitness,
    /// Pay to a native SegWit program.
    PayToWitness,
    /// Provably unspendable data-carrier output.
    PayToOpReturn,
}

impl OutputScriptType {
    const ALL: [OutputScriptType; 5] = [
        OutputScriptType::PayToAddress,
        OutputScriptType::PayToMultisig,
        OutputScriptType::PayToP2shWitness,
        OutputScriptType::PayToWitness,
        OutputScriptType::PayToOpReturn,
    ];

    /// The input type a change output of this form will be spent with.
    /// This mapping is canonical; every other partition of the script
    /// types derives from it.
    pub fn internal_input_type(self) -> Option<InputScriptType> {
        match self {
            OutputScriptType::PayToAddress => Some(InputScriptType::SpendAddress),
            OutputScriptType::PayToMultisig => Some(InputScriptType::SpendMultisig),
            OutputScriptType::PayToP2shWitness => Some(InputScriptType::SpendP2shWitness),
            OutputScriptType::PayToWitness => Some(InputScriptType::SpendWitness),
            OutputScriptType::PayToOpReturn => None,
        }
    }

    /// Whether outputs of this form may be recognized as change.
    pub fn is_change_type(self) -> bool {
        self.internal_input_type().is_some()
    }

    /// Whether outputs of this form may carry a multisig arrangement.
    pub fn supports_multisig(self) -> bool {
        match self {
            OutputScriptType::PayToMultisig
            | OutputScriptType::PayToP2shWitness
            | OutputScriptType::PayToWitness => true,
            OutputScriptType::PayToAddress | OutputScriptType::PayToOpReturn => false,
        }
    }
}

impl InputScriptType {
    /// Whether inputs of this type can belong to the device's own
    /// wallet, i.e. appear as the spend side of a change output.
    pub fn is_internal(self) -> bool {
        OutputScriptType::ALL
            .iter()
            .any(|output| output.internal_input_type() == Some(self))
    }

    /// SegWit spends keep their signature material in the witness.
    pub fn is_segwit(self) -> bool {
        match self {
            InputScriptType::SpendP2shWitness | InputScriptType::SpendWitness => true,
            _ => false,
        }
    }

    /// Legacy spends carry everything in the scriptSig.
    pub fn is_nonsegwit(self) -> bool {
        match self {
            InputScriptType::SpendAddress | InputScriptType::SpendMultisig => true,
            _ => false,
        }
    }

    /// Whether inputs of this type may carry a multisig arrangement.
    pub fn supports_multisig(self) -> bool {
        match self {
            InputScriptType::SpendMultisig
            | InputScriptType::SpendP2shWitness
            | InputScriptType::SpendWitness => true,
            InputScriptType::SpendAddress | InputScriptType::External => false,
        }
    }
}

/// Derives the scriptSig of an input about to be serialized.
///
/// SegWit inputs get their signature via the witness instead, so for
/// them `signature` may be absent.
pub fn input_derive_script(
    script_type: InputScriptType,
    multisig: Option<&MultisigRedeemScript>,
    coin: &CoinInfo,
    hash_type: u8,
    pubkey: &[u8],
    signature: Option<&[u8]>,
) -> Result<Vec<u8>, Error> {
    match script_type {
        InputScriptType::SpendAddress => {
            let signature = signature.ok_or(Error::MissingSignature)?;
            Ok(input_script_p2pkh_or_p2sh(pubkey, signature, hash_type))
        }
        InputScriptType::SpendP2shWitness => {
            if let Some(multisig) = multisig {
                // P2WSH in P2SH commits to the SHA256 of the witness script.
                let pubkeys = multisig.pubkeys()?;
                let mut hasher = HashWriter::new(sha256::Hash::engine());
                write_output_script_multisig(&mut hasher, &pubkeys, multisig.m)?;
                let witness_script_hash = sha256::Hash::from_engine(hasher.into_inner());
                input_script_p2wsh_in_p2sh(&witness_script_hash[..])
            } else {
                let pubkeyhash = ecdsa_hash_pubkey(pubkey, coin)?;
                input_script_p2wpkh_in_p2sh(&pubkeyhash)
            }
        }
        InputScriptType::SpendWitness => Ok(input_script_native_p2wpkh_or_p2wsh()),
        InputScriptType::SpendMultisig => {
            let multisig = multisig.ok_or(Error::InvalidMultisigParameters)?;
            let signature = signature.ok_or(Error::MissingSignature)?;
            let signature_index = multisig.pubkey_index(pubkey)?;
            input_script_multisig(multisig, signature, signature_index, hash_type, coin)
        }
        InputScriptType::External => Err(Error::UnknownScriptType),
    }
}

/// Derives the scriptPubkey paying to the given address.
pub fn output_derive_script(address: &str, coin: &CoinInfo) -> Result<Vec<u8>, Error> {
    if let Some(prefix) = coin.bech32_prefix {
        if address.starts_with(prefix) {
            let witprog = address::decode_bech32_address(prefix, address)?;
            return output_script_native_p2wpkh_or_p2wsh(&witprog);
        }
    }

    let raw_address = match coin.cashaddr_prefix {
        Some(prefix)
            if address.starts_with(prefix)
                && address.as_bytes().get(prefix.len()) == Some(&b':') =>
        {
            address::decode_cashaddr_address(prefix, &address[prefix.len() + 1..], coin)?
        }
        _ => address::decode_base58_address(address, coin)?,
    };

    if address::check_address_type(coin.address_type, &raw_address) {
        let pubkeyhash = address::strip_address_type(coin.address_type, &raw_address)?;
        output_script_p2pkh(pubkeyhash)
    } else if address::check_address_type(coin.address_type_p2sh, &raw_address) {
        let scripthash = address::strip_address_type(coin.address_type_p2sh, &raw_address)?;
        output_script_p2sh(scripthash)
    } else {
        Err(Error::InvalidAddressType)
    }
}

/// Derives the BIP-143 scriptCode substituted into the SegWit signature
/// digest (specification item 5).
pub fn bip143_derive_script_code(
    script_type: InputScriptType,
    public_keys: &[&[u8]],
    threshold: usize,
    coin: &CoinInfo,
) -> Result<Vec<u8>, Error> {
    if public_keys.len() > 1 {
        return output_script_multisig(public_keys, threshold);
    }

    match script_type {
        // For p2wpkh in p2sh, native p2wpkh, plain p2pkh and external
        // inputs the scriptCode is a classic p2pkh script.
        InputScriptType::SpendWitness
        | InputScriptType::SpendP2shWitness
        | InputScriptType::SpendAddress
        | InputScriptType::External => match public_keys.first() {
            Some(pubkey) => output_script_p2pkh(&ecdsa_hash_pubkey(pubkey, coin)?),
            None => Err(Error::UnknownScriptType),
        },
        InputScriptType::SpendMultisig => Err(Error::UnknownScriptType),
    }
}

/// scriptSig of a P2PKH (or single-sig P2SH) spend:
/// `<signature+hashtype> <pubkey>`.
pub fn input_script_p2pkh_or_p2sh(pubkey: &[u8], signature: &[u8], hash_type: u8) -> Vec<u8> {
    let mut w = Vec::with_capacity(5 + signature.len() + 1 + 5 + pubkey.len());
    append_signature(&mut w, signature, hash_type);
    append_pubkey(&mut w, pubkey);
    w
}

/// Parses a P2PKH scriptSig back into its pubkey and signature.
pub fn read_input_script_p2pkh(
    script_sig: &[u8],
) -> Result<(Vec<Vec<u8>>, Vec<(Vec<u8>, u8)>), Error> {
    let (n, offset) = read_op_push(script_sig, 0)?;
    if n < 1 || offset + n > script_sig.len() {
        return Err(Error::InvalidScriptSig);
    }
    let signature = script_sig[offset..offset + n - 1].to_vec();
    let sighash_type = script_sig[offset + n - 1];
    let offset = offset + n;

    let (n, offset) = read_op_push(script_sig, offset)?;
    if offset.checked_add(n) != Some(script_sig.len()) {
        return Err(Error::InvalidScriptSig);
    }
    let pubkey = script_sig[offset..].to_vec();

    Ok((vec![pubkey], vec![(signature, sighash_type)]))
}

/// P2PKH scriptPubkey: `OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG`.
pub fn output_script_p2pkh(pubkeyhash: &[u8]) -> Result<Vec<u8>, Error> {
    if pubkeyhash.len() != 20 {
        return Err(Error::InvalidHashLength);
    }
    let mut s = Vec::with_capacity(25);
    s.push(opcodes::OP_DUP);
    s.push(opcodes::OP_HASH160);
    s.push(0x14);
    s.extend_from_slice(pubkeyhash);
    s.push(opcodes::OP_EQUALVERIFY);
    s.push(opcodes::OP_CHECKSIG);
    Ok(s)
}

/// P2SH scriptPubkey: `OP_HASH160 <20> OP_EQUAL`.
pub fn output_script_p2sh(scripthash: &[u8]) -> Result<Vec<u8>, Error> {
    if scripthash.len() != 20 {
        return Err(Error::InvalidHashLength);
    }
    let mut s = Vec::with_capacity(23);
    s.push(opcodes::OP_HASH160);
    s.push(0x14);
    s.extend_from_slice(scripthash);
    s.push(opcodes::OP_EQUAL);
    Ok(s)
}

/// Native SegWit spends have an empty scriptSig; everything lives in
/// the witness.
pub fn input_script_native_p2wpkh_or_p2wsh() -> Vec<u8> {
    Vec::new()
}

/// Native SegWit scriptPubkey: version byte followed by the pushed
/// 20-byte key hash (P2WPKH) or 32-byte script hash (P2WSH).
pub fn output_script_native_p2wpkh_or_p2wsh(witprog: &[u8]) -> Result<Vec<u8>, Error> {
    if witprog.len() != 20 && witprog.len() != 32 {
        return Err(Error::InvalidHashLength);
    }
    let mut w = Vec::with_capacity(2 + witprog.len());
    w.push(0x00);
    w.push(witprog.len() as u8);
    w.extend_from_slice(witprog);
    Ok(w)
}

/// scriptSig of a P2WPKH-in-P2SH spend: the pushed 22-byte witness
/// program `00 14 <pubkeyhash>`. The signature moves to the witness.
pub fn input_script_p2wpkh_in_p2sh(pubkeyhash: &[u8]) -> Result<Vec<u8>, Error> {
    if pubkeyhash.len() != 20 {
        return Err(Error::InvalidHashLength);
    }
    let mut w = Vec::with_capacity(3 + pubkeyhash.len());
    w.push(0x16); // length of the data
    w.push(0x00); // witness version byte
    w.push(0x14); // P2WPKH witness program length
    w.extend_from_slice(pubkeyhash);
    Ok(w)
}

/// scriptSig of a P2WSH-in-P2SH spend: the pushed 34-byte witness
/// program `00 20 <witness script hash>`.
pub fn input_script_p2wsh_in_p2sh(script_hash: &[u8]) -> Result<Vec<u8>, Error> {
    if script_hash.len() != 32 {
        return Err(Error::InvalidHashLength);
    }
    let mut w = Vec::with_capacity(3 + script_hash.len());
    w.push(0x22); // length of the data
    w.push(0x00); // witness version byte
    w.push(0x20); // P2WSH witness program length
    w.extend_from_slice(script_hash);
    Ok(w)
}

/// P2WPKH witness: two stack items, the signature and the pubkey.
pub fn witness_p2wpkh(signature: &[u8], pubkey: &[u8], hash_type: u8) -> Vec<u8> {
    let mut w = Vec::with_capacity(1 + 5 + signature.len() + 1 + 5 + pubkey.len());
    write_bitcoin_varint(&mut w, 0x02);
    write_signature_prefixed(&mut w, signature, hash_type);
    write_bitcoin_varint(&mut w, pubkey.len());
    w.append_bytes(pubkey);
    w
}

/// Parses a P2WPKH witness back into its pubkey and signature.
pub fn read_witness_p2wpkh(witness: &[u8]) -> Result<(Vec<Vec<u8>>, Vec<(Vec<u8>, u8)>), Error> {
    let (item_count, offset) = read_bitcoin_varint(witness, 0)?;
    if item_count != 2 {
        return Err(Error::InvalidWitness);
    }

    let (n, offset) = read_bitcoin_varint(witness, offset)?;
    if n < 1 || offset + n > witness.len() {
        return Err(Error::InvalidWitness);
    }
    let signature = witness[offset..offset + n - 1].to_vec();
    let sighash_type = witness[offset + n - 1];
    let offset = offset + n;

    let (n, offset) = read_bitcoin_varint(witness, offset)?;
    if offset.checked_add(n) != Some(witness.len()) {
        return Err(Error::InvalidWitness);
    }
    let pubkey = witness[offset..].to_vec();

    Ok((vec![pubkey], vec![(signature, sighash_type)]))
}

/// P2WSH multisig witness: OP_FALSE, the populated signatures, then the
/// full witness script.
pub fn witness_p2wsh(
    multisig: &MultisigRedeemScript,
    signature: &[u8],
    signature_index: usize,
    hash_type: u8,
) -> Result<Vec<u8>, Error> {
    let mut signatures = multisig.padded_signatures();
    if signature_index >= signatures.len() || !signatures[signature_index].is_empty() {
        return Err(Error::InvalidMultisigParameters);
    }
    signatures[signature_index] = signature.to_vec();

    let filled: Vec<Vec<u8>> = signatures.into_iter().filter(|s| !s.is_empty()).collect();

    // witness program + signatures + witness script
    let num_of_witness_items = 1 + filled.len() + 1;

    let pubkeys = multisig.pubkeys()?;
    let witness_script_length = output_script_multisig_length(&pubkeys, multisig.m);

    let mut total_length = 1 + 1; // number of items, OP_FALSE
    for s in &filled {
        total_length += 1 + s.len() + 1; // length, signature, hash_type
    }
    total_length += 1 + witness_script_length; // length, script
    let mut w = Vec::with_capacity(total_length);

    write_bitcoin_varint(&mut w, num_of_witness_items);
    // The extra stack item CHECKMULTISIG pops.
    write_bitcoin_varint(&mut w, 0);

    for s in &filled {
        write_signature_prefixed(&mut w, s, hash_type);
    }

    write_bitcoin_varint(&mut w, witness_script_length);
    write_output_script_multisig(&mut w, &pubkeys, multisig.m)?;

    Ok(w)
}

/// Parses a P2WSH multisig witness into the witness script and the
/// signature list.
pub fn read_witness_p2wsh(witness: &[u8]) -> Result<(Vec<u8>, Vec<(Vec<u8>, u8)>), Error> {
    let (item_count, offset) = read_bitcoin_varint(witness, 0)?;
    if item_count < 2 {
        return Err(Error::InvalidWitness);
    }

    // The OP_FALSE stack item from the CHECKMULTISIG bug.
    if witness.get(offset) != Some(&0x00) {
        return Err(Error::InvalidWitness);
    }
    let mut offset = offset + 1;

    let mut signatures = Vec::with_capacity(item_count - 2);
    for _ in 0..item_count - 2 {
        let (n, data_offset) = read_bitcoin_varint(witness, offset)?;
        let end = match data_offset.checked_add(n) {
            Some(end) if n >= 1 && end <= witness.len() => end,
            _ => return Err(Error::InvalidWitness),
        };
        signatures.push((witness[data_offset..end - 1].to_vec(), witness[end - 1]));
        offset = end;
    }

    let (n, data_offset) = read_bitcoin_varint(witness, offset)?;
    if data_offset.checked_add(n) != Some(witness.len()) {
        return Err(Error::InvalidWitness);
    }
    let script = witness[data_offset..].to_vec();

    Ok((script, signatures))
}

/// scriptSig of a legacy bare-multisig spend. Our signature slot must
/// still be empty and is filled with `signature`; the caller's multisig
/// structure itself is left untouched.
pub fn input_script_multisig(
    multisig: &MultisigRedeemScript,
    signature: &[u8],
    signature_index: usize,
    hash_type: u8,
    coin: &CoinInfo,
) -> Result<Vec<u8>, Error> {
    let mut signatures = multisig.padded_signatures();
    if signature_index >= signatures.len() || !signatures[signature_index].is_empty() {
        return Err(Error::InvalidMultisigParameters);
    }
    signatures[signature_index] = signature.to_vec();

    let pubkeys = multisig.pubkeys()?;
    let redeem_script_length = output_script_multisig_length(&pubkeys, multisig.m);

    let mut total_length = 0;
    if !coin.decred {
        total_length += 1; // OP_FALSE
    }
    for s in &signatures {
        if !s.is_empty() {
            total_length += 1 + s.len() + 1; // length, signature, hash_type
        }
    }
    total_length += 1 + redeem_script_length; // length, script
    let mut w = Vec::with_capacity(total_length);

    if !coin.decred {
        // The extra stack item CHECKMULTISIG pops. Decred's opcode does
        // not have the bug.
        w.push(opcodes::OP_PUSHBYTES_0);
    }

    for s in &signatures {
        if !s.is_empty() {
            append_signature(&mut w, s, hash_type);
        }
    }

    write_op_push(&mut w, redeem_script_length);
    write_output_script_multisig(&mut w, &pubkeys, multisig.m)?;

    Ok(w)
}

/// Parses a bare-multisig scriptSig into the redeem script and the
/// signature list. The final push is the one that consumes the buffer
/// exactly; it is the redeem script.
pub fn read_input_script_multisig(
    script_sig: &[u8],
) -> Result<(Vec<u8>, Vec<(Vec<u8>, u8)>), Error> {
    if script_sig.first() != Some(&0x00) {
        return Err(Error::InvalidScriptSig);
    }
    let mut offset = 1;

    let mut signatures = Vec::new();
    loop {
        let (n, data_offset) = read_op_push(script_sig, offset)?;
        let end = match data_offset.checked_add(n) {
            Some(end) if end <= script_sig.len() => end,
            _ => return Err(Error::InvalidScriptSig),
        };
        if end == script_sig.len() {
            // The redeem script push.
            return Ok((script_sig[data_offset..].to_vec(), signatures));
        }
        if n < 1 {
            return Err(Error::InvalidScriptSig);
        }
        signatures.push((script_sig[data_offset..end - 1].to_vec(), script_sig[end - 1]));
        offset = end;
    }
}

/// Bare m-of-n multisig redeem script:
/// `OP_m <pubkey>*n OP_n OP_CHECKMULTISIG`.
pub fn output_script_multisig(pubkeys: &[&[u8]], m: usize) -> Result<Vec<u8>, Error> {
    let mut w = Vec::with_capacity(output_script_multisig_length(pubkeys, m));
    write_output_script_multisig(&mut w, pubkeys, m)?;
    Ok(w)
}

/// Streams the bare multisig redeem script into any writer.
pub fn write_output_script_multisig<W: Writer>(
    w: &mut W,
    pubkeys: &[&[u8]],
    m: usize,
) -> Result<(), Error> {
    let n = pubkeys.len();
    if n < 1 || n > 15 || m < 1 || m > 15 || m > n {
        return Err(Error::InvalidMultisigParameters);
    }
    for pubkey in pubkeys {
        if pubkey.len() != 33 {
            return Err(Error::InvalidMultisigParameters);
        }
    }

    // Numbers 1 to 16 are encoded as OP_PUSHNUM opcodes.
    w.append_byte(opcodes::OP_PUSHNUM_1 + m as u8 - 1);
    for pubkey in pubkeys {
        append_pubkey(w, pubkey);
    }
    w.append_byte(opcodes::OP_PUSHNUM_1 + n as u8 - 1);
    w.append_byte(opcodes::OP_CHECKMULTISIG);
    Ok(())
}

/// Exact serialized length of [`output_script_multisig`] for the same
/// arguments.
pub fn output_script_multisig_length(pubkeys: &[&[u8]], _m: usize) -> usize {
    1 + pubkeys.len() * (1 + 33) + 1 + 1
}

/// Parses a bare multisig redeem script into its public keys and
/// threshold.
pub fn read_output_script_multisig(script: &[u8]) -> Result<(Vec<Vec<u8>>, usize), Error> {
    if script.len() < 3 || script[script.len() - 1] != opcodes::OP_CHECKMULTISIG {
        return Err(Error::InvalidMultisigScript);
    }

    let m_op = script[0];
    let n_op = script[script.len() - 2];
    if m_op < opcodes::OP_PUSHNUM_1
        || m_op >= opcodes::OP_PUSHNUM_16
        || n_op < opcodes::OP_PUSHNUM_1
        || n_op >= opcodes::OP_PUSHNUM_16
    {
        return Err(Error::InvalidMultisigScript);
    }
    let threshold = (m_op - opcodes::OP_PUSHNUM_1 + 1) as usize;
    let pubkey_count = (n_op - opcodes::OP_PUSHNUM_1 + 1) as usize;
    if threshold > pubkey_count {
        return Err(Error::InvalidMultisigScript);
    }

    let mut offset = 1;
    let mut public_keys = Vec::with_capacity(pubkey_count);
    for _ in 0..pubkey_count {
        let (n, data_offset) = read_op_push(script, offset)?;
        if n != 33 || data_offset + n > script.len() {
            return Err(Error::InvalidMultisigScript);
        }
        public_keys.push(script[data_offset..data_offset + n].to_vec());
        offset = data_offset + n;
    }

    if offset + 2 != script.len() {
        return Err(Error::InvalidMultisigScript);
    }

    Ok((public_keys, threshold))
}

/// OP_RETURN data-carrier scriptPubkey. Data size policy is enforced by
/// the caller.
pub fn output_script_paytoopreturn(data: &[u8]) -> Vec<u8> {
    let mut w = Vec::with_capacity(1 + 5 + data.len());
    w.push(opcodes::OP_RETURN);
    write_op_push(&mut w, data.len());
    w.extend_from_slice(data);
    w
}

fn write_signature_prefixed<W: Writer>(w: &mut W, signature: &[u8], hash_type: u8) {
    write_bitcoin_varint(w, signature.len() + 1);
    w.append_bytes(signature);
    w.append_byte(hash_type);
}

fn append_signature<W: Writer>(w: &mut W, signature: &[u8], hash_type: u8) {
    write_op_push(w, signature.len() + 1);
    w.append_bytes(signature);
    w.append_byte(hash_type);
}

fn append_pubkey<W: Writer>(w: &mut W, pubkey: &[u8]) {
    write_op_push(w, pubkey.len());
    w.append_bytes(pubkey);
}
