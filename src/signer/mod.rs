//! Key derivation and transaction signing for Sui Ed25519 accounts.
//!
//! A recovery phrase is turned into a BIP-39 seed, walked down the SLIP-0010
//! path `m/44'/784'/0'/0'/0'`, and the resulting 32-byte secret becomes the
//! Ed25519 signing key. Addresses and signatures use the Sui encodings:
//! a one-byte scheme flag followed by the raw key material.

mod address;

pub use address::SuiAddress;

use crate::{config::Mnemonic, Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use bip39::Language;
use blake2::{digest::consts::U32, Blake2b, Digest};
use ed25519_dalek::{Signer as _, SigningKey};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::fmt;

type HmacSha512 = Hmac<Sha512>;
pub(crate) type Blake2b256 = Blake2b<U32>;

/// Signature scheme flag for Ed25519 keys.
pub const ED25519_FLAG: u8 = 0x00;

/// Intent prefix for a transaction-data message: scope, version, app id.
const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

/// Default derivation path for the first Sui Ed25519 account.
pub const DERIVATION_PATH: [u32; 5] = [44, 784, 0, 0, 0];

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Derives the account used to sign relayed transactions.
pub trait KeyDeriver: Send + Sync {
    fn derive(&self, mnemonic: &Mnemonic) -> Result<SignerAccount>;
}

/// BIP-39 + SLIP-0010 Ed25519 deriver.
#[derive(Debug, Clone, Default)]
pub struct MnemonicDeriver;

impl KeyDeriver for MnemonicDeriver {
    fn derive(&self, mnemonic: &Mnemonic) -> Result<SignerAccount> {
        let phrase = bip39::Mnemonic::parse_in_normalized(Language::English, mnemonic.expose())
            .map_err(|e| Error::signer(format!("invalid mnemonic: {}", e)))?;
        let seed = phrase.to_seed_normalized("");
        let secret = derive_ed25519_secret(&seed, &DERIVATION_PATH)?;

        Ok(SignerAccount::from_secret_bytes(&secret))
    }
}

/// SLIP-0010 derivation for Ed25519, where every path segment is hardened.
fn derive_ed25519_secret(seed: &[u8], path: &[u32]) -> Result<[u8; 32]> {
    let (mut key, mut chain_code) = hmac_split(b"ed25519 seed", &[seed])?;

    for index in path {
        let hardened = (index | HARDENED_OFFSET).to_be_bytes();
        (key, chain_code) = hmac_split(&chain_code, &[&[0u8][..], &key[..], &hardened[..]])?;
    }

    Ok(key)
}

fn hmac_split(key: &[u8], parts: &[&[u8]]) -> Result<([u8; 32], [u8; 32])> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| Error::signer(format!("HMAC key rejected: {}", e)))?;
    for part in parts {
        mac.update(part);
    }
    let output = mac.finalize().into_bytes();

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&output[..32]);
    right.copy_from_slice(&output[32..]);
    Ok((left, right))
}

/// A derived signing key together with the address it controls.
#[derive(Clone)]
pub struct SignerAccount {
    address: SuiAddress,
    key: SigningKey,
}

impl SignerAccount {
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        let key = SigningKey::from_bytes(secret);
        let address = SuiAddress::from_ed25519(&key.verifying_key().to_bytes());
        Self { address, key }
    }

    pub fn address(&self) -> SuiAddress {
        self.address
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.key.verifying_key().to_bytes()
    }

    /// Signs BCS transaction bytes and returns the base64 serialized
    /// signature `flag || signature || public key` expected by the node.
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
        let mut hasher = Blake2b256::new();
        hasher.update(TRANSACTION_INTENT);
        hasher.update(tx_bytes);
        let digest = hasher.finalize();

        let signature = self.key.sign(&digest);

        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.public_key());
        STANDARD.encode(serialized)
    }
}

impl fmt::Debug for SignerAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerAccount")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
