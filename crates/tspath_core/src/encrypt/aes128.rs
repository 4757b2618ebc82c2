use std::fmt;

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::encrypt::{EncryptError, EncryptionType, Encryptor, Result};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// AES-128 in counter mode with the key doubling as the initial counter block.
///
/// The counter restarts from that block on every call, so equal inputs always
/// produce equal outputs and applying `encrypt` twice restores the input.
#[derive(Clone)]
pub struct Aes128Encryptor {
	key: [u8; 16],
}

impl Aes128Encryptor {
	/// Required key length in bytes.
	pub const KEY_LEN: usize = 16;

	/// Build an encryptor from exactly [`Self::KEY_LEN`] key bytes.
	pub fn new(key: &[u8]) -> Result<Self> {
		let key: [u8; 16] = key.try_into().map_err(|_| EncryptError::KeyLengthMismatch {
			expected: Self::KEY_LEN,
			actual: key.len(),
		})?;
		Ok(Self { key })
	}
}

impl Encryptor for Aes128Encryptor {
	fn encrypt(&self, data: &[u8]) -> Vec<u8> {
		tracing::trace!(data_len = data.len(), "aes128 encrypt");
		let mut cipher = Aes128Ctr::new(&self.key.into(), &self.key.into());
		let mut out = data.to_vec();
		cipher.apply_keystream(&mut out);
		out
	}

	fn encryption_type(&self) -> EncryptionType {
		EncryptionType::Aes128
	}
}

impl fmt::Debug for Aes128Encryptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Aes128Encryptor").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
