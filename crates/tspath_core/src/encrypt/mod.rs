mod aes128;
mod error;
mod kind;

/// AES-128 counter-mode encryptor.
pub use aes128::Aes128Encryptor;
/// Error and result aliases.
pub use error::{EncryptError, Result};
/// Encryption tags and the encryptor factory.
pub use kind::{EncryptionType, NoEncryptor, encryptor_for};

/// Stateless page encryptor; every call is independent of earlier calls.
pub trait Encryptor: Send + Sync {
	/// Encrypt the whole input.
	fn encrypt(&self, data: &[u8]) -> Vec<u8>;

	/// Encrypt `data[offset..offset + length]` as if it were a standalone input.
	fn encrypt_range(&self, data: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
		tracing::trace!(data_len = data.len(), offset, length, "encrypt range");
		let window = offset
			.checked_add(length)
			.and_then(|end| data.get(offset..end))
			.ok_or(EncryptError::RangeOutOfBounds {
				offset,
				length,
				data_len: data.len(),
			})?;
		Ok(self.encrypt(window))
	}

	/// Tag identifying this encryptor to callers.
	fn encryption_type(&self) -> EncryptionType;
}
