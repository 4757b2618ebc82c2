use crate::encrypt::{Aes128Encryptor, Encryptor, Result};

/// Tag naming the encryption applied to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionType {
	/// Pages are stored as-is.
	Unencrypted,
	/// AES-128 counter mode.
	Aes128,
}

impl EncryptionType {
	/// Stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unencrypted => "UNENCRYPTED",
			Self::Aes128 => "AES128",
		}
	}
}

/// Identity encryptor used when pages are not encrypted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEncryptor;

impl Encryptor for NoEncryptor {
	fn encrypt(&self, data: &[u8]) -> Vec<u8> {
		data.to_vec()
	}

	fn encryption_type(&self) -> EncryptionType {
		EncryptionType::Unencrypted
	}
}

/// Build the encryptor for `kind`; `key` is ignored for [`EncryptionType::Unencrypted`].
pub fn encryptor_for(kind: EncryptionType, key: &[u8]) -> Result<Box<dyn Encryptor>> {
	let encryptor: Box<dyn Encryptor> = match kind {
		EncryptionType::Unencrypted => Box::new(NoEncryptor),
		EncryptionType::Aes128 => Box::new(Aes128Encryptor::new(key)?),
	};
	Ok(encryptor)
}
