use thiserror::Error;

/// Result type for encryptor construction and ranged encryption.
pub type Result<T> = std::result::Result<T, EncryptError>;

/// Errors produced while building or invoking an encryptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncryptError {
	/// Supplied key does not have the cipher's fixed length.
	#[error("encryption key length mismatch: expected {expected} bytes, got {actual}")]
	KeyLengthMismatch {
		/// Required key length in bytes.
		expected: usize,
		/// Length of the supplied key.
		actual: usize,
	},
	/// Requested `offset..offset + length` window exceeds the input.
	#[error("encrypt range out of bounds: offset={offset}, length={length}, data={data_len}")]
	RangeOutOfBounds {
		/// Requested start offset.
		offset: usize,
		/// Requested window length.
		length: usize,
		/// Available input length.
		data_len: usize,
	},
}
