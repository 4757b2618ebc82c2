use aes::Aes128;
use aes::cipher::{BlockEncrypt, KeyInit};

use crate::encrypt::{Aes128Encryptor, EncryptError, EncryptionType, Encryptor, NoEncryptor, encryptor_for};

const KEY: [u8; 16] = *b"tsfile-page-key!";

#[test]
fn rejects_keys_that_are_not_sixteen_bytes() {
	for len in [0_usize, 15, 17, 32] {
		let err = Aes128Encryptor::new(&vec![7_u8; len]).expect_err("wrong key length should fail");
		assert_eq!(err, EncryptError::KeyLengthMismatch { expected: 16, actual: len });
	}
}

#[test]
fn first_keystream_block_is_key_encrypted_under_itself() {
	let encryptor = Aes128Encryptor::new(&KEY).expect("16-byte key");
	let mut expected = aes::Block::from(KEY);
	Aes128::new(&KEY.into()).encrypt_block(&mut expected);

	assert_eq!(encryptor.encrypt(&[0_u8; 16]), expected.to_vec());
}

#[test]
fn every_call_restarts_the_counter() {
	let encryptor = Aes128Encryptor::new(&KEY).expect("16-byte key");
	let data = b"root.sg.d1.s1 page payload spanning several cipher blocks".to_vec();

	let first = encryptor.encrypt(&data);
	let second = encryptor.encrypt(&data);
	assert_eq!(first, second);
	assert_ne!(first, data);
	assert_eq!(first.len(), data.len());
	assert_eq!(encryptor.encrypt(&first), data);
}

#[test]
fn range_encrypts_window_as_standalone_input() {
	let encryptor = Aes128Encryptor::new(&KEY).expect("16-byte key");
	let data: Vec<u8> = (0..64).collect();

	let ranged = encryptor.encrypt_range(&data, 10, 20).expect("window in bounds");
	assert_eq!(ranged, encryptor.encrypt(&data[10..30]));
	assert_eq!(encryptor.encrypt_range(&data, 64, 0).expect("empty tail window"), Vec::<u8>::new());
}

#[test]
fn range_outside_input_is_an_error() {
	let encryptor = Aes128Encryptor::new(&KEY).expect("16-byte key");
	let err = encryptor.encrypt_range(&[1, 2, 3], 2, 5).expect_err("window exceeds data");
	assert_eq!(err, EncryptError::RangeOutOfBounds { offset: 2, length: 5, data_len: 3 });
	assert!(encryptor.encrypt_range(&[1, 2, 3], usize::MAX, 2).is_err());
}

#[test]
fn factory_returns_tagged_encryptors() {
	let aes = encryptor_for(EncryptionType::Aes128, &KEY).expect("aes encryptor builds");
	assert_eq!(aes.encryption_type(), EncryptionType::Aes128);
	assert_eq!(aes.encryption_type().as_str(), "AES128");

	let plain = encryptor_for(EncryptionType::Unencrypted, &[]).expect("identity encryptor builds");
	assert_eq!(plain.encryption_type(), EncryptionType::Unencrypted);
	assert_eq!(plain.encrypt(b"page"), b"page".to_vec());
	assert_eq!(NoEncryptor.encrypt_range(b"page", 1, 2).expect("in bounds"), b"ag".to_vec());

	assert!(encryptor_for(EncryptionType::Aes128, &KEY[..8]).is_err());
}

#[test]
fn debug_output_hides_key_material() {
	let encryptor = Aes128Encryptor::new(&KEY).expect("16-byte key");
	assert!(!format!("{encryptor:?}").contains("tsfile"));
}
