use assert_fs::prelude::*;
use assert_fs::TempDir;
use test_utils::{fast_argon2_params, MOCK_PEPPER, MOCK_PEPPER_STR};
use super::*;

fn make_hasher() -> ProductionHasher {
    ProductionHasher::with_pepper(fast_argon2_params(), MOCK_PEPPER.clone())
        .expect("hasher creation failed")
}

#[test]
fn hash_is_argon2id_phc_string() {
    let hash = make_hasher().generate_hash("123").unwrap();
    assert!(hash.starts_with("$argon2id$v=19$"), "unexpected hash {hash}");
}

#[test]
fn same_password_gets_distinct_salts() {
    let hasher = make_hasher();
    assert_ne!(
        hasher.generate_hash("123").unwrap(),
        hasher.generate_hash("123").unwrap(),
    );
}

#[test]
fn correct_password_matches() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("correct horse").unwrap();
    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(hasher.check_hash(parsed, "correct horse").unwrap());
}

#[test]
fn wrong_password_does_not_match() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("correct horse").unwrap();
    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(!hasher.check_hash(parsed, "battery staple").unwrap());
}

#[test]
fn pepper_takes_part_in_hashing() {
    let hash = make_hasher().generate_hash("123").unwrap();
    let other = ProductionHasher::with_pepper(
        fast_argon2_params(),
        vec![0u8; 32].into(),
    ).unwrap();
    assert!(!other.check_hash(PasswordHash::new(&hash).unwrap(), "123").unwrap());
}

#[test]
fn pepper_is_read_from_file() {
    let dir = TempDir::new().unwrap();
    let pepper = dir.child("pepper.b64");
    pepper.write_str(&format!("{MOCK_PEPPER_STR}\n")).unwrap();
    let from_file = ProductionHasher::new(
        ProductionHasherConfig::new(fast_argon2_params(), pepper.to_path_buf()),
    ).unwrap();
    let hash = make_hasher().generate_hash("123").unwrap();
    assert!(from_file.check_hash(PasswordHash::new(&hash).unwrap(), "123").unwrap());
}

#[test]
fn broken_pepper_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let pepper = dir.child("pepper.b64");
    pepper.write_str("not base64 at all!").unwrap();
    let result = ProductionHasher::new(
        ProductionHasherConfig::new(fast_argon2_params(), pepper.to_path_buf()),
    );
    assert!(matches!(result, Err(HasherError::PepperDecode(_))));
}

#[test]
fn missing_pepper_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = ProductionHasher::new(
        ProductionHasherConfig::new(fast_argon2_params(), dir.child("absent").to_path_buf()),
    );
    assert!(matches!(result, Err(HasherError::Io(_))));
}

#[test]
fn empty_pepper_is_rejected() {
    let dir = TempDir::new().unwrap();
    let pepper = dir.child("pepper.b64");
    pepper.write_str("\n").unwrap();
    let result = ProductionHasher::new(
        ProductionHasherConfig::new(fast_argon2_params(), pepper.to_path_buf()),
    );
    assert!(matches!(result, Err(HasherError::EmptyPepper)));
}
