#[cfg(test)] mod tests;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fs, io};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, Version};
use base64ct::{Base64, Encoding};
use log::debug;
use thiserror::Error;

/// Password hashing for the account database.
///
/// Hashes are PHC strings, so the salt and the argon2 parameters travel
/// with every stored password.
pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> Result<String, HasherError>;

    /// `Ok(false)` means a well-formed hash that does not match.
    fn check_hash(
        &self,
        hash: PasswordHash<'_>,
        password: &str,
    ) -> Result<bool, HasherError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
    pub pepper_path: PathBuf,
}

impl ProductionHasherConfig {
    pub fn new(
        argon2_params: argon2::Params,
        pepper_path: PathBuf,
    ) -> Self {
        ProductionHasherConfig {
            argon2_params,
            pepper_path,
        }
    }
}

/// Argon2id keyed with the server-wide pepper.
pub struct ProductionHasher {
    params: argon2::Params,
    pepper: Box<[u8]>,
}

impl ProductionHasher {
    pub fn new(
        config: ProductionHasherConfig,
    ) -> Result<Self, HasherError> {
        let pepper = read_pepper(&config.pepper_path)?;
        Self::with_pepper(config.argon2_params, pepper)
    }

    pub fn with_pepper(
        params: argon2::Params,
        pepper: Box<[u8]>,
    ) -> Result<Self, HasherError> {
        if pepper.is_empty() {
            return Err(HasherError::EmptyPepper);
        }
        let hasher = ProductionHasher { params, pepper };
        // argon2 validates the secret length only on construction
        hasher.argon2()?;
        Ok(hasher)
    }

    fn argon2(&self) -> Result<Argon2<'_>, HasherError> {
        Argon2::new_with_secret(
            &self.pepper,
            Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        ).map_err(|e| HasherError::Initialization(Box::new(e)))
    }
}

fn read_pepper(path: &Path) -> Result<Box<[u8]>, HasherError> {
    debug!("reading pepper from \"{}\"", path.display());
    let encoded = fs::read_to_string(path)?;
    let pepper = Base64::decode_vec(encoded.trim_ascii_end())
        .map_err(HasherError::PepperDecode)?;
    Ok(pepper.into_boxed_slice())
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> Result<String, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HasherError::Hash(Box::new(e)))?;
        Ok(hash.serialize().to_string())
    }

    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> Result<bool, HasherError> {
        match hash.verify_password(&[&self.argon2()?], password) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HasherError::Hash(Box::new(e))),
        }
    }
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("failed to initialize password hasher: {0}")]
    Initialization(Box<dyn Error + Send + Sync>),

    #[error("failed to hash password: {0}")]
    Hash(Box<dyn Error + Send + Sync>),

    #[error("failed to decode pepper: {0}")]
    PepperDecode(base64ct::Error),

    #[error("the pepper is empty")]
    EmptyPepper,

    #[error(transparent)]
    Io(#[from] io::Error),
}
