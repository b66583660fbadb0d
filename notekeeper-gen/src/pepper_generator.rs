use std::io;
use std::path::{Path, PathBuf};
use base64ct::{Base64, Encoding};
use rand::RngCore;
use thiserror::Error;
use notekeeper::bin_constants::PEPPER_LENGTH;
use crate::file_write::write_new;

#[derive(Debug, Error)]
pub enum MakePepperError {
    #[error("pepper file \"{}\" already exists, refusing to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed writing generated pepper: {0}")]
    Io(#[from] io::Error),
}

pub fn make_pepper(pepper_path: &Path) -> Result<(), MakePepperError> {
    let mut pepper = [0u8; PEPPER_LENGTH];
    rand::rng().fill_bytes(&mut pepper);
    write_new(
        pepper_path,
        Base64::encode_string(&pepper) + "\n",
        0o400,
    ).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => MakePepperError::AlreadyExists(pepper_path.to_owned()),
        _ => e.into(),
    })
}
