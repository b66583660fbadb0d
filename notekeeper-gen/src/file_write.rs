use std::fs::{OpenOptions, Permissions};
use std::io;
use std::io::Write;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Writes a file that must not exist yet.
pub fn write_new(
    path: &Path,
    contents: impl AsRef<str>,
    mode: u32,
) -> Result<(), io::Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode)
        .open(path)?;
    file.set_permissions(Permissions::from_mode(mode))?;
    file.write_all(contents.as_ref().as_bytes())?;
    Ok(())
}
