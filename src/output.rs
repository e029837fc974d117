use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Runs `write` against a temporary file next to `path` and moves it into
/// place once `write` succeeded and everything is flushed. On failure the
/// temporary file is dropped and `path` is left as it was.
pub(crate) fn write_atomically<P, T, F>(path: P, write: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<T>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    let value = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let value = write(&mut writer)?;
        writer.flush()?;
        value
    };
    tmp.as_file().sync_all()?;
    set_permissions(tmp.as_file(), path)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(value)
}

// Temp files are created 0600; keep the mode of the file being replaced, or
// use 0644 for a new one.
fn set_permissions(file: &File, path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) => file.set_permissions(metadata.permissions())?,
        Err(_) => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(fs::Permissions::from_mode(0o644))?;
            }
        }
    }
    Ok(())
}
