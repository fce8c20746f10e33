//! Reading and atomically replacing dotenv files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{Document, Error, Result};

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Sibling path used while writing `path`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.dotenv-manager.tmp"))
}

/// The file a save must replace: the target of `path` when it is a symlink,
/// else `path` itself.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(target) => target,
        Err(_) => path.to_path_buf(),
    }
}

/// Serialize `doc` and replace `path` with the result, returning the text written.
///
/// The text goes to a temporary sibling first and is renamed over the target,
/// so readers never observe a half-written file. Symlinks are followed so the
/// file they point at is replaced, not the link. Existing permissions are kept.
/// The temporary file is removed on every failure.
pub fn save_to_path(path: &Path, doc: &Document) -> Result<String> {
    let text = doc.render();
    let target = resolve_target(path);
    let tmp = temp_path(&target);

    if let Err(source) = write_replacement(&tmp, &target, &text) {
        let _cleanup = fs::remove_file(&tmp);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(tmp = %tmp.display(), target = %target.display(), "replaced file");
    info!(path = %path.display(), bytes = text.len(), "saved");
    Ok(text)
}

/// Write `text` to `tmp`, copy `target`'s permissions onto it, and rename it
/// over `target`.
fn write_replacement(tmp: &Path, target: &Path, text: &str) -> io::Result<()> {
    fs::write(tmp, text)?;
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(tmp, meta.permissions())?;
    }
    fs::rename(tmp, target)
}
