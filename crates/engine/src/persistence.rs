// crates/engine/src/persistence.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::Path,
};

/// Read the entire file into memory; the handle is closed on return.
pub fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Replace the contents of `path` with `data` via a sibling temp file and rename.
///
/// The original file's permissions are carried over to the replacement.
pub fn atomic_replace(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("path has no file name"))?;

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(
        ".{}.{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id(),
        nanos
    ));

    let result = write_temp(&tmp, path, data).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

fn write_temp(tmp: &Path, original: &Path, data: &[u8]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut w = BufWriter::new(file);
    w.write_all(data)?;
    w.flush()?;
    let file = w.into_inner().map_err(std::io::IntoInnerError::into_error)?;
    if let Ok(meta) = fs::metadata(original) {
        file.set_permissions(meta.permissions())?;
    }
    let _ = file.sync_all();
    Ok(())
}
