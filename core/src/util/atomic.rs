use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(format!(".tmp.{}", std::process::id()));
    PathBuf::from(s)
}

/// Write content to a file atomically using temp-file + rename.
/// On rename failure, the temp file is removed.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    write_then_rename(path, content, None)
}

/// Like [`atomic_write`], but for files the user owns: a symlink is
/// followed so the link survives and its target is edited, and the existing
/// permissions carry over to the new content.
pub fn atomic_write_in_place(path: &Path, content: &[u8]) -> io::Result<()> {
    match fs::canonicalize(path) {
        Ok(real) => {
            let perms = fs::metadata(&real)?.permissions();
            write_then_rename(&real, content, Some(perms))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => write_then_rename(path, content, None),
        Err(e) => Err(e),
    }
}

fn write_then_rename(path: &Path, content: &[u8], perms: Option<fs::Permissions>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, content)?;

    let finish = match perms {
        Some(p) => fs::set_permissions(&tmp_path, p).and_then(|_| fs::rename(&tmp_path, path)),
        None => fs::rename(&tmp_path, path),
    };
    if let Err(e) = finish {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
