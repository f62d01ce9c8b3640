use std::io::Write;
use std::path::Path;

use crate::error::PatchError;
use crate::util::atomic_write_in_place;

use super::edit::{apply_edits, replace_first};
use super::instructions::Instructions;

fn read(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, content: &str) -> Result<(), PatchError> {
    atomic_write_in_place(path, content.as_bytes()).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the first occurrence of the text in `old_file` with the text in
/// `new_file`. The target is left untouched when the old text is absent.
pub fn replace(target: &Path, old_file: &Path, new_file: &Path) -> Result<Vec<String>, PatchError> {
    let old = read(old_file)?;
    let new = read(new_file)?;
    let content = read(target)?;
    let updated = replace_first(&content, &old, &new).ok_or_else(|| PatchError::NotFound {
        path: target.to_path_buf(),
    })?;
    write(target, &updated)?;
    tracing::info!(target = %target.display(), "replaced");
    Ok(vec!["OK: replaced".to_string()])
}

pub fn overwrite(target: &Path, content_file: &Path) -> Result<Vec<String>, PatchError> {
    let content = read(content_file)?;
    write(target, &content)?;
    tracing::info!(target = %target.display(), bytes = content.len(), "overwritten");
    Ok(vec![format!("OK: overwritten {}", target.display())])
}

pub fn append(target: &Path, content_file: &Path) -> Result<Vec<String>, PatchError> {
    let content = read(content_file)?;
    let write_err = |source| PatchError::Write {
        path: target.to_path_buf(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(target)
        .map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    tracing::info!(target = %target.display(), bytes = content.len(), "appended");
    Ok(vec![format!("OK: appended to {}", target.display())])
}

/// Runs a batch instruction file. Output lines are the skip warnings followed
/// by the summary.
pub fn batch(instructions: &Path, strict: bool) -> Result<Vec<String>, PatchError> {
    let instr = Instructions::load(instructions)?;
    let content = read(&instr.file)?;
    let (updated, report) = apply_edits(&content, &instr.edits, strict, &instr.file)?;

    if report.applied > 0 {
        write(&instr.file, &updated)?;
    }
    tracing::info!(
        target = %instr.file.display(),
        applied = report.applied,
        skipped = report.skipped.len(),
        "batch applied"
    );

    let mut lines = report.warnings();
    lines.push(report.summary(&instr.file));
    Ok(lines)
}
