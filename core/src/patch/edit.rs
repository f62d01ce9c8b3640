use std::path::Path;

use crate::error::PatchError;

use super::instructions::Edit;

/// Replaces the first occurrence of `old`, or returns `None` when absent.
pub fn replace_first(content: &str, old: &str, new: &str) -> Option<String> {
    content.contains(old).then(|| content.replacen(old, new, 1))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    pub applied: usize,
    pub total: usize,
    /// Indices of edits whose `old` text was not found.
    pub skipped: Vec<usize>,
}

impl EditReport {
    pub fn warnings(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|i| format!("WARN: edit #{i} old_string not found, skipped"))
            .collect()
    }

    pub fn summary(&self, target: &Path) -> String {
        let mut line = format!(
            "OK: {}/{} edits applied to {}",
            self.applied,
            self.total,
            target.display()
        );
        if !self.skipped.is_empty() {
            line.push_str(&format!(" ({} skipped)", self.skipped.len()));
        }
        line
    }
}

/// Applies `edits` in order, each against the result of the previous one.
///
/// A missing edit is skipped unless it is `required` or `strict` is set, in
/// which case the whole batch fails and nothing should be written.
pub fn apply_edits(
    content: &str,
    edits: &[Edit],
    strict: bool,
    target: &Path,
) -> Result<(String, EditReport), PatchError> {
    let mut current = content.to_string();
    let mut report = EditReport {
        total: edits.len(),
        ..EditReport::default()
    };

    for (index, edit) in edits.iter().enumerate() {
        match replace_first(&current, &edit.old, &edit.new) {
            Some(next) => {
                current = next;
                report.applied += 1;
            }
            None if edit.required || strict => {
                return Err(PatchError::RequiredEditMissing {
                    index,
                    path: target.to_path_buf(),
                });
            }
            None => report.skipped.push(index),
        }
    }

    Ok((current, report))
}
