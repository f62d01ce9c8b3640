use observatory_core::api as core_api;
use observatory_core::patch;

use crate::commands::cli::PatchMode;

pub fn handle_patch(mode: PatchMode) -> Result<i32, core_api::CliError> {
    let lines = match mode {
        PatchMode::Replace {
            file,
            old_file,
            new_file,
        } => patch::replace(&file, &old_file, &new_file)?,
        PatchMode::Overwrite { file, content_file } => patch::overwrite(&file, &content_file)?,
        PatchMode::Append { file, content_file } => patch::append(&file, &content_file)?,
        PatchMode::Batch {
            instructions,
            strict,
        } => patch::batch(&instructions, strict)?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(0)
}
