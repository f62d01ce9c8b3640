use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "observatory",
    version,
    about = "Event hooks, statistics and dashboard for IDE agent actions"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default search order.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the event on stdin: store, statistics, dashboard.
    Observe,
    /// Deny access to sensitive files (exit status 2).
    Block,
    /// Append a one-line summary of the action to the action log.
    LogAction,
    /// Regenerate the dashboard from the stored statistics.
    Dashboard,
    /// Literal find/replace writes.
    Patch(PatchArgs),
}

impl Commands {
    /// Hook commands must never fail the host because of a bad config.
    pub fn is_hook(&self) -> bool {
        matches!(self, Commands::Observe | Commands::Block | Commands::LogAction)
    }
}

#[derive(ClapArgs, Debug)]
pub struct PatchArgs {
    #[command(subcommand)]
    pub mode: PatchMode,
}

#[derive(Subcommand, Debug)]
pub enum PatchMode {
    /// Replace the first occurrence of <OLD_FILE>'s text with <NEW_FILE>'s text.
    Replace {
        file: PathBuf,
        old_file: PathBuf,
        new_file: PathBuf,
    },
    /// Replace the whole file with <CONTENT_FILE>'s text.
    Overwrite { file: PathBuf, content_file: PathBuf },
    /// Append <CONTENT_FILE>'s text to the file.
    Append { file: PathBuf, content_file: PathBuf },
    /// Apply a JSON instruction file of ordered edits.
    Batch {
        instructions: PathBuf,
        /// Abort without writing when any edit does not apply.
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hook_commands() {
        let args = Args::parse_from(["observatory", "log-action"]);
        assert!(matches!(args.command, Commands::LogAction));
        assert!(args.command.is_hook());
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let args = Args::parse_from(["observatory", "observe", "--config", "/tmp/c.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn parses_strict_batch() {
        let args = Args::parse_from(["observatory", "patch", "batch", "edits.json", "--strict"]);
        match args.command {
            Commands::Patch(PatchArgs {
                mode: PatchMode::Batch { instructions, strict },
            }) => {
                assert_eq!(instructions, PathBuf::from("edits.json"));
                assert!(strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!Args::parse_from(["observatory", "dashboard"]).command.is_hook());
    }
}
