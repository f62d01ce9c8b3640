use tokio::io::AsyncReadExt;

use observatory_core::api::{self as core_api, AppContext, HookOutcome};

use crate::commands::cli::Commands;

async fn read_stdin() -> Result<String, core_api::CliError> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;
    Ok(raw)
}

/// Runs one hook against the payload on stdin and reports its outcome.
pub async fn handle_hook(cmd: &Commands, ctx: &AppContext) -> Result<i32, core_api::CliError> {
    let raw = match read_stdin().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "stdin read failed");
            return Ok(emit(HookOutcome::diagnostic(format!(
                "[Observatory] Input error: {e}"
            ))));
        }
    };

    let outcome = match cmd {
        Commands::Observe => core_api::observe(ctx, &raw).await,
        Commands::Block => core_api::block(ctx, &raw),
        Commands::LogAction => core_api::log_action(ctx, &raw).await,
        other => {
            return Err(core_api::CliError::Command(format!(
                "{other:?} is not a hook command"
            )))
        }
    };
    Ok(emit(outcome))
}

/// Writes the outcome's streams and returns its exit status.
pub fn emit(outcome: HookOutcome) -> i32 {
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        eprintln!("{}", outcome.stderr);
    }
    outcome.exit_code
}
