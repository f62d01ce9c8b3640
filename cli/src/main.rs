use clap::Parser;
use observatory_cli::commands::{cli, dashboard, hook, patch};
use observatory_core::api::{self as core_api, AppConfig, AppContext};
use observatory_core::error;
use observatory_plugins::services::PluginServicesFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();

    let cfg = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        // Hooks and the patch utility run without a config; only the
        // dashboard command reports it.
        Err(e) if !matches!(args.command, cli::Commands::Dashboard) => {
            if args.command.is_hook() {
                eprintln!("[Observatory] config error, using defaults: {e:#}");
            }
            core_api::load_builtin_defaults().unwrap_or_default()
        }
        Err(e) => return Err(error::CliError::Config(format!("{e:#}"))),
    };

    if let Err(e) = init_tracing(&cfg.logging) {
        eprintln!("[Observatory] logging disabled: {e}");
    }

    match args.command {
        cli::Commands::Patch(patch_args) => patch::handle_patch(patch_args.mode),
        cmd => {
            let ctx = AppContext::from_factory(cfg, &PluginServicesFactory)?;
            tracing::debug!(command = ?cmd, data_dir = %ctx.paths().data_dir.display(), "dispatch");
            if cmd.is_hook() {
                hook::handle_hook(&cmd, &ctx).await
            } else {
                dashboard::handle_dashboard(&ctx).await
            }
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(p) => core_api::load_with_override(p),
        None => core_api::load_default(),
    }
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success
    // 1: safe-write failure
    // 2: hook denied (returned as a normal exit code, not as an error)
    // 11: config error
    // 20: IO error
    // 50: internal/uncategorized
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Patch(_) => 1,
        error::CliError::Io(_) => 20,
        error::CliError::Command(_) => 20,
        error::CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &core_api::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("observatory"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let appender = tracing_appender::rolling::daily(dir, "observatory.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Ok(());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
