use observatory_core::api::{self as core_api, AppContext};

pub async fn handle_dashboard(ctx: &AppContext) -> Result<i32, core_api::CliError> {
    let stats = ctx.stats_file().load();
    let path = core_api::regenerate(ctx.cfg(), &stats, &ctx.store()).await?;
    println!("[Observatory] Dashboard regenerated → {}", path.display());
    Ok(0)
}
