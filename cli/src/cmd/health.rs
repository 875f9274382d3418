use anyhow::Context as _;
use t2g_webclient::TokenClient;

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let cli = TokenClient::new(&cfg.base_url)?;

    let health = cli
        .check_health()
        .await
        .with_context(|| format!("Health check failed for {}", cli.base_url()))?;
    println!("{}: {}", cli.base_url(), health.status);
    Ok(())
}
