use std::time::Duration;

use anyhow::Context as _;
use indicatif::{ProgressBar, ProgressStyle};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, session::Session};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print only the secret (for scripts). Implies no panel.
    #[arg(short, long)]
    pub secret_only: bool,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let Session { ctl, panel } = Session::new(&cfg, false)?;

    let spinner = ProgressBar::new_spinner().with_message(format!("Fetching token from {}", cfg.base_url));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    if !args.secret_only {
        spinner.enable_steady_tick(Duration::from_millis(80));
    }
    let res = ctl.initialize().await;
    spinner.finish_and_clear();

    if args.secret_only {
        res.context("Failed to fetch token")?;
        let cred = ctl.credential().context("Token unavailable")?;
        println!("{}", cred.secret);
        return Ok(());
    }

    panel.draw();
    res.context("Failed to fetch token")?;
    Ok(())
}
