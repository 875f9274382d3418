use anyhow::Context as _;
use t2g_core::{
    action::{self, Action},
    notify::{Notifier as _, Toast},
};
use tokio::io::{AsyncBufReadExt as _, BufReader};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, session::Session};

#[derive(Debug, Default, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let Session { ctl, panel } = Session::new(&cfg, true)?;

    // A failed first fetch is shown on the panel; the user can reload.
    let _ = ctl.initialize().await;
    panel.draw();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            panel.draw();
            continue;
        }
        match line.parse::<Action>() {
            Ok(action) => {
                if !action::dispatch(&ctl, action).await {
                    break;
                }
            }
            Err(e) => panel.notify(Toast::warning(e.to_string())),
        }
        panel.draw();
    }
    Ok(())
}
