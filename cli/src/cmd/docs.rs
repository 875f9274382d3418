use t2g_webclient::TokenClient;

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the OpenAPI document URL instead of the viewer page.
    #[arg(long)]
    pub openapi: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let cli = TokenClient::new(&cfg.base_url)?;

    let url = if args.openapi {
        cli.openapi_url()?
    } else {
        cli.docs_url()?
    };
    println!("{}", url);
    Ok(())
}
