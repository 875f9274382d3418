use t2g_core::{print_success, Preference};

use super::{ArgPreference, GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, session::Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub preference: ArgPreference,

    /// Toggles when omitted.
    #[arg()]
    pub state: Option<Switch>,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let Session { ctl, .. } = Session::new(&cfg, false)?;
    ctl.restore();

    let pref: Preference = args.preference.into();
    let enabled = match args.state {
        Some(state) => {
            let enabled = state == Switch::On;
            ctl.set_preference(pref, enabled);
            enabled
        }
        None => ctl.toggle_preference(pref),
    };

    print_success!("{}: {}", pref, if enabled { "on" } else { "off" });
    Ok(())
}
