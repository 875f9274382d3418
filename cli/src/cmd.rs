pub mod docs;
pub mod fetch;
pub mod health;
pub mod pref;
pub mod show;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    /// Defaults to the interactive `show` session.
    #[command(subcommand)]
    pub subcmd: Option<Subcommand>,

    /// Base URL of the Token2go service, e.g. `https://t2g.example.com/`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory of the local preference store.
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Docs(docs::Args),
    Fetch(fetch::Args),
    Health(health::Args),
    Pref(pref::Args),

    #[command(alias("s"))]
    Show(show::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Some(Docs(args)) => docs::exec(args, self),
            Some(Fetch(args)) => fetch::exec(args, self).await,
            Some(Health(args)) => health::exec(args, self).await,
            Some(Pref(args)) => pref::exec(args, self),
            Some(Show(args)) => show::exec(args, self).await,
            None => show::exec(&show::Args::default(), self).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ArgPreference {
    AutoCopy,
    AutoDelete,
}

impl From<ArgPreference> for t2g_core::Preference {
    fn from(value: ArgPreference) -> Self {
        use t2g_core::Preference;
        use ArgPreference::*;
        match value {
            AutoCopy => Preference::AutoCopy,
            AutoDelete => Preference::AutoDelete,
        }
    }
}
