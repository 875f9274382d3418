use serde::{Deserialize, Serialize};
use std::{fs::File, io, path::PathBuf};

use crate::{cmd::GlobalArgs, util};

pub const APP_NAME: &str = "t2g-cli";

/// Prefix of the environment variables that override the config file.
pub const ENV_PREFIX: &str = "T2G_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "GlobalConfig::default_base_url")]
    pub base_url: String,

    #[serde(default = "GlobalConfig::default_store_dir")]
    pub store_dir: PathBuf,

    /// Program and arguments that read the text to copy from stdin.
    /// Detected from the desktop when unset.
    #[serde(default)]
    pub clipboard_command: Option<Vec<String>>,

    /// Name of the service the tokens are for.
    #[serde(default)]
    pub ui_target: Option<String>,

    #[serde(default)]
    pub ui_title: Option<String>,
}

/// Same keys as `GlobalConfig`, read from `T2G_*`.
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvOverrides {
    base_url: Option<String>,
    store_dir: Option<PathBuf>,
    ui_target: Option<String>,
    ui_title: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            base_url: Self::default_base_url(),
            store_dir: Self::default_store_dir(),
            clipboard_command: None,
            ui_target: None,
            ui_title: None,
        }
    }
}

impl GlobalConfig {
    pub const FILENAME: &str = "t2g-cli.toml";

    pub fn filepath() -> Option<PathBuf> {
        let dir = dirs::config_dir()?;
        Some(dir.join(APP_NAME).join(Self::FILENAME))
    }

    fn default_base_url() -> String {
        "http://localhost:8080/".to_owned()
    }

    fn default_store_dir() -> PathBuf {
        let dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.join(APP_NAME)
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_file_or_default() -> Self {
        let Some(path) = Self::filepath() else {
            return GlobalConfig::default();
        };
        let toml_str = match File::open(&path).and_then(io::read_to_string) {
            Ok(toml) => toml,
            _ => return GlobalConfig::default(),
        };
        Self::from_toml(&toml_str).unwrap_or_else(|e| {
            log::error!(
                "Invalid config '{:?}': {:#}",
                util::replace_homedir_to_tilde(path),
                e
            );
            std::process::exit(1)
        })
    }

    pub fn with_env_vars<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: EnvOverrides = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .unwrap_or_else(|e| {
                log::warn!("Ignoring {}* environment variables: {}", ENV_PREFIX, e);
                EnvOverrides::default()
            });

        env.base_url.map(|u| self.base_url = u);
        env.store_dir.map(|d| self.store_dir = d);
        env.ui_target.map(|t| self.ui_target = Some(t));
        env.ui_title.map(|t| self.ui_title = Some(t));
        self
    }

    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        let GlobalArgs {
            subcmd: _,
            base_url,
            store_dir,
        } = args;

        base_url.as_ref().map(|u| self.base_url = u.clone());
        store_dir.as_ref().map(|d| self.store_dir = d.clone());
        self
    }

    /// File, then `T2G_*` environment variables, then command line flags.
    pub fn from_file_and_args(args: &GlobalArgs) -> Self {
        Self::from_file_or_default()
            .with_env_vars(std::env::vars())
            .with_args(args)
    }
}
