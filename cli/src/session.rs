use std::sync::Arc;

use anyhow::Context as _;
use t2g_core::{
    clipboard::{Clipboard, CommandClipboard},
    panel::{Panel, PanelHeader},
    storage::FileStore,
    Seams, TokenController,
};
use t2g_webclient::TokenClient;

use crate::{config::GlobalConfig, util};

/// One controller wired to a terminal panel.
pub struct Session {
    pub ctl: TokenController,
    pub panel: Arc<Panel>,
}

impl Session {
    pub fn new(cfg: &GlobalConfig, interactive: bool) -> anyhow::Result<Self> {
        let source = TokenClient::new(&cfg.base_url)
            .with_context(|| format!("Invalid base URL '{}'", cfg.base_url))?;

        let store = FileStore::open_in_dir(&cfg.store_dir);
        log::debug!(
            "Local store: {:?}",
            util::replace_homedir_to_tilde(store.filepath())
        );

        let clipboard = cfg
            .clipboard_command
            .as_deref()
            .and_then(CommandClipboard::from_argv)
            .unwrap_or_else(CommandClipboard::detect);
        log::debug!("Clipboard program: {}", clipboard.program());

        let header = PanelHeader::new(cfg.ui_title.as_deref(), cfg.ui_target.as_deref());
        let panel = Arc::new(Panel::new(header, interactive));

        let clipboard: Arc<dyn Clipboard> = Arc::new(clipboard);
        let ctl = TokenController::new(Seams {
            source: Arc::new(source),
            store: Box::new(store),
            view: panel.clone(),
            clipboard,
            notifier: panel.clone(),
        });

        Ok(Self { ctl, panel })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use t2g_core::{storage::KeyValueStore as _, Preference};

    #[test]
    fn restore_reads_store_dir_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_in_dir(dir.path());
        store.set("autoCopy", "false").unwrap();

        let cfg = GlobalConfig {
            store_dir: dir.path().to_owned(),
            ..GlobalConfig::default()
        };
        let session = Session::new(&cfg, false).unwrap();
        session.ctl.restore();

        assert!(!session.ctl.preference(Preference::AutoCopy));
        assert!(session.ctl.preference(Preference::AutoDelete));
    }

    #[test]
    fn invalid_base_url_is_error() {
        let cfg = GlobalConfig {
            base_url: "::not a url::".to_owned(),
            ..GlobalConfig::default()
        };
        let err = Session::new(&cfg, false).err().unwrap();
        assert!(err.to_string().contains("Invalid base URL"));
    }
}
