use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use t2g_webclient::{Credential, TokenSource};
use tokio::task::JoinHandle;

use crate::{
    clipboard::Clipboard,
    notify::{Notifier, Toast},
    preference::{self, Preference},
    storage::{keys, KeyValueStore},
    view::{View, ERROR_GLYPH, PLACEHOLDER},
};

pub const AUTO_DELETE_DELAY: Duration = Duration::from_secs(10);

/// Everything the controller talks to.
pub struct Seams {
    pub source: Arc<dyn TokenSource>,
    pub store: Box<dyn KeyValueStore>,
    pub view: Arc<dyn View>,
    pub clipboard: Arc<dyn Clipboard>,
    pub notifier: Arc<dyn Notifier>,
}

/// Owns the current credential and the two preferences of one session.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct TokenController {
    inner: Arc<Inner>,
}

struct Inner {
    source: Arc<dyn TokenSource>,
    view: Arc<dyn View>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<State>,
}

struct State {
    store: Box<dyn KeyValueStore>,
    credential: Option<Credential>,
    auto_copy: bool,
    auto_delete: bool,
    /// Bumped by every successful refresh.
    generation: u64,
    pending_delete: Option<DeleteTimer>,
}

/// Auto-delete scheduled by the refresh that produced `generation`.
struct DeleteTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl DeleteTimer {
    fn cancel(self) {
        log::trace!("Cancel auto-delete of generation {}", self.generation);
        self.handle.abort();
    }
}

impl State {
    fn flag(&self, pref: Preference) -> bool {
        match pref {
            Preference::AutoCopy => self.auto_copy,
            Preference::AutoDelete => self.auto_delete,
        }
    }

    fn set_flag(&mut self, pref: Preference, enabled: bool) {
        match pref {
            Preference::AutoCopy => self.auto_copy = enabled,
            Preference::AutoDelete => self.auto_delete = enabled,
        }
        self.persist(pref.key(), preference::flag_str(enabled));
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("Failed to save '{}': {}", key, e);
        }
    }
}

impl TokenController {
    pub fn new(seams: Seams) -> Self {
        let Seams {
            source,
            store,
            view,
            clipboard,
            notifier,
        } = seams;

        Self {
            inner: Arc::new(Inner {
                source,
                view,
                clipboard,
                notifier,
                state: Mutex::new(State {
                    store,
                    credential: None,
                    auto_copy: true,
                    auto_delete: true,
                    generation: 0,
                    pending_delete: None,
                }),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, toast: Toast) {
        self.inner.notifier.notify(toast);
    }

    pub fn credential(&self) -> Option<Credential> {
        self.lock().credential.clone()
    }

    pub fn preference(&self, pref: Preference) -> bool {
        self.lock().flag(pref)
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn has_pending_delete(&self) -> bool {
        self.lock()
            .pending_delete
            .as_ref()
            .map_or(false, |t| !t.handle.is_finished())
    }

    /// Restores preferences and the cached fingerprint, then fetches a token.
    pub async fn initialize(&self) -> t2g_webclient::Result<()> {
        self.restore();
        self.refresh().await
    }

    /// The part of `initialize` that only reads the local store.
    pub fn restore(&self) {
        self.load_preferences();
        self.show_cached_fingerprint();
    }

    fn load_preferences(&self) {
        use strum::IntoEnumIterator as _;

        for pref in Preference::iter() {
            let enabled = {
                let mut st = self.lock();
                let enabled = preference::parse_flag(st.store.get(pref.key()).as_deref());
                st.set_flag(pref, enabled);
                enabled
            };
            self.inner.view.set_toggle(pref, enabled);
            log::info!(
                "{} {}.",
                if enabled { "Enabled" } else { "Disabled" },
                pref.key()
            );
        }
    }

    fn show_cached_fingerprint(&self) {
        let cached = self
            .lock()
            .store
            .get(keys::FINGER)
            .filter(|f| !f.is_empty());
        let view = &self.inner.view;
        match cached {
            Some(finger) => view.set_fingerprint_field(&finger),
            None => view.set_fingerprint_field(PLACEHOLDER),
        }
    }

    /// Fetches a fresh credential and shows it.
    ///
    /// A failure has already been reported on the view and the notifier when
    /// this returns `Err`; the previous credential stays in memory.
    pub async fn refresh(&self) -> t2g_webclient::Result<()> {
        match self.inner.source.fetch_credential().await {
            Ok(cred) => {
                self.accept(cred).await;
                Ok(())
            }
            Err(e) => {
                let view = &self.inner.view;
                view.set_fingerprint_field(ERROR_GLYPH);
                view.set_token_field(ERROR_GLYPH);
                log::error!("Failed to refresh from {}: {}", self.inner.source.endpoint(), e);
                self.notify(Toast::error(e.toast_message()));
                Err(e)
            }
        }
    }

    async fn accept(&self, cred: Credential) {
        let auto_copy = {
            let mut st = self.lock();
            st.generation += 1;
            let generation = st.generation;

            st.persist(keys::FINGER, &cred.fingerprint);
            st.credential = Some(cred.clone());

            if let Some(prev) = st.pending_delete.take() {
                prev.cancel();
            }
            if st.auto_delete {
                st.pending_delete = Some(self.schedule_auto_delete(generation));
            }
            st.auto_copy
        };

        match cred.issued_at() {
            Some(t) => log::info!(
                "Retrieved token {} issued at {}",
                cred.fingerprint,
                t.format("%Y-%m-%d %H:%M:%S")
            ),
            None => log::info!("Retrieved token {}", cred.fingerprint),
        }

        let view = &self.inner.view;
        view.set_fingerprint_field(&cred.fingerprint);
        view.set_token_field(&cred.secret);
        view.select_token_field();

        if auto_copy && !cred.secret.is_empty() {
            self.copy_secret(&cred.secret).await;
        }
    }

    fn schedule_auto_delete(&self, generation: u64) -> DeleteTimer {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let deadline = tokio::time::Instant::now() + AUTO_DELETE_DELAY;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(inner) = weak.upgrade() {
                TokenController { inner }.fire_auto_delete(generation);
            }
        });
        log::debug!(
            "Scheduled auto-delete of generation {} in {:?}",
            generation,
            AUTO_DELETE_DELAY
        );
        DeleteTimer { generation, handle }
    }

    /// Returns whether the credential was cleared.
    fn fire_auto_delete(&self, generation: u64) -> bool {
        {
            let mut st = self.lock();
            if !(st.auto_delete && st.credential.is_some() && st.generation == generation) {
                log::debug!(
                    "Skipped auto-delete of generation {} (current {})",
                    generation,
                    st.generation
                );
                return false;
            }
            st.credential = None;
            st.pending_delete = None;
        }

        self.reset_fields();
        log::debug!("Deleted token.");
        self.notify(Toast::success("Deleted token"));
        true
    }

    fn reset_fields(&self) {
        let view = &self.inner.view;
        view.set_fingerprint_field(PLACEHOLDER);
        view.set_token_field(PLACEHOLDER);
    }

    async fn copy_secret(&self, secret: &str) {
        match self.inner.clipboard.write_text(secret).await {
            Ok(()) => self.notify(Toast::success("Copied token to clipboard")),
            Err(e) => {
                log::warn!("Failed to copy token: {:#}", e);
                self.notify(Toast::warning("Failed to copy token to clipboard"));
            }
        }
    }

    pub async fn copy_token(&self) {
        let secret = self.lock().credential.as_ref().map(|c| c.secret.clone());
        match secret {
            Some(secret) => self.copy_secret(&secret).await,
            None => self.notify(Toast::error("Token unavailable")),
        }
    }

    /// Forgets the current credential. A pending auto-delete is left alone;
    /// it finds no credential when it fires.
    pub fn delete_token(&self) {
        let deleted = self.lock().credential.take().is_some();
        if deleted {
            self.reset_fields();
            self.notify(Toast::success("Deleted token"));
        } else {
            self.notify(Toast::info("Nothing to delete"));
        }
    }

    pub fn toggle_preference(&self, pref: Preference) -> bool {
        let enabled = !self.preference(pref);
        self.set_preference(pref, enabled);
        enabled
    }

    pub fn set_preference(&self, pref: Preference, enabled: bool) {
        self.lock().set_flag(pref, enabled);
        self.inner.view.set_toggle(pref, enabled);
        log::info!(
            "{} {}.",
            if enabled { "Enabled" } else { "Disabled" },
            pref.key()
        );
        self.notify(Toast::success("Saved preference"));
    }
}
