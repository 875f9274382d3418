//! In-memory stand-ins for the controller's seams.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use t2g_webclient::{Credential, Error, Result, TokenSource};

use crate::{
    clipboard::Clipboard,
    notify::{Notifier, Toast},
    preference::Preference,
    storage::{self, error::ActionKind, KeyValueStore, MemoryStore},
    view::View,
};

/// Answers fetches from a queue, in order.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Result<Credential>>>,
}

impl ScriptedSource {
    pub fn push_ok(&self, fingerprint: &str, secret: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(Credential::new(fingerprint, secret)));
    }

    pub fn push_err(&self, err: Error) {
        self.replies.lock().unwrap().push_back(Err(err));
    }
}

#[async_trait]
impl TokenSource for ScriptedSource {
    fn endpoint(&self) -> String {
        "scripted".to_owned()
    }

    async fn fetch_credential(&self) -> Result<Credential> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedSource: no reply left")
    }
}

#[derive(Default)]
struct ViewModel {
    toggles: HashMap<Preference, bool>,
    fingerprints: Vec<String>,
    tokens: Vec<String>,
    token_selected: bool,
}

#[derive(Default)]
pub struct RecordingView {
    model: Mutex<ViewModel>,
}

impl RecordingView {
    pub fn toggle(&self, pref: Preference) -> Option<bool> {
        self.model.lock().unwrap().toggles.get(&pref).copied()
    }

    pub fn fingerprint_history(&self) -> Vec<String> {
        self.model.lock().unwrap().fingerprints.clone()
    }

    pub fn fingerprint(&self) -> String {
        self.fingerprint_history().pop().unwrap_or_default()
    }

    pub fn token(&self) -> String {
        self.model.lock().unwrap().tokens.last().cloned().unwrap_or_default()
    }

    pub fn is_token_selected(&self) -> bool {
        self.model.lock().unwrap().token_selected
    }
}

impl View for RecordingView {
    fn set_toggle(&self, pref: Preference, checked: bool) {
        self.model.lock().unwrap().toggles.insert(pref, checked);
    }

    fn set_fingerprint_field(&self, text: &str) {
        self.model.lock().unwrap().fingerprints.push(text.to_owned());
    }

    fn set_token_field(&self, text: &str) {
        let mut m = self.model.lock().unwrap();
        m.tokens.push(text.to_owned());
        m.token_selected = false;
    }

    fn select_token_field(&self) {
        self.model.lock().unwrap().token_selected = true;
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    fail_next: Mutex<bool>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let fail = std::mem::take(&mut *self.fail_next.lock().unwrap());
        anyhow::ensure!(!fail, "clipboard unavailable");
        self.writes.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

/// A `MemoryStore` that several sessions (and the test) can look into.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MemoryStore>>,
}

impl SharedStore {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> storage::Result<()> {
        self.inner.lock().unwrap().set(key, value)
    }
}

/// Reads like a `MemoryStore` but rejects every write.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> storage::Result<()> {
        Err(storage::Error::new(
            ActionKind::WriteFile,
            key,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
        ))
    }
}
