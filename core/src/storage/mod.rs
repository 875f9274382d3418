pub mod error;
pub mod file;
pub mod memory;

pub(crate) mod util;

pub use error::{Error, Result};
pub use file::*;
pub use memory::*;

/// Keys in the local store.
pub mod keys {
    pub const AUTO_COPY: &str = "autoCopy";
    pub const AUTO_DELETE: &str = "autoDelete";
    /// Last known fingerprint, shown as a hint before the first fetch.
    pub const FINGER: &str = "finger";
}

/// String-to-string store that outlives a session.
/// Writes are immediate and the last one wins.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
