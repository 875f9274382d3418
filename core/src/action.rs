use std::str::FromStr;

use crate::{controller::TokenController, preference::Preference};

/// What the user can do on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reload,
    Copy,
    Delete,
    Toggle(Preference),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl Action {
    /// `(key, label)` for every action, in display order.
    pub const KEYS: &'static [(&'static str, &'static str)] = &[
        ("r", "reload"),
        ("c", "copy"),
        ("d", "delete"),
        ("a", "auto-copy"),
        ("x", "auto-delete"),
        ("q", "quit"),
    ];
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Action::*;
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "reload" => Ok(Reload),
            "c" | "copy" => Ok(Copy),
            "d" | "delete" => Ok(Delete),
            "a" | "auto-copy" => Ok(Toggle(Preference::AutoCopy)),
            "x" | "auto-delete" => Ok(Toggle(Preference::AutoDelete)),
            "q" | "quit" | "exit" => Ok(Quit),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

/// Runs `action` on the session. Returns `false` once the session should end.
pub async fn dispatch(ctl: &TokenController, action: Action) -> bool {
    use Action::*;
    match action {
        Reload => {
            // Already reported on the panel.
            let _ = ctl.refresh().await;
        }
        Copy => ctl.copy_token().await,
        Delete => ctl.delete_token(),
        Toggle(pref) => {
            ctl.toggle_preference(pref);
        }
        Quit => return false,
    }
    true
}
