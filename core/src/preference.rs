use crate::storage::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Preference {
    #[strum(serialize = "auto-copy")]
    AutoCopy,
    #[strum(serialize = "auto-delete")]
    AutoDelete,
}

impl Preference {
    pub const fn key(&self) -> &'static str {
        use Preference::*;
        match self {
            AutoCopy => keys::AUTO_COPY,
            AutoDelete => keys::AUTO_DELETE,
        }
    }
}

/// Enabled unless the stored value is exactly `"false"`.
/// Absent, `"true"`, `"False"`, `""` and anything else all mean enabled.
pub fn parse_flag(stored: Option<&str>) -> bool {
    stored != Some("false")
}

pub const fn flag_str(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}
