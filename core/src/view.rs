use crate::preference::Preference;

/// Shown in a field that has nothing to display.
pub const PLACEHOLDER: &str = "...";

/// Shown in both fields after a failed fetch.
pub const ERROR_GLYPH: &str = "❌";

/// What the controller draws on: two toggles and two text fields.
pub trait View: Send + Sync {
    fn set_toggle(&self, pref: Preference, checked: bool);

    fn set_fingerprint_field(&self, text: &str);

    /// Replacing the text also drops any selection.
    fn set_token_field(&self, text: &str);

    /// Select the whole token text for manual copying.
    fn select_token_field(&self);
}
