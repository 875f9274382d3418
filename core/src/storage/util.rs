use std::{collections::BTreeMap, fs, path::Path};

use super::error::*;

#[must_use]
pub fn write_with_mkdir<P, C>(filepath: P, contents: C) -> Result<()>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let filepath = filepath.as_ref();

    if let Some(dir) = filepath.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::new(ActionKind::CreateDir, dir, e))?
    }
    fs::write(filepath, contents).map_err(|e| Error::new(ActionKind::WriteFile, filepath, e))
}

#[must_use]
pub fn read_to_string(filepath: impl AsRef<Path>) -> Result<String> {
    let filepath = filepath.as_ref();
    fs::read_to_string(filepath).map_err(|e| Error::new(ActionKind::ReadFile, filepath, e))
}

pub type StringMap = BTreeMap<String, String>;

#[must_use]
pub fn write_string_map(filepath: impl AsRef<Path>, map: &StringMap) -> Result<()> {
    let filepath = filepath.as_ref();
    let json = serde_json::to_string_pretty(map)
        .map_err(|e| Error::new(ActionKind::SerializeToJson, filepath, e))?;
    self::write_with_mkdir(filepath, json)
}

/// Reads a JSON object whose values are all strings.
#[must_use]
pub fn read_string_map(filepath: impl AsRef<Path>) -> Result<StringMap> {
    let filepath = filepath.as_ref();
    let json = self::read_to_string(filepath)?;
    serde_json::from_str(&json)
        .map_err(|e| Error::new(ActionKind::DeserializeFromJson, filepath, e))
}
