//! Editor settings
//!
//! Editor-wide settings that gate structural edits. Hosts build an
//! `EditorSettings` once per editing context and pass it explicitly to the
//! menu on every decision.
//!
//! All fields use `#[serde(default)]` so settings files written before a field
//! existed still deserialize.

use crate::error::SettingsError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tokio::fs;

/// Template lock applied to the editing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLock {
    /// No blocks may be inserted, moved or removed
    All,
    /// Blocks may be moved but not inserted or removed
    Insert,
}

/// Editor-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    /// `false`, `""` and `null` all mean unlocked
    #[serde(default, deserialize_with = "deserialize_template_lock")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_lock: Option<TemplateLock>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemplateLock {
    Flag(bool),
    Name(String),
}

fn deserialize_template_lock<'de, D>(deserializer: D) -> Result<Option<TemplateLock>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<RawTemplateLock>::deserialize(deserializer)? {
        None | Some(RawTemplateLock::Flag(false)) => Ok(None),
        Some(RawTemplateLock::Flag(true)) => Err(D::Error::custom(
            "templateLock `true` is ambiguous; use \"all\" or \"insert\"",
        )),
        Some(RawTemplateLock::Name(name)) => match name.as_str() {
            "" => Ok(None),
            "all" => Ok(Some(TemplateLock::All)),
            "insert" => Ok(Some(TemplateLock::Insert)),
            other => Err(D::Error::custom(format!(
                "unknown templateLock `{}`",
                other
            ))),
        },
    }
}

impl EditorSettings {
    pub fn locked(lock: TemplateLock) -> Self {
        Self {
            template_lock: Some(lock),
        }
    }

    /// Whether any template lock is active (removal is disallowed)
    pub fn is_locked(&self) -> bool {
        self.template_lock.is_some()
    }

    pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Load settings from a JSON file
///
/// Returns defaults (unlocked) when the file does not exist.
pub async fn load_settings(path: impl AsRef<Path>) -> Result<EditorSettings, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!("No editor settings at {:?}, using defaults", path);
        return Ok(EditorSettings::default());
    }

    let contents = fs::read_to_string(path).await?;
    let settings = EditorSettings::from_json_str(&contents)?;
    tracing::debug!("Loaded editor settings from {:?}: {:?}", path, settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_unlocked() {
        let settings = EditorSettings::default();
        assert!(!settings.is_locked());
    }

    #[test]
    fn test_any_lock_value_locks() {
        assert!(EditorSettings::locked(TemplateLock::All).is_locked());
        assert!(EditorSettings::locked(TemplateLock::Insert).is_locked());
    }

    #[test]
    fn test_parse_settings() {
        let settings = EditorSettings::from_json_str(r#"{"templateLock":"all"}"#).unwrap();
        assert_eq!(settings.template_lock, Some(TemplateLock::All));

        let settings = EditorSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, EditorSettings::default());

        let settings = EditorSettings::from_json_str(r#"{"templateLock":null}"#).unwrap();
        assert!(!settings.is_locked());
    }

    #[test]
    fn test_parse_false_lock_is_unlocked() {
        let settings = EditorSettings::from_json_str(r#"{"templateLock":false}"#).unwrap();
        assert!(!settings.is_locked());
        assert_eq!(settings, EditorSettings::default());

        let settings = EditorSettings::from_json_str(r#"{"templateLock":""}"#).unwrap();
        assert!(!settings.is_locked());
    }

    #[test]
    fn test_parse_rejects_unknown_lock() {
        let result = EditorSettings::from_json_str(r#"{"templateLock":"everything"}"#);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let result = EditorSettings::from_json_str(r#"{"templateLock":true}"#);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load_settings(temp_dir.path().join("missing.json"))
            .await
            .unwrap();

        assert_eq!(settings, EditorSettings::default());
    }

    #[tokio::test]
    async fn test_load_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("editor.json");
        std::fs::write(&path, r#"{"templateLock":"insert"}"#).unwrap();

        let settings = load_settings(&path).await.unwrap();
        assert_eq!(settings.template_lock, Some(TemplateLock::Insert));
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("editor.json");
        std::fs::write(&path, "not json").unwrap();

        let result = tokio_test::block_on(load_settings(&path));
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
