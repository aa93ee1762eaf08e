use crate::watermark::settings::WatermarkSettings;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "watermark_settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stdout.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Values the settings panel starts with.
    #[serde(default)]
    pub watermark: WatermarkSettings,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut loaded: Settings = serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))?;
        if loaded.watermark.sanitize() {
            tracing::warn!(
                path = %path.display(),
                "clamped out-of-range watermark settings"
            );
        }
        Ok(loaded)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create settings folder {}", parent.display()))?;
        }

        let mut sanitized = self.clone();
        sanitized.watermark.sanitize();
        let json = serde_json::to_string_pretty(&sanitized).context("serialize settings")?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

#[cfg(test)]
mod tests {
    use super::{settings_path_from_exe_path, Settings, SETTINGS_FILE_NAME};
    use std::path::Path;

    #[test]
    fn settings_path_is_resolved_next_to_executable() {
        let exe = Path::new("/tmp/watermark/bin/screen_watermark");
        let path = settings_path_from_exe_path(exe).expect("path");
        assert_eq!(path, Path::new("/tmp/watermark/bin").join(SETTINGS_FILE_NAME));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = Settings::load(&dir.path().join(SETTINGS_FILE_NAME)).expect("load");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn empty_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write empty settings");

        let loaded = Settings::load(&path).expect("load");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn roundtrip_through_nested_folder() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);

        let mut settings = Settings::default();
        settings.debug_logging = true;
        settings.watermark.text = "CONFIDENTIAL".into();
        settings.watermark.angle = 45;

        settings.save(&path).expect("save settings");
        let loaded = Settings::load(&path).expect("load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn out_of_range_values_are_clamped_on_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "watermark": { "font_size": 1, "spacing": 99999, "angle": -400 } }"#,
        )
        .expect("write settings");

        let loaded = Settings::load(&path).expect("load settings");
        assert_eq!(loaded.watermark.font_size, 10);
        assert_eq!(loaded.watermark.spacing, 1000);
        assert_eq!(loaded.watermark.angle, -90);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "{ not json").expect("write settings");

        let err = Settings::load(&path).expect_err("malformed settings");
        assert!(format!("{err}").contains(SETTINGS_FILE_NAME));
    }

    #[test]
    fn blank_log_file_is_ignored() {
        let settings = Settings {
            log_file: Some("  ".into()),
            ..Settings::default()
        };
        assert_eq!(settings.log_file_path(), None);
    }
}
