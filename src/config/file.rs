//! Settings file loading for the `fspick` binary.
//!
//! Handles loading and deserializing display settings from `fspick.toml`.
//! The lookup order is the `FSPICK_CONFIG` environment variable, then
//! `$XDG_CONFIG_HOME/fspick/fspick.toml`, then `~/.config/fspick/fspick.toml`.
//! A missing or unparseable file falls back to the built-in defaults; the
//! picker must stay usable without any configuration.

use crate::config::options::DEFAULT_PAGE_SIZE;
use crate::ui::icons::{IconSet, Icons};

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Raw `fspick.toml` contents. Everything is optional.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Settings {
    display_files: bool,
    display_hidden: bool,
    can_select_file: bool,
    page_size: usize,
    icons: IconSetting,
}

/// The `icons` key accepts either `icons = false` or a table of replacements:
///
/// ```toml
/// [icons]
/// current_dir = ">"
/// dir = "+"
/// file = "-"
/// ```
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum IconSetting {
    Toggle(bool),
    Custom {
        current_dir: String,
        dir: String,
        file: String,
    },
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            display_files: true,
            display_hidden: false,
            can_select_file: true,
            page_size: DEFAULT_PAGE_SIZE,
            icons: IconSetting::Toggle(true),
        }
    }
}

impl Settings {
    /// Loads settings from the default path, falling back to defaults when
    /// the file is missing or invalid.
    pub fn load() -> Self {
        let path = Self::default_path();
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Settings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("fspick: error parsing {}: {e}", path.display());
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Determines the settings file path: `FSPICK_CONFIG` first, then the
    /// platform config directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FSPICK_CONFIG") {
            return PathBuf::from(path);
        }
        if let Some(config) = dirs::config_dir() {
            return config.join("fspick/fspick.toml");
        }
        PathBuf::from("fspick.toml")
    }

    // Accessors

    #[inline]
    pub fn display_files(&self) -> bool {
        self.display_files
    }

    #[inline]
    pub fn display_hidden(&self) -> bool {
        self.display_hidden
    }

    #[inline]
    pub fn can_select_file(&self) -> bool {
        self.can_select_file
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn icons(&self) -> Icons {
        match &self.icons {
            IconSetting::Toggle(true) => Icons::default(),
            IconSetting::Toggle(false) => Icons::Disabled,
            IconSetting::Custom {
                current_dir,
                dir,
                file,
            } => Icons::Set(IconSet::new(current_dir, dir, file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let settings: Settings = toml::from_str("")?;
        assert!(settings.display_files());
        assert!(!settings.display_hidden());
        assert!(settings.can_select_file());
        assert_eq!(settings.page_size(), DEFAULT_PAGE_SIZE);
        assert!(matches!(settings.icons(), Icons::Set(_)));
        Ok(())
    }

    #[test]
    fn icons_false_disables_icons() -> Result<(), Box<dyn std::error::Error>> {
        let settings: Settings = toml::from_str("icons = false")?;
        assert!(matches!(settings.icons(), Icons::Disabled));
        Ok(())
    }

    #[test]
    fn icons_table_replaces_the_set() -> Result<(), Box<dyn std::error::Error>> {
        let settings: Settings = toml::from_str(
            r#"
            display_hidden = true

            [icons]
            current_dir = ">"
            dir = "+"
            file = "-"
            "#,
        )?;
        assert!(settings.display_hidden());
        match settings.icons() {
            Icons::Set(set) => {
                assert_eq!(set.dir(), "+");
                assert_eq!(set.file(), "-");
                assert_eq!(set.current_dir(), ">");
            }
            Icons::Disabled => return Err("expected a custom icon set".into()),
        }
        Ok(())
    }

    #[test]
    fn unparseable_settings_fall_back() {
        let parsed = toml::from_str::<Settings>("display_files = \"maybe\"");
        assert!(parsed.is_err());
    }
}
