use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charset::{CharacterClass, CharacterPool};
use crate::errors::{ConfigurationError, SettingsError};

/// Parameters of a single generation request.
///
/// `length` is unsigned, so negative or fractional lengths cannot be
/// expressed; text inputs (CLI arguments, the defaults file) reject them
/// before a config is ever built. A length of zero is valid and produces an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub const DEFAULT: GenerationConfig = GenerationConfig {
        length: 12,
        include_lowercase: true,
        include_uppercase: true,
        include_numbers: true,
        include_symbols: true,
    };

    /// A config with every class disabled, to be built up with the setters.
    pub const fn none(length: usize) -> Self {
        Self {
            length,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }

    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub const fn lowercase(mut self, enabled: bool) -> Self {
        self.include_lowercase = enabled;
        self
    }

    pub const fn uppercase(mut self, enabled: bool) -> Self {
        self.include_uppercase = enabled;
        self
    }

    pub const fn numbers(mut self, enabled: bool) -> Self {
        self.include_numbers = enabled;
        self
    }

    pub const fn symbols(mut self, enabled: bool) -> Self {
        self.include_symbols = enabled;
        self
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |class| self.includes(*class))
    }

    pub fn has_character_set(&self) -> bool {
        self.classes().next().is_some()
    }

    /// Builds the pool for this config, failing when no class is enabled.
    pub fn pool(&self) -> Result<CharacterPool, ConfigurationError> {
        let classes: Vec<CharacterClass> = self.classes().collect();
        if classes.is_empty() {
            debug!("rejected generation request with no character set selected");
            return Err(ConfigurationError::EmptyCharacterPool);
        }

        Ok(CharacterPool::from_classes(&classes))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `<config dir>/keygen/config.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keygen").join("config.json"))
}

/// Reads generation defaults from a JSON file. Missing fields fall back to
/// [`GenerationConfig::DEFAULT`].
pub fn load_settings(path: &Path) -> Result<GenerationConfig, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?config, "loaded generation defaults");

    Ok(config)
}

/// Resolves the defaults the CLI starts from.
///
/// An explicit path must exist. Without one the per-user file is used when
/// present, otherwise the built-in defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<GenerationConfig, SettingsError> {
    if let Some(path) = explicit {
        return load_settings(path);
    }

    match default_settings_path() {
        Some(path) if path.is_file() => load_settings(&path),
        _ => Ok(GenerationConfig::DEFAULT),
    }
}
