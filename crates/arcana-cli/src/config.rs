//! Application configuration: where the card tables live and how to seed
//! readings.

use std::path::PathBuf;

use arcana_core::Locale;
use arcana_reading::ReadingConfig;

/// Configuration for the command-line front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory containing the card tables.
    pub data_dir: PathBuf,
    /// English card table file name.
    pub en_file: String,
    /// Chinese card table file name.
    pub zh_file: String,
    /// Locale used for output.
    pub locale: Locale,
    /// RNG seed for reproducible readings.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            en_file: "TarotCards_Full.csv".to_string(),
            zh_file: "tarot_chinese.csv".to_string(),
            locale: Locale::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the output locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Path of the card table for a locale.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        let file = match locale {
            Locale::En => &self.en_file,
            Locale::Zh => &self.zh_file,
        };
        self.data_dir.join(file)
    }

    /// Reading configuration derived from this config.
    pub fn reading(&self) -> ReadingConfig {
        ReadingConfig { seed: self.seed }
    }
}
