//! Configuration for batch conversion.
//!
//! # Example
//!
//! ```
//! use ris2dspace::{BatchConfig, Locales};
//!
//! let mut config = BatchConfig::new();
//! config
//!     .set_base_dir("exports")
//!     .set_output_file_name("metadata.csv")
//!     .set_jobs(2)
//!     .set_locales(Locales::new("zh_CN", "en"));
//! assert!(config.validate().is_ok());
//! ```

use crate::{ConvertError, Result};
use std::path::{Path, PathBuf};

/// Default directory holding one subdirectory per item.
pub const DEFAULT_BASE_DIR: &str = "ris";
/// Default name of the table written into each item directory.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "metadata.csv";
/// Default extension of RIS exports, without the dot.
pub const DEFAULT_RIS_EXTENSION: &str = "ris";
/// Default locale of original-script columns.
pub const DEFAULT_NATIVE_LOCALE: &str = "zh_TW";
/// Default locale of romanized columns.
pub const DEFAULT_ROMANIZED_LOCALE: &str = "en_US";

/// Locale codes substituted into the bilingual column headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    /// Locale of the original-script values, e.g. `zh_TW`.
    pub native: String,
    /// Locale of the romanized values, e.g. `en_US`.
    pub romanized: String,
}

impl Locales {
    pub fn new(native: impl Into<String>, romanized: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            romanized: romanized.into(),
        }
    }
}

impl Default for Locales {
    fn default() -> Self {
        Self::new(DEFAULT_NATIVE_LOCALE, DEFAULT_ROMANIZED_LOCALE)
    }
}

/// Settings for a [`BatchConverter`](crate::BatchConverter) run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    base_dir: PathBuf,
    output_file_name: String,
    ris_extension: String,
    jobs: usize,
    locales: Locales,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchConfig {
    /// Creates a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            ris_extension: DEFAULT_RIS_EXTENSION.to_string(),
            jobs: default_jobs(),
            locales: Locales::default(),
        }
    }

    /// Sets the directory that holds the item directories
    pub fn set_base_dir(&mut self, base_dir: impl Into<PathBuf>) -> &mut Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets the file name of the table written into each item directory
    pub fn set_output_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.output_file_name = name.into();
        self
    }

    /// Sets the extension identifying RIS files; a leading dot is ignored
    pub fn set_ris_extension(&mut self, extension: &str) -> &mut Self {
        self.ris_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets the number of worker threads; `0` selects the number of CPUs
    pub fn set_jobs(&mut self, jobs: usize) -> &mut Self {
        self.jobs = if jobs == 0 { default_jobs() } else { jobs };
        self
    }

    /// Sets the locale pair used in column headers
    pub fn set_locales(&mut self, locales: Locales) -> &mut Self {
        self.locales = locales;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn output_file_name(&self) -> &str {
        &self.output_file_name
    }

    pub fn ris_extension(&self) -> &str {
        &self.ris_extension
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    /// Checks that the settings can describe a run.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidConfig` for an empty or path-like output
    /// file name, an empty extension, or an empty locale code.
    pub fn validate(&self) -> Result<()> {
        let name = Path::new(&self.output_file_name);
        if self.output_file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(ConvertError::InvalidConfig(format!(
                "output file name must be a plain file name: '{}'",
                self.output_file_name
            )));
        }
        if self.ris_extension.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "RIS extension must not be empty".into(),
            ));
        }
        if self.locales.native.is_empty() || self.locales.romanized.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "locale codes must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::new();
        assert_eq!(config.base_dir(), Path::new("ris"));
        assert_eq!(config.output_file_name(), "metadata.csv");
        assert_eq!(config.ris_extension(), "ris");
        assert_eq!(config.locales(), &Locales::new("zh_TW", "en_US"));
        assert_eq!(
            Locales::default(),
            Locales::new(DEFAULT_NATIVE_LOCALE, DEFAULT_ROMANIZED_LOCALE)
        );
        assert!(config.jobs() >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let mut config = BatchConfig::new();
        config.set_ris_extension(".RIS").set_jobs(3);
        assert_eq!(config.ris_extension(), "RIS");
        assert_eq!(config.jobs(), 3);

        config.set_jobs(0);
        assert!(config.jobs() >= 1);
    }

    #[rstest]
    #[case("")]
    #[case("out/metadata.csv")]
    #[case("..")]
    fn test_invalid_output_file_name(#[case] name: &str) {
        let mut config = BatchConfig::new();
        config.set_output_file_name(name);
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_locales() {
        let mut config = BatchConfig::new();
        config.set_locales(Locales::new("", "en_US"));
        assert!(config.validate().is_err());
    }
}
