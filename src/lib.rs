//! Convert RIS citation exports into DSpace `metadata.csv` import tables.
//!
//! `ris2dspace` reads bibliographic records exported in RIS format (for example
//! the "export citation" feature of Airiti Library) and maps every record onto
//! the fixed bilingual column schema used by the DSpace batch importer.
//!
//! # Key Features
//!
//! - **RIS parsing**: blank-line separated records, repeated tags kept in order
//! - **Bilingual mapping**:
//!   - `王曉明(Xiao Ming Wang)` style author names split into two locales
//!   - keyword lists split into a native and a romanized half
//!   - two-part abstracts split by position
//! - **Citation relation**: journal, volume, issue and page range in one string
//! - **Batch conversion**: one table per item directory, written once and
//!   skipped on reruns, processed on a bounded worker pool
//!
//! # Basic Usage
//!
//! ```rust
//! use ris2dspace::{MetadataRow, RisParser};
//!
//! let input = "AU  - 王曉明(Xiao Ming Wang)\nT1  - 標題\nJO  - Foo\nVL  - 3\n\n";
//!
//! let records = RisParser::new().parse(input).unwrap();
//! let row = MetadataRow::from(&records[0]);
//! assert_eq!(row.author_native, "王曉明");
//! assert_eq!(row.author_romanized, "Xiao Ming Wang");
//! assert_eq!(row.relation_native, "Foo, Volume 3");
//! ```
//!
//! # Batch Conversion
//!
//! ```no_run
//! use ris2dspace::{BatchConfig, BatchConverter};
//!
//! let mut config = BatchConfig::new();
//! config.set_base_dir("ris").set_jobs(4);
//!
//! let report = BatchConverter::new(config).run().unwrap();
//! println!("{} written, {} skipped", report.written(), report.skipped());
//! ```
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type wrapping [`ConvertError`]. Only a
//! failure to list the base directory aborts a batch run; failures inside one
//! item directory are reported per group in the [`BatchReport`].

use std::path::PathBuf;
use thiserror::Error;

pub mod batch;
pub mod config;
pub mod mapping;
pub mod ris;
pub mod table;

// Reexports
pub use batch::{BatchConverter, BatchReport, GroupOutcome};
pub use config::{BatchConfig, Locales};
pub use mapping::MetadataRow;
pub use ris::{FieldValue, RisParser, RisRecord, RisTag};
pub use table::Column;

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting RIS exports.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No RIS file found in {}", .0.display())]
    MissingRisFile(PathBuf),

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_error_display() {
        let error = ConvertError::MissingRisFile(PathBuf::from("ris/item1"));
        assert_eq!(error.to_string(), "No RIS file found in ris/item1");

        let error = ConvertError::InvalidConfig("empty output name".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: empty output name");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: ConvertError = io.into();
        assert!(matches!(error, ConvertError::Io(_)));
    }
}
