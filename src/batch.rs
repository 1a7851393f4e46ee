//! Batch conversion of item directories.
//!
//! A base directory holds one subdirectory per item. Each subdirectory holds
//! a RIS export; the converter writes the metadata table next to it. Tables
//! are written once: a directory that already has one is skipped, so reruns
//! only pick up new items.
//!
//! ```text
//! ris/
//! ├── item-001/
//! │   ├── export.ris
//! │   └── metadata.csv   (written)
//! └── item-002/
//!     └── export.ris
//! ```
//!
//! Directories are converted on a bounded rayon pool. A failure inside one
//! directory is logged and reported; the other directories still run.

use crate::config::BatchConfig;
use crate::mapping::MetadataRow;
use crate::ris::RisParser;
use crate::table::render_table;
use crate::{ConvertError, Result};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Result of converting one item directory.
#[derive(Debug)]
pub enum GroupOutcome {
    /// A new table was written.
    Written { path: PathBuf, rows: usize },
    /// The directory already had a table; nothing was read or written.
    Skipped { path: PathBuf },
    /// Conversion failed; no table was left behind.
    Failed { dir: PathBuf, error: ConvertError },
}

/// Summary of a batch run, one outcome per item directory in name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<GroupOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|outcome| matches!(outcome, GroupOutcome::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, GroupOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, GroupOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, predicate: impl Fn(&GroupOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| predicate(outcome)).count()
    }
}

/// Converts every item directory below a base directory.
#[derive(Debug, Clone)]
pub struct BatchConverter {
    config: BatchConfig,
    parser: RisParser,
}

impl BatchConverter {
    #[must_use]
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            parser: RisParser::new(),
        }
    }

    /// Convert all item directories and wait for every one of them.
    ///
    /// # Errors
    ///
    /// Fails only when the configuration is invalid, the base directory cannot
    /// be listed, or the worker pool cannot start. Per-directory failures are
    /// returned inside the report.
    pub fn run(&self) -> Result<BatchReport> {
        self.config.validate()?;
        let groups = self.list_groups()?;
        info!(
            base_dir = %self.config.base_dir().display(),
            groups = groups.len(),
            jobs = self.config.jobs(),
            "starting batch"
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.jobs())
            .thread_name(|index| format!("ris2dspace-{index}"))
            .build()?;

        let outcomes: Vec<GroupOutcome> = pool.install(|| {
            groups
                .par_iter()
                .map(|dir| match self.convert_group(dir) {
                    Ok(outcome) => outcome,
                    Err(error) => {
                        error!(dir = %dir.display(), %error, "conversion failed");
                        GroupOutcome::Failed {
                            dir: dir.clone(),
                            error,
                        }
                    }
                })
                .collect()
        });

        let report = BatchReport { outcomes };
        info!(
            written = report.written(),
            skipped = report.skipped(),
            failed = report.failed(),
            "batch finished"
        );
        Ok(report)
    }

    /// Subdirectories of the base directory, sorted by name.
    fn list_groups(&self) -> Result<Vec<PathBuf>> {
        let mut groups = Vec::new();
        for entry in fs::read_dir(self.config.base_dir())? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                groups.push(entry.path());
            }
        }
        groups.sort();
        Ok(groups)
    }

    /// Convert one item directory.
    pub fn convert_group(&self, dir: &Path) -> Result<GroupOutcome> {
        let output = dir.join(self.config.output_file_name());
        if output.try_exists()? {
            info!(path = %output.display(), "table exists, skipping");
            return Ok(GroupOutcome::Skipped { path: output });
        }
        self.write_group(dir, output)
    }

    /// Parse, map and write one directory whose table did not exist when checked.
    fn write_group(&self, dir: &Path, output: PathBuf) -> Result<GroupOutcome> {
        let source = self.find_ris_file(dir)?;
        let records = self
            .parser
            .parse_reader(BufReader::new(File::open(&source)?))?;
        debug!(source = %source.display(), records = records.len(), "parsed RIS file");

        let rows: Vec<MetadataRow> = records.iter().map(MetadataRow::from).collect();
        let table = render_table(&rows, self.config.locales())?;
        match write_once(&output, &table) {
            Ok(()) => {}
            // Another run wrote the table after the existence check.
            Err(ConvertError::Io(err)) if err.kind() == ErrorKind::AlreadyExists => {
                info!(path = %output.display(), "table appeared meanwhile, skipping");
                return Ok(GroupOutcome::Skipped { path: output });
            }
            Err(err) => return Err(err),
        }

        info!(path = %output.display(), rows = rows.len(), "wrote table");
        Ok(GroupOutcome::Written {
            path: output,
            rows: rows.len(),
        })
    }

    /// The RIS file of a directory; with several candidates the last by name wins.
    fn find_ris_file(&self, dir: &Path) -> Result<PathBuf> {
        let extension = self.config.ris_extension();
        let mut candidates = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if matches && entry.file_type()?.is_file() {
                candidates.push(path);
            }
        }
        candidates.sort();

        if candidates.len() > 1 {
            warn!(
                dir = %dir.display(),
                count = candidates.len(),
                "several RIS files found, using the last one"
            );
        }
        candidates
            .pop()
            .ok_or_else(|| ConvertError::MissingRisFile(dir.to_path_buf()))
    }
}

/// Create `path` and write `contents`, refusing to replace an existing file.
fn write_once(path: &Path, contents: &[u8]) -> Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    write_or_remove(&file, path, contents)?;
    file.sync_all()?;
    Ok(())
}

/// Write `contents` to the freshly created `path`; a failed write removes
/// the partial file.
fn write_or_remove<W: Write>(mut writer: W, path: &Path, contents: &[u8]) -> Result<()> {
    if let Err(err) = writer.write_all(contents).and_then(|()| writer.flush()) {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "could not remove partial table");
        }
        return Err(err.into());
    }
    Ok(())
}
