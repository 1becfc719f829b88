//! Backend selection by name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{CsvWriter, OutputError, OutputResult, OutputWriter};

/// Output backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Sqlite,
    Parquet,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Csv     => "csv",
            OutputFormat::Sqlite  => "sqlite",
            OutputFormat::Parquet => "parquet",
        }
    }

    /// Whether this backend was compiled in.
    pub fn is_available(self) -> bool {
        match self {
            OutputFormat::Csv     => true,
            OutputFormat::Sqlite  => cfg!(feature = "sqlite"),
            OutputFormat::Parquet => cfg!(feature = "parquet"),
        }
    }

    /// Open a writer for this backend.  `stem` prefixes every file created
    /// in `dir`.
    pub fn open(self, dir: &Path, stem: &str) -> OutputResult<Box<dyn OutputWriter>> {
        match self {
            OutputFormat::Csv => Ok(Box::new(CsvWriter::new(dir, stem)?)),

            #[cfg(feature = "sqlite")]
            OutputFormat::Sqlite => Ok(Box::new(crate::SqliteWriter::new(dir, stem)?)),
            #[cfg(not(feature = "sqlite"))]
            OutputFormat::Sqlite => Err(OutputError::FormatDisabled("sqlite")),

            #[cfg(feature = "parquet")]
            OutputFormat::Parquet => Ok(Box::new(crate::ParquetWriter::new(dir, stem)?)),
            #[cfg(not(feature = "parquet"))]
            OutputFormat::Parquet => Err(OutputError::FormatDisabled("parquet")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv"               => Ok(OutputFormat::Csv),
            "sqlite" | "db"     => Ok(OutputFormat::Sqlite),
            "parquet" | "pq"    => Ok(OutputFormat::Parquet),
            _ => Err(OutputError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
