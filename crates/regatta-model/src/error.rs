use thiserror::Error;

/// Broad class of a pipeline failure.
///
/// Every class is fatal to the current run; inputs are static snapshots, so
/// nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required column is missing or blank.
    Schema,
    /// A code or number could not be parsed.
    Parse,
    /// A value falls outside its allowed domain.
    Value,
    /// The underlying table engine failed.
    Table,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{report} report has {width} columns, mapping for '{column}' points at index {index}")]
    ColumnIndexOutOfRange {
        report: String,
        column: String,
        index: usize,
        width: usize,
    },

    #[error("no field mapping configured for the {report} report")]
    MissingMapping { report: String },

    #[error("{report} report is missing required column '{column}'")]
    MissingColumn { report: String, column: String },

    #[error("{report} report column '{column}' is blank in {count} row(s)")]
    BlankRequired {
        report: String,
        column: String,
        count: usize,
    },

    #[error("boat type '{code}' (row {row}) has no seat count")]
    BoatType { code: String, row: usize },

    #[error("seat count '{value}' in row {row} is not a whole number")]
    SeatCount { value: String, row: usize },

    #[error("column '{column}' row {row}: expected Y, N or blank, found '{value}'")]
    InvalidFlag {
        column: String,
        row: usize,
        value: String,
    },

    #[error("composite crew member in row {row} of crew '{crew_id}' has no primary club")]
    MissingPrimaryClub { row: usize, crew_id: String },

    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ColumnIndexOutOfRange { .. }
            | Self::MissingMapping { .. }
            | Self::MissingColumn { .. }
            | Self::BlankRequired { .. } => ErrorKind::Schema,
            Self::BoatType { .. } | Self::SeatCount { .. } => ErrorKind::Parse,
            Self::InvalidFlag { .. } | Self::MissingPrimaryClub { .. } => ErrorKind::Value,
            Self::Polars(_) => ErrorKind::Table,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
