//! Field-mapping configuration.
//!
//! Export column headers drift between entry-system releases, so columns are
//! picked by position and given canonical names from this mapping.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three export types the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Teams,
    TeamMembers,
    CommunityMembers,
}

impl ReportKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::TeamMembers => "team members",
            Self::CommunityMembers => "community members",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One source column picked by position and renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Zero-based position in the raw export.
    pub index: usize,
    /// Canonical column name.
    pub name: String,
}

impl ColumnMapping {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Mapping for a single export type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMapping {
    /// Canonical columns that must not contain blank cells.
    #[serde(default)]
    pub required: Vec<String>,
    /// Ordered (index, name) pairs.
    pub columns: Vec<ColumnMapping>,
}

impl ReportMapping {
    pub fn new(columns: Vec<ColumnMapping>, required: Vec<String>) -> Self {
        Self { required, columns }
    }

    /// Canonical names in mapping order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Check the mapping is self-consistent.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate canonical names and for required names
    /// that no column mapping produces.
    pub fn validate(&self, kind: ReportKind) -> Result<(), MappingError> {
        let mut seen = BTreeSet::new();
        for column in &self.columns {
            if column.name.trim().is_empty() {
                return Err(MappingError::BlankName {
                    report: kind,
                    index: column.index,
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(MappingError::DuplicateName {
                    report: kind,
                    name: column.name.clone(),
                });
            }
        }
        for name in &self.required {
            if !seen.contains(name.as_str()) {
                return Err(MappingError::UnmappedRequired {
                    report: kind,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Resolved mapping for every export type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub teams: ReportMapping,
    pub team_members: ReportMapping,
    #[serde(default)]
    pub community_members: Option<ReportMapping>,
}

impl FieldMapping {
    pub fn report(&self, kind: ReportKind) -> Option<&ReportMapping> {
        match kind {
            ReportKind::Teams => Some(&self.teams),
            ReportKind::TeamMembers => Some(&self.team_members),
            ReportKind::CommunityMembers => self.community_members.as_ref(),
        }
    }

    /// Validate every report mapping present.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, see [`ReportMapping::validate`].
    pub fn validate(&self) -> Result<(), MappingError> {
        self.teams.validate(ReportKind::Teams)?;
        self.team_members.validate(ReportKind::TeamMembers)?;
        if let Some(community) = &self.community_members {
            community.validate(ReportKind::CommunityMembers)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{report} mapping: column index {index} has a blank name")]
    BlankName { report: ReportKind, index: usize },
    #[error("{report} mapping: '{name}' is mapped more than once")]
    DuplicateName { report: ReportKind, name: String },
    #[error("{report} mapping: required column '{name}' is not mapped")]
    UnmappedRequired { report: ReportKind, name: String },
}
