//! Document classes and kinds.
//!
//! A [`DocumentKind`] is one generated document type. Every kind belongs to
//! exactly one [`DocumentClass`] and carries a fixed title (used in the merged
//! output banners and in download file names), a heading (first line of the
//! rendered document) and a document number prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Top-level grouping of document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentClass {
    /// Computer system validation lifecycle deliverables.
    Validation,
    /// Quality management system records.
    #[serde(rename = "QMS")]
    Qms,
}

impl DocumentClass {
    pub const ALL: [DocumentClass; 2] = [DocumentClass::Validation, DocumentClass::Qms];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentClass::Validation => "Validation",
            DocumentClass::Qms => "QMS",
        }
    }

    /// Banner heading used when documents of this class are merged.
    pub fn banner(&self) -> &'static str {
        match self {
            DocumentClass::Validation => "VALIDATION DOCUMENTS",
            DocumentClass::Qms => "QMS DOCUMENTS",
        }
    }
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DocumentClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownClass(s.to_string()))
    }
}

/// A generated document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Validation Master Plan.
    Vmp,
    /// User Requirements Specification.
    Urs,
    /// Functional Requirements Specification.
    Frs,
    /// Design Qualification protocol.
    Dq,
    /// Installation Qualification protocol.
    Iq,
    /// Operational Qualification protocol.
    Oq,
    /// Performance Qualification protocol.
    Pq,
    /// Validation Summary Report.
    Vsr,
    /// Deviation Report.
    Deviation,
    /// Risk Assessment Report.
    RiskAssessment,
    /// Corrective and Preventive Action report.
    Capa,
    /// Change Control Request.
    ChangeControl,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 12] = [
        DocumentKind::Vmp,
        DocumentKind::Urs,
        DocumentKind::Frs,
        DocumentKind::Dq,
        DocumentKind::Iq,
        DocumentKind::Oq,
        DocumentKind::Pq,
        DocumentKind::Vsr,
        DocumentKind::Deviation,
        DocumentKind::RiskAssessment,
        DocumentKind::Capa,
        DocumentKind::ChangeControl,
    ];

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Vmp => "vmp",
            DocumentKind::Urs => "urs",
            DocumentKind::Frs => "frs",
            DocumentKind::Dq => "dq",
            DocumentKind::Iq => "iq",
            DocumentKind::Oq => "oq",
            DocumentKind::Pq => "pq",
            DocumentKind::Vsr => "vsr",
            DocumentKind::Deviation => "dev",
            DocumentKind::RiskAssessment => "ra",
            DocumentKind::Capa => "capa",
            DocumentKind::ChangeControl => "ccr",
        }
    }

    /// Catalog title.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Vmp => "Validation Master Plan (VMP)",
            DocumentKind::Urs => "User Requirements (URS)",
            DocumentKind::Frs => "Functional Requirements (FRS)",
            DocumentKind::Dq => "Design Qualification (DQ)",
            DocumentKind::Iq => "Installation Qualification (IQ)",
            DocumentKind::Oq => "Operational Qualification (OQ)",
            DocumentKind::Pq => "Performance Qualification (PQ)",
            DocumentKind::Vsr => "Validation Summary Report (VSR)",
            DocumentKind::Deviation => "Deviation Report",
            DocumentKind::RiskAssessment => "Risk Assessment",
            DocumentKind::Capa => "CAPA Report",
            DocumentKind::ChangeControl => "Change Control Request",
        }
    }

    /// First line of the rendered document.
    pub fn heading(&self) -> &'static str {
        match self {
            DocumentKind::Vmp => "VALIDATION MASTER PLAN",
            DocumentKind::Urs => "USER REQUIREMENTS SPECIFICATION",
            DocumentKind::Frs => "FUNCTIONAL REQUIREMENTS SPECIFICATION",
            DocumentKind::Dq => "DESIGN QUALIFICATION PROTOCOL",
            DocumentKind::Iq => "INSTALLATION QUALIFICATION PROTOCOL",
            DocumentKind::Oq => "OPERATIONAL QUALIFICATION PROTOCOL",
            DocumentKind::Pq => "PERFORMANCE QUALIFICATION PROTOCOL",
            DocumentKind::Vsr => "VALIDATION SUMMARY REPORT",
            DocumentKind::Deviation => "DEVIATION REPORT",
            DocumentKind::RiskAssessment => "RISK ASSESSMENT REPORT",
            DocumentKind::Capa => "CORRECTIVE AND PREVENTIVE ACTION (CAPA) REPORT",
            DocumentKind::ChangeControl => "CHANGE CONTROL REQUEST",
        }
    }

    /// Prefix of the document number, e.g. `VMP` in `VMP-2024-03-001`.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Vmp => "VMP",
            DocumentKind::Urs => "URS",
            DocumentKind::Frs => "FRS",
            DocumentKind::Dq => "DQ",
            DocumentKind::Iq => "IQ",
            DocumentKind::Oq => "OQ",
            DocumentKind::Pq => "PQ",
            DocumentKind::Vsr => "VSR",
            DocumentKind::Deviation => "DEV",
            DocumentKind::RiskAssessment => "RA",
            DocumentKind::Capa => "CAPA",
            DocumentKind::ChangeControl => "CCR",
        }
    }

    pub fn class(&self) -> DocumentClass {
        match self {
            DocumentKind::Vmp
            | DocumentKind::Urs
            | DocumentKind::Frs
            | DocumentKind::Dq
            | DocumentKind::Iq
            | DocumentKind::Oq
            | DocumentKind::Pq
            | DocumentKind::Vsr => DocumentClass::Validation,
            DocumentKind::Deviation
            | DocumentKind::RiskAssessment
            | DocumentKind::Capa
            | DocumentKind::ChangeControl => DocumentClass::Qms,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DocumentKind {
    type Err = ModelError;

    /// Accepts the short code (`urs`) or the catalog title, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DocumentKind::ALL
            .into_iter()
            .find(|kind| {
                kind.code().eq_ignore_ascii_case(trimmed)
                    || kind.title().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownDocument(s.to_string()))
    }
}
