//! Computerized system categories.
//!
//! Each category names a class of GxP system that documents can be generated
//! for. The set is closed: text that does not name one of these categories is
//! rejected when parsed, so a rendered document always refers to a known
//! category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// System category a document is generated for.
///
/// The display label is what appears in rendered documents, e.g.
/// `HPLC-01 (HPLC System)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemCategory {
    /// High Performance Liquid Chromatography instrument.
    Hplc,
    /// Laboratory Information Management System.
    Lims,
    /// Supervisory control and data acquisition.
    Scada,
    /// Environmental monitoring.
    Ems,
    /// Manufacturing execution.
    Mes,
    /// Enterprise resource planning.
    Erp,
    /// Chromatography data system.
    Cds,
    /// Quality management system.
    Qms,
    /// Anything not covered above; also the fallback template.
    Custom,
}

impl SystemCategory {
    /// All categories in presentation order.
    pub const ALL: [SystemCategory; 9] = [
        SystemCategory::Hplc,
        SystemCategory::Lims,
        SystemCategory::Scada,
        SystemCategory::Ems,
        SystemCategory::Mes,
        SystemCategory::Erp,
        SystemCategory::Cds,
        SystemCategory::Qms,
        SystemCategory::Custom,
    ];

    /// Short upper-case code, e.g. `HPLC`.
    pub fn code(&self) -> &'static str {
        match self {
            SystemCategory::Hplc => "HPLC",
            SystemCategory::Lims => "LIMS",
            SystemCategory::Scada => "SCADA",
            SystemCategory::Ems => "EMS",
            SystemCategory::Mes => "MES",
            SystemCategory::Erp => "ERP",
            SystemCategory::Cds => "CDS",
            SystemCategory::Qms => "QMS",
            SystemCategory::Custom => "CUSTOM",
        }
    }

    /// Label substituted into documents.
    pub fn label(&self) -> &'static str {
        match self {
            SystemCategory::Hplc => "HPLC System",
            SystemCategory::Lims => "Laboratory Information Management System",
            SystemCategory::Scada => "SCADA System",
            SystemCategory::Ems => "Environmental Monitoring System",
            SystemCategory::Mes => "Manufacturing Execution System",
            SystemCategory::Erp => "Enterprise Resource Planning System",
            SystemCategory::Cds => "Chromatography Data System",
            SystemCategory::Qms => "Quality Management System",
            SystemCategory::Custom => "Custom System",
        }
    }
}

impl fmt::Display for SystemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SystemCategory {
    type Err = ModelError;

    /// Accepts either the code (`lims`) or the full label
    /// (`Laboratory Information Management System`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SystemCategory::ALL
            .into_iter()
            .find(|category| {
                category.code().eq_ignore_ascii_case(trimmed)
                    || category.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
