use serde::Serialize;

/// Descriptive fields substituted into document skeletons for one category.
///
/// Records are compiled into the binary and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TemplateRecord {
    pub description: &'static str,
    /// Applicable regulations, e.g. `21 CFR Part 11, EU Annex 11`.
    pub regulations: &'static str,
    /// GAMP 5 software category (free text, not interpreted).
    pub gamp_category: &'static str,
    pub risk_method: &'static str,
    pub interfaces: &'static str,
    pub val_approach: &'static str,
}
