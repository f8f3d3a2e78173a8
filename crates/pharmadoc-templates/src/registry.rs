#![deny(unsafe_code)]

//! Template registry.
//!
//! Maps every [`SystemCategory`] to the [`TemplateRecord`] used to fill
//! document skeletons. Only a few categories carry a dedicated record; the
//! rest resolve to the generic `CUSTOM` record, so [`lookup`] is total.

use pharmadoc_model::{SystemCategory, TemplateRecord};

static HPLC: TemplateRecord = TemplateRecord {
    description: "High Performance Liquid Chromatography system used for drug substance and product analysis",
    regulations: "21 CFR Part 11, EU Annex 11, USP <1058>",
    gamp_category: "4",
    risk_method: "FMEA",
    interfaces: "LIMS, CDS, Electronic Notebook",
    val_approach: "Includes IQ, OQ, PQ with performance verification",
};

static LIMS: TemplateRecord = TemplateRecord {
    description: "Laboratory Information Management System for managing lab workflows, samples, and test results",
    regulations: "21 CFR Part 11, EU Annex 11, ISO 17025",
    gamp_category: "4",
    risk_method: "HACCP",
    interfaces: "HPLC, CDS, ERP, QMS",
    val_approach: "Full lifecycle validation including URS, FRS, DS, IQ, OQ, PQ",
};

static CUSTOM: TemplateRecord = TemplateRecord {
    description: "Custom system requiring validation",
    regulations: "Applicable GMP regulations",
    gamp_category: "As determined by risk assessment",
    risk_method: "FMEA or HACCP",
    interfaces: "To be determined",
    val_approach: "Risk-based validation approach",
};

/// Dedicated record for `category`, if one exists.
fn specific(category: SystemCategory) -> Option<&'static TemplateRecord> {
    match category {
        SystemCategory::Hplc => Some(&HPLC),
        SystemCategory::Lims => Some(&LIMS),
        SystemCategory::Custom => Some(&CUSTOM),
        SystemCategory::Scada
        | SystemCategory::Ems
        | SystemCategory::Mes
        | SystemCategory::Erp
        | SystemCategory::Cds
        | SystemCategory::Qms => None,
    }
}

/// Template record for `category`, falling back to the `CUSTOM` record.
pub fn lookup(category: SystemCategory) -> &'static TemplateRecord {
    specific(category).unwrap_or(&CUSTOM)
}

/// True when `category` has its own record rather than the fallback.
pub fn has_specific_record(category: SystemCategory) -> bool {
    specific(category).is_some()
}

/// Every category with its resolved record, in [`SystemCategory::ALL`] order.
pub fn records() -> impl Iterator<Item = (SystemCategory, &'static TemplateRecord)> {
    SystemCategory::ALL
        .into_iter()
        .map(|category| (category, lookup(category)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_categories() {
        let with_record: Vec<_> = SystemCategory::ALL
            .into_iter()
            .filter(|category| has_specific_record(*category))
            .collect();
        assert_eq!(
            with_record,
            vec![
                SystemCategory::Hplc,
                SystemCategory::Lims,
                SystemCategory::Custom
            ]
        );
    }

    #[test]
    fn lims_record() {
        let record = lookup(SystemCategory::Lims);
        assert_eq!(record.risk_method, "HACCP");
        assert_eq!(record.interfaces, "HPLC, CDS, ERP, QMS");
    }
}
