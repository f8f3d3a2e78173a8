//! Rows behind the `categories` and `documents` listings.

use serde::Serialize;

use pharmadoc_model::{DocumentClass, SystemCategory};
use pharmadoc_report::catalog;
use pharmadoc_templates::{has_specific_record, records};

/// One catalog document, as printed by `documents --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub class: DocumentClass,
    pub code: &'static str,
    pub title: &'static str,
    pub heading: &'static str,
}

/// One system category and the template record it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: SystemCategory,
    /// Code of the record actually used; CUSTOM for fallback categories.
    pub template: &'static str,
    pub gamp_category: &'static str,
}

/// Catalog entries in catalog order, Validation before QMS.
pub fn catalog_entries() -> Vec<CatalogEntry> {
    catalog()
        .iter()
        .flat_map(|(class, kinds)| {
            kinds.iter().map(move |kind| CatalogEntry {
                class: *class,
                code: kind.code(),
                title: kind.title(),
                heading: kind.heading(),
            })
        })
        .collect()
}

pub fn category_rows() -> Vec<CategoryRow> {
    records()
        .map(|(category, record)| CategoryRow {
            category,
            template: if has_specific_record(category) {
                category.code()
            } else {
                SystemCategory::Custom.code()
            },
            gamp_category: record.gamp_category,
        })
        .collect()
}
