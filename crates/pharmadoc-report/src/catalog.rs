//! Document catalog and merged output.

use chrono::{Local, NaiveDate};
use tracing::debug;

use pharmadoc_model::{DocumentClass, DocumentKind, SystemCategory};

use crate::render::render_on;

/// Width of the rule under the merged document header.
pub const MERGED_HEADER_RULE: usize = 50;

static CATALOG: [(DocumentClass, &[DocumentKind]); 2] = [
    (
        DocumentClass::Validation,
        &[
            DocumentKind::Vmp,
            DocumentKind::Urs,
            DocumentKind::Frs,
            DocumentKind::Dq,
            DocumentKind::Iq,
            DocumentKind::Oq,
            DocumentKind::Pq,
            DocumentKind::Vsr,
        ],
    ),
    (
        DocumentClass::Qms,
        &[
            DocumentKind::Deviation,
            DocumentKind::RiskAssessment,
            DocumentKind::Capa,
            DocumentKind::ChangeControl,
        ],
    ),
];

/// Document classes with their kinds, in registration order.
///
/// The order is part of the output contract: merged documents are emitted in
/// exactly this sequence.
pub fn catalog() -> &'static [(DocumentClass, &'static [DocumentKind])] {
    &CATALOG
}

/// Kinds registered under `class`.
pub fn kinds(class: DocumentClass) -> &'static [DocumentKind] {
    catalog()
        .iter()
        .find(|(entry, _)| *entry == class)
        .map(|(_, kinds)| *kinds)
        .unwrap_or_default()
}

/// Resolve a catalog entry by class and exact title.
pub fn find(class: DocumentClass, title: &str) -> Option<DocumentKind> {
    kinds(class)
        .iter()
        .copied()
        .find(|kind| kind.title() == title)
}

/// Every catalog document for `system_name`, dated today, in one text.
pub fn render_merged(system_name: &str, category: SystemCategory) -> String {
    render_merged_on(system_name, category, Local::now().date_naive())
}

/// Every catalog document as of `date`, concatenated under class banners.
///
/// Each document is preceded by its upper-cased title and a rule of `=` as
/// long as the title.
pub fn render_merged_on(system_name: &str, category: SystemCategory, date: NaiveDate) -> String {
    let mut merged = format!("MERGED DOCUMENTS FOR {system_name} ({})\n", category.label());
    merged.push_str(&"=".repeat(MERGED_HEADER_RULE));
    merged.push_str("\n\n");

    for (index, (class, kinds)) in catalog().iter().enumerate() {
        if index > 0 {
            merged.push('\n');
        }
        let banner = class.banner();
        merged.push_str(banner);
        merged.push('\n');
        merged.push_str(&"-".repeat(banner.chars().count()));
        merged.push('\n');

        for kind in *kinds {
            let title = kind.title();
            merged.push('\n');
            merged.push_str(&title.to_uppercase());
            merged.push('\n');
            merged.push_str(&"=".repeat(title.chars().count()));
            merged.push_str("\n\n");
            merged.push_str(&render_on(*kind, system_name, category, date));
            merged.push_str("\n\n");
        }
        debug!(class = %class, documents = kinds.len(), "merged document class");
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_kind_classes() {
        for (class, kinds) in catalog() {
            for kind in *kinds {
                assert_eq!(kind.class(), *class, "{kind:?} registered under {class}");
            }
        }
        let registered: usize = catalog().iter().map(|(_, kinds)| kinds.len()).sum();
        assert_eq!(registered, DocumentKind::ALL.len());
    }

    #[test]
    fn validation_is_registered_first() {
        let classes: Vec<_> = catalog().iter().map(|(class, _)| *class).collect();
        assert_eq!(classes, vec![DocumentClass::Validation, DocumentClass::Qms]);
    }

    #[test]
    fn find_by_title() {
        assert_eq!(
            find(DocumentClass::Validation, "User Requirements (URS)"),
            Some(DocumentKind::Urs)
        );
        assert_eq!(find(DocumentClass::Qms, "User Requirements (URS)"), None);
        assert_eq!(
            find(DocumentClass::Qms, "Risk Assessment"),
            Some(DocumentKind::RiskAssessment)
        );
    }
}
