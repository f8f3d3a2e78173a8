//! Integration tests for the catalog and merged output.

use chrono::NaiveDate;

use pharmadoc_model::{DocumentClass, DocumentKind, SystemCategory};
use pharmadoc_report::{
    MERGED_HEADER_RULE, catalog, kinds, render_merged, render_merged_on, render_on,
};

fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Expected block for one catalog entry inside the merged document.
fn entry_block(kind: DocumentKind, name: &str, category: SystemCategory) -> String {
    format!(
        "\n{}\n{}\n\n{}\n\n",
        kind.title().to_uppercase(),
        "=".repeat(kind.title().len()),
        render_on(kind, name, category, march_15())
    )
}

#[test]
fn merged_header() {
    let merged = render_merged_on("HPLC-01", SystemCategory::Hplc, march_15());
    let mut lines = merged.lines();
    assert_eq!(lines.next(), Some("MERGED DOCUMENTS FOR HPLC-01 (HPLC System)"));
    assert_eq!(lines.next(), Some("=".repeat(MERGED_HEADER_RULE).as_str()));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("VALIDATION DOCUMENTS"));
    assert_eq!(lines.next(), Some("-".repeat(20).as_str()));
}

#[test]
fn merged_is_concatenation_in_catalog_order() {
    let name = "LIMS-02";
    let category = SystemCategory::Lims;
    let merged = render_merged_on(name, category, march_15());

    let mut expected = format!(
        "MERGED DOCUMENTS FOR {name} ({})\n{}\n\n",
        category.label(),
        "=".repeat(MERGED_HEADER_RULE)
    );
    expected.push_str("VALIDATION DOCUMENTS\n--------------------\n");
    for kind in kinds(DocumentClass::Validation) {
        expected.push_str(&entry_block(*kind, name, category));
    }
    expected.push_str("\nQMS DOCUMENTS\n-------------\n");
    for kind in kinds(DocumentClass::Qms) {
        expected.push_str(&entry_block(*kind, name, category));
    }

    assert_eq!(merged, expected);
}

#[test]
fn every_title_is_followed_by_matching_rule() {
    let merged = render_merged_on("CDS", SystemCategory::Cds, march_15());
    let lines: Vec<&str> = merged.lines().collect();
    for (_, kinds) in catalog() {
        for kind in *kinds {
            let heading = kind.title().to_uppercase();
            let position = lines
                .iter()
                .position(|line| *line == heading)
                .unwrap_or_else(|| panic!("missing banner for {}", kind.title()));
            assert_eq!(lines[position + 1].len(), kind.title().chars().count());
            assert!(lines[position + 1].chars().all(|ch| ch == '='));
        }
    }
}

#[test]
fn documents_appear_in_registration_order() {
    let merged = render_merged_on("ERP", SystemCategory::Erp, march_15());
    let positions: Vec<usize> = catalog()
        .iter()
        .flat_map(|(_, kinds)| kinds.iter())
        .map(|kind| {
            merged
                .find(kind.heading())
                .unwrap_or_else(|| panic!("missing {}", kind.heading()))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn merged_today_contains_every_document() {
    let merged = render_merged("EMS-1", SystemCategory::Ems);
    assert!(merged.starts_with("MERGED DOCUMENTS FOR EMS-1 (Environmental Monitoring System)"));
    for kind in DocumentKind::ALL {
        let number = format!("Document Number: {}-", kind.number_prefix());
        assert!(merged.contains(&number), "missing {number}");
    }
}
