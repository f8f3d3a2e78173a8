//! Selection-driven generation.
//!
//! A [`Selection`] mirrors what a user picks: one document, every document of
//! a class, or the merged document. [`generate_on`] turns it into named,
//! download-ready texts.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info_span};

use pharmadoc_model::{DocumentClass, DocumentKind, SystemCategory};

use crate::catalog::{kinds, render_merged_on};
use crate::export::{MERGED_TITLE, file_name, merged_file_name};
use crate::render::render_on;

/// Which documents to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(DocumentKind),
    Class(DocumentClass),
    Merged,
}

/// A rendered document with its download name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub file_name: String,
    pub content: String,
}

impl RenderedDocument {
    fn single(
        kind: DocumentKind,
        system_name: &str,
        category: SystemCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: kind.title().to_string(),
            file_name: file_name(system_name, kind.title()),
            content: render_on(kind, system_name, category, date),
        }
    }
}

/// Generate `selection` dated today.
pub fn generate(
    selection: Selection,
    system_name: &str,
    category: SystemCategory,
) -> Vec<RenderedDocument> {
    generate_on(selection, system_name, category, Local::now().date_naive())
}

/// Generate `selection` as of `date`.
pub fn generate_on(
    selection: Selection,
    system_name: &str,
    category: SystemCategory,
    date: NaiveDate,
) -> Vec<RenderedDocument> {
    let span = info_span!("generate", category = category.code(), ?selection);
    let _guard = span.enter();
    let documents = match selection {
        Selection::Single(kind) => {
            vec![RenderedDocument::single(kind, system_name, category, date)]
        }
        Selection::Class(class) => kinds(class)
            .iter()
            .map(|kind| RenderedDocument::single(*kind, system_name, category, date))
            .collect(),
        Selection::Merged => vec![RenderedDocument {
            title: MERGED_TITLE.to_string(),
            file_name: merged_file_name(system_name),
            content: render_merged_on(system_name, category, date),
        }],
    };
    debug!(count = documents.len(), "rendered documents");
    documents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn class_selection_follows_catalog_order() {
        let documents = generate_on(
            Selection::Class(DocumentClass::Qms),
            "EMS 1",
            SystemCategory::Ems,
            date(),
        );
        let titles: Vec<_> = documents.iter().map(|doc| doc.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Deviation Report",
                "Risk Assessment",
                "CAPA Report",
                "Change Control Request"
            ]
        );
        assert_eq!(documents[0].file_name, "EMS_1_Deviation_Report.txt");
    }

    #[test]
    fn merged_selection_yields_one_document() {
        let documents = generate_on(Selection::Merged, "MES", SystemCategory::Mes, date());
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].file_name, "MES_Merged_Documents.txt");
        assert!(documents[0].content.starts_with("MERGED DOCUMENTS FOR MES"));
    }
}
