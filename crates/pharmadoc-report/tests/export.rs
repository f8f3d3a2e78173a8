//! Integration tests for writing generated documents.

use chrono::NaiveDate;
use tempfile::TempDir;

use pharmadoc_model::{DocumentClass, DocumentKind, SystemCategory};
use pharmadoc_report::{
    CONTENT_TYPE, Selection, file_name, generate, generate_on, write_document,
};

fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn download_name_for_urs() {
    assert_eq!(
        file_name("HPLC 01", "User Requirements (URS)"),
        "HPLC_01_User_Requirements_(URS).txt"
    );
    assert_eq!(CONTENT_TYPE, "text/plain");
}

#[test]
fn writes_single_document() {
    let dir = TempDir::new().unwrap();
    let documents = generate_on(
        Selection::Single(DocumentKind::Vmp),
        "HPLC 01",
        SystemCategory::Hplc,
        march_15(),
    );
    assert_eq!(documents.len(), 1);

    let path = write_document(dir.path(), &documents[0]).unwrap();

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("HPLC_01_Validation_Master_Plan_(VMP).txt")
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, documents[0].content);
}

#[test]
fn creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("validation").join("2024");
    let documents = generate_on(
        Selection::Class(DocumentClass::Validation),
        "MES-4",
        SystemCategory::Mes,
        march_15(),
    );

    for document in &documents {
        write_document(&nested, document).unwrap();
    }

    let mut names: Vec<String> = std::fs::read_dir(&nested)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), documents.len());
    assert!(names.contains(&"MES-4_Performance_Qualification_(PQ).txt".to_string()));
}

#[test]
fn rendered_documents_serialize() {
    let documents = generate_on(Selection::Merged, "QMS", SystemCategory::Qms, march_15());
    let json = serde_json::to_value(&documents).unwrap();
    assert_eq!(json[0]["title"], "Merged Documents");
    assert_eq!(json[0]["file_name"], "QMS_Merged_Documents.txt");
}

#[test]
fn generate_today_names_files_like_generate_on() {
    let today = generate(
        Selection::Class(DocumentClass::Validation),
        "CDS 9",
        SystemCategory::Cds,
    );
    let dated = generate_on(
        Selection::Class(DocumentClass::Validation),
        "CDS 9",
        SystemCategory::Cds,
        march_15(),
    );
    let names = |docs: &[pharmadoc_report::RenderedDocument]| {
        docs.iter().map(|doc| doc.file_name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&today), names(&dated));
}
