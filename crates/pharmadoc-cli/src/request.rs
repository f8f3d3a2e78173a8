//! Generation requests assembled from CLI flags.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use pharmadoc_model::SystemCategory;
use pharmadoc_report::{Selection, generate_on, write_document};

/// Where generated documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Directory(PathBuf),
    Stdout,
}

/// Everything needed for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_name: String,
    pub category: SystemCategory,
    pub selection: Selection,
    pub date: NaiveDate,
    pub destination: Destination,
}

#[derive(Debug)]
pub struct GeneratedFile {
    pub title: String,
    /// `None` when printed to stdout.
    pub path: Option<PathBuf>,
    pub file_name: String,
    pub bytes: usize,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub system_name: String,
    pub category: SystemCategory,
    pub date: NaiveDate,
    pub files: Vec<GeneratedFile>,
}

/// Render the request and deliver it to its destination.
///
/// `stdout` receives document text only for [`Destination::Stdout`];
/// consecutive documents are separated by a blank line.
pub fn execute(request: &GenerateRequest, stdout: &mut impl Write) -> Result<GenerateOutcome> {
    let span = info_span!(
        "request",
        system = %request.system_name,
        category = request.category.code(),
        date = %request.date
    );
    let _guard = span.enter();
    let start = Instant::now();

    let documents = generate_on(
        request.selection,
        &request.system_name,
        request.category,
        request.date,
    );

    let mut files = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let path = match &request.destination {
            Destination::Directory(dir) => Some(
                write_document(dir, document)
                    .with_context(|| format!("write {}", document.title))?,
            ),
            Destination::Stdout => {
                if index > 0 {
                    writeln!(stdout).context("write to stdout")?;
                }
                stdout
                    .write_all(document.content.as_bytes())
                    .context("write to stdout")?;
                None
            }
        };
        files.push(GeneratedFile {
            title: document.title.clone(),
            path,
            file_name: document.file_name.clone(),
            bytes: document.content.len(),
        });
    }
    stdout.flush().context("flush stdout")?;

    info!(
        documents = files.len(),
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok(GenerateOutcome {
        system_name: request.system_name.clone(),
        category: request.category,
        date: request.date,
        files,
    })
}
