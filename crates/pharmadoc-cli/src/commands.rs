use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;

use pharmadoc_cli::listing::{catalog_entries, category_rows};
use pharmadoc_cli::request::{Destination, GenerateOutcome, GenerateRequest, execute};

use crate::cli::{DocumentsArgs, GenerateArgs};
use crate::summary::apply_table_style;

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label", "Template", "GAMP Category"]);
    apply_table_style(&mut table);
    for row in category_rows() {
        table.add_row(vec![
            row.category.code(),
            row.category.label(),
            row.template,
            row.gamp_category,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_documents(args: &DocumentsArgs) -> Result<()> {
    let entries = catalog_entries();

    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("serialize catalog")?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Class", "Code", "Title"]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![entry.class.name(), entry.code, entry.title]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let destination = if args.stdout {
        Destination::Stdout
    } else {
        let dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("resolve current directory")?,
        };
        Destination::Directory(dir)
    };
    let request = GenerateRequest {
        system_name: args.system_name.clone(),
        category: args.category,
        selection: args.selection.selection(),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        destination,
    };
    execute(&request, &mut io::stdout().lock())
}
