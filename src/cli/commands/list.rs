//! List command implementation
//!
//! Prints the groups of a document that can be passed to `export --group`.

use crate::document::{Document, SvgDocument};
use crate::domain::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// SVG document to inspect
    pub document: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One listed collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    /// Collection name
    pub name: String,
    /// Number of exportable members
    pub members: usize,
}

/// Every named group of `document` with its member count, in document order
pub fn collection_entries(document: &dyn Document) -> Vec<CollectionEntry> {
    document
        .collection_names()
        .into_iter()
        .map(|name| {
            let members = document
                .find_collection(&name)
                .map(|collection| collection.len())
                .unwrap_or(0);
            CollectionEntry { name, members }
        })
        .collect()
}

/// Pretty-printed JSON array of `entries`
pub fn entries_json(entries: &[CollectionEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let document = match SvgDocument::open(&self.document) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        let entries = collection_entries(&document);
        if self.json {
            match entries_json(&entries) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(e.exit_code());
                }
            }
            return Ok(0);
        }

        if entries.is_empty() {
            println!("No named groups in {}", self.document.display());
            return Ok(0);
        }
        for entry in &entries {
            println!("{:>5}  {}", entry.members, entry.name);
        }
        Ok(0)
    }
}
