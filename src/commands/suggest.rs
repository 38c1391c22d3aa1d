//! Title suggestions for partial input

use std::path::Path;

use anyhow::Result;
use colored::*;
use sift::SearchEngine;

pub fn execute(text: &str, corpus: &Path, json: bool) -> Result<()> {
    let records = super::load_corpus(corpus)?;

    let mut engine = SearchEngine::new();
    engine.set_corpus(records)?;

    let hits = engine.suggest(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No suggestions for \"{}\"", text.trim());
        return Ok(());
    }

    for hit in hits {
        println!(
            "{}  {}",
            hit.text,
            format!("[{}]", hit.domain_type).dimmed()
        );
    }

    Ok(())
}
