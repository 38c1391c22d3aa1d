//! One-shot corpus query with grouped output

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde_json::json;
use sift::format::age_label;
use sift::SearchEngine;

pub fn execute(text: &str, corpus: &Path, record_type: &str, json: bool) -> Result<()> {
    let records = super::load_corpus(corpus)?;

    let mut engine = SearchEngine::new();
    engine.set_corpus(records)?;
    engine.select_type(record_type)?;

    // One-shot run: no keystrokes to collapse, so skip the debounce wait
    engine.submit(text);
    let outcome = engine.flush();

    if json {
        let payload = json!({
            "query": outcome.as_ref().map(|o| o.query.as_str()).unwrap_or(""),
            "count": engine.results().len(),
            "groups": engine.grouped_results(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let results = engine.results();
    if results.is_empty() {
        println!("No results for \"{}\"", text.trim());
        return Ok(());
    }

    println!(
        "Found {} result{} for \"{}\"\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        text.trim()
    );

    let now = Utc::now();
    for (domain_type, group) in engine.grouped_results() {
        println!(
            "{} ({})",
            domain_type.to_string().bold(),
            group.len()
        );
        for record in group {
            println!(
                "  {}  {}  {}",
                record.title.cyan(),
                format!("{}% match", (record.relevance * 100.0).round() as u32).green(),
                age_label(record.timestamp, now).dimmed()
            );
            if !record.description.is_empty() {
                println!("    {}", record.description);
            }
            println!(
                "    {}",
                format!("{} · {}", record.category, record.source).dimmed()
            );
        }
        println!();
    }

    Ok(())
}
