//! Tag and vocabulary listing commands

use anyhow::Result;
use colored::*;
use serde::Serialize;

use super::open_database;
use tagbooster::core::paths::AppPaths;

/// Add a tag so boost terms can reference it
pub fn run_add(paths: &AppPaths, name: &str, kind: Option<&str>) -> Result<()> {
    let db = open_database(paths)?;

    if db.get_tag(name)?.is_some() {
        println!("{}", format!("Tag '{}' already exists.", name).yellow());
        return Ok(());
    }

    db.add_tag(name, kind)?;
    println!("{} Added tag {}", "✓".green(), name.cyan().bold());

    Ok(())
}

pub fn run_list(paths: &AppPaths, json: bool) -> Result<()> {
    let db = open_database(paths)?;
    let tags = db.list_tags()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    println!("{}", "Tags".bold());
    println!("{}", "=".repeat(50));
    for tag in &tags {
        println!(
            "  {} {}",
            tag.name.cyan(),
            tag.kind.as_deref().unwrap_or("").dimmed()
        );
    }
    println!();
    println!("Total: {}", tags.len());

    Ok(())
}

#[derive(Serialize)]
struct BoostRow {
    term: String,
    tag: String,
}

pub fn run_boosts(paths: &AppPaths, json: bool) -> Result<()> {
    let db = open_database(paths)?;
    let rows: Vec<BoostRow> = db
        .list_boosts()?
        .into_iter()
        .map(|entry| BoostRow {
            term: entry.term_tokens().join(" "),
            tag: entry.name,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Boost Vocabulary".bold());
    println!("{}", "=".repeat(50));
    for row in &rows {
        println!("  {} → {}", row.term.yellow(), row.tag.cyan());
    }
    println!();
    println!("Total: {}", rows.len());

    Ok(())
}
