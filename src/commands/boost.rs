//! Boost lookup command

use anyhow::{bail, Context, Result};
use colored::*;
use std::path::PathBuf;

use super::{open_database, read_input};
use tagbooster::boost::{BoostMatcher, RelevanceTag};
use tagbooster::core::paths::AppPaths;

pub fn run(
    paths: &AppPaths,
    text: Option<String>,
    file: Option<PathBuf>,
    external: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), None) => text,
        (None, Some(file)) => read_input(&file)?,
        (Some(_), Some(_)) => bail!("Give either TEXT or --file, not both"),
        (None, None) => bail!("Nothing to analyze: give TEXT or --file"),
    };

    let external: Vec<RelevanceTag> = match external {
        Some(path) => {
            let content = read_input(&path)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse relevance tags in {}", path.display()))?
        }
        None => Vec::new(),
    };

    let db = open_database(paths)?;
    let matcher = BoostMatcher::from_config(&db, &paths.config.boost);

    let tags = matcher.boost_and_combine(&text, &external)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    println!("{}", "Boosted Tags".bold());
    println!("{}", "=".repeat(50));
    println!("Tokens: {}", matcher.tokenizer().tokenize(&text).join(" ").dimmed());
    println!();

    if tags.is_empty() {
        println!("{}", "No known tags found.".yellow());
        return Ok(());
    }

    for (i, t) in tags.iter().enumerate() {
        let relevance = format!("{:.2}", t.relevance);
        let relevance_colored = if t.relevance >= 0.8 {
            relevance.green()
        } else if t.relevance >= 0.5 {
            relevance.yellow()
        } else {
            relevance.red()
        };

        let kind = t.tag.kind.as_deref().unwrap_or("-");
        println!(
            "  {}. {} [{}] {}",
            i + 1,
            t.tag.name.cyan().bold(),
            relevance_colored,
            kind.dimmed()
        );
    }

    Ok(())
}
