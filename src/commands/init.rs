//! Database initialization command

use anyhow::Result;
use colored::*;

use tagbooster::boost::{seed_database, BoostDatabase, Tokenizer};
use tagbooster::core::config::{Config, CONFIG_FILE};
use tagbooster::core::paths::AppPaths;

pub fn run(paths: &AppPaths, force: bool, write_config: bool) -> Result<()> {
    if write_config {
        let config_path = paths.root.join(CONFIG_FILE);
        if config_path.exists() && !force {
            println!(
                "{}",
                format!("{} already exists. Use --force to overwrite.", CONFIG_FILE).yellow()
            );
        } else {
            Config::default().save(&paths.root)?;
            println!("{} Wrote {}", "✓".green(), config_path.display());
        }
    }

    let db_path = &paths.database;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if db_path.exists() && !force {
        println!(
            "{}",
            "Boost database already exists. Use --force to reinitialize.".yellow()
        );
        return Ok(());
    }

    if force && db_path.exists() {
        std::fs::remove_file(db_path)?;
    }

    println!("{}", "Initializing boost database...".cyan());
    println!("Database path: {}", db_path.display());
    println!();

    let db = BoostDatabase::open(db_path)?;
    let count = seed_database(&db, Tokenizer::new(paths.config.boost.language))?;

    println!("{}", "=".repeat(50));
    println!(
        "{} {} tags seeded ({} tags, {} boost terms in total)",
        "✓".green(),
        count.to_string().bold(),
        db.tag_count()?,
        db.boost_count()?
    );
    println!("{}", "=".repeat(50));

    Ok(())
}
