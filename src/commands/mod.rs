pub mod boost;
pub mod init;
pub mod register;
pub mod tags;

use colored::*;
use std::io::Read;
use std::path::Path;

use tagbooster::boost::BoostDatabase;
use tagbooster::core::paths::AppPaths;

/// Open the configured database, exiting with a hint when it was never created
pub fn open_database(paths: &AppPaths) -> anyhow::Result<BoostDatabase> {
    if !paths.database.exists() {
        eprintln!(
            "{}",
            "Boost database not initialized. Run 'tagbooster init' first.".red()
        );
        std::process::exit(1);
    }

    BoostDatabase::open(&paths.database)
}

/// Read a file, or stdin when the path is "-"
pub fn read_input(source: &Path) -> anyhow::Result<String> {
    use anyhow::Context;

    if source == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source.display()))
}
