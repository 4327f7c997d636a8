//! Boost registration command

use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::path::Path;

use super::{open_database, read_input};
use tagbooster::boost::{BoostRegistrar, BoostRequest, Tokenizer};
use tagbooster::core::paths::AppPaths;

#[derive(Serialize)]
struct RegisterResult {
    status: &'static str,
    registered: usize,
}

/// Register a `{ "map": [...] }` payload read from a file or stdin
pub fn run(paths: &AppPaths, source: &Path, json: bool) -> Result<()> {
    let body = read_input(source)?;
    let request = BoostRequest::from_json(&body)?;

    let db = open_database(paths)?;
    let registrar = BoostRegistrar::new(&db, &db, Tokenizer::new(paths.config.boost.language));

    registrar.register_request(&request)?;
    let registered = request.mappings()?.len();

    if json {
        let result = RegisterResult {
            status: "success",
            registered,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Registered {} boost terms ({} total)",
            "✓".green(),
            registered.to_string().bold(),
            db.boost_count()?
        );
    }

    Ok(())
}
