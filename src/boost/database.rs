//! Boost vocabulary database
//!
//! SQLite persistence for tags and boost entries. Implements both
//! [`BoostStore`] and [`TagStore`] so one file backs the whole engine.

use anyhow::{anyhow, Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::entry::{BoostEntry, Tag};
use super::store::{BoostStore, TagStore};

/// Max bound parameters per IN (...) query; SQLite builds before 3.32 cap at 999
const LOOKUP_CHUNK: usize = 500;

const ENTRY_COLUMNS: &str = r#"
    SELECT b.id, b.match_token, b.ngram, b.name, t.id, t.name, t.kind
    FROM boost_tags b
    JOIN tags t ON t.id = b.tag_id
"#;

/// Boost vocabulary database manager
pub struct BoostDatabase {
    conn: Connection,
}

impl BoostDatabase {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open boost database: {}", path.display()))?;

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(Path::new(":memory:"))
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                kind TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS boost_tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                match_token TEXT NOT NULL CHECK (match_token <> ''),
                ngram TEXT NOT NULL DEFAULT '[]',
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_tags_name ON tags(name);
            CREATE INDEX IF NOT EXISTS idx_boost_tags_match_token ON boost_tags(match_token);
            "#,
        )?;

        Ok(())
    }

    /// Add a new tag
    pub fn add_tag(&self, name: &str, kind: Option<&str>) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO tags (name, kind) VALUES (?1, ?2)",
                params![name, kind],
            )
            .with_context(|| format!("Failed to add tag '{}'", name))?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Add a tag unless one with the same name exists; returns the stored tag
    pub fn ensure_tag(&self, name: &str, kind: Option<&str>) -> Result<Tag> {
        self.conn.execute(
            "INSERT OR IGNORE INTO tags (name, kind) VALUES (?1, ?2)",
            params![name, kind],
        )?;

        self.get_tag(name)?
            .ok_or_else(|| anyhow!("Tag '{}' vanished after insert", name))
    }

    /// Get a tag by name
    pub fn get_tag(&self, name: &str) -> Result<Option<Tag>> {
        let tag = self
            .conn
            .query_row(
                "SELECT id, name, kind FROM tags WHERE name = ?1",
                [name],
                row_to_tag,
            )
            .optional()?;

        Ok(tag)
    }

    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, kind FROM tags ORDER BY name")?;

        let tags = stmt
            .query_map([], row_to_tag)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    /// All boost entries in registration order
    pub fn list_boosts(&self) -> Result<Vec<BoostEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY b.id", ENTRY_COLUMNS))?;

        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    pub fn tag_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))?;

        Ok(count)
    }

    pub fn boost_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM boost_tags", [], |row| row.get(0))?;

        Ok(count)
    }

    /// Boost terms registered for one tag
    pub fn tag_boost_count(&self, tag_id: i64) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM boost_tags WHERE tag_id = ?1",
            [tag_id],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}

impl BoostStore for BoostDatabase {
    fn find_by_match_tokens(&self, tokens: &BTreeSet<String>) -> Result<Vec<BoostEntry>> {
        let tokens: Vec<&String> = tokens.iter().collect();
        let mut entries = Vec::new();

        for chunk in tokens.chunks(LOOKUP_CHUNK) {
            let sql = format!(
                "{} WHERE b.match_token IN ({})",
                ENTRY_COLUMNS,
                placeholders(chunk.len())
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_from_iter(chunk.iter()), row_to_entry)?
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read boost entries")?;
            entries.extend(rows);
        }

        entries.sort_by_key(|entry| entry.id);
        debug!(
            "Boost lookup: {} tokens -> {} candidate entries",
            tokens.len(),
            entries.len()
        );

        Ok(entries)
    }

    fn save_all(&self, entries: &[BoostEntry]) -> Result<()> {
        // Dropping the transaction without commit rolls the whole batch back
        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to start transaction")?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO boost_tags (tag_id, name, match_token, ngram) VALUES (?1, ?2, ?3, ?4)",
            )?;

            for entry in entries {
                let tag_id = entry.tag.id.ok_or_else(|| {
                    anyhow!(
                        "Boost entry '{}' references unsaved tag '{}'",
                        entry.name,
                        entry.tag.name
                    )
                })?;
                let ngram = serde_json::to_string(&entry.ngram)?;

                stmt.execute(params![tag_id, entry.name, entry.match_token, ngram])
                    .with_context(|| {
                        format!(
                            "Failed to insert boost entry '{}' for tag '{}'",
                            entry.term_tokens().join(" "),
                            entry.name
                        )
                    })?;
            }
        }

        tx.commit().context("Failed to commit boost entries")?;

        Ok(())
    }
}

impl TagStore for BoostDatabase {
    fn find_by_names(&self, names: &BTreeSet<String>) -> Result<Vec<Tag>> {
        let names: Vec<&String> = names.iter().collect();
        let mut tags = Vec::new();

        for chunk in names.chunks(LOOKUP_CHUNK) {
            let sql = format!(
                "SELECT id, name, kind FROM tags WHERE name IN ({})",
                placeholders(chunk.len())
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_from_iter(chunk.iter()), row_to_tag)?
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read tags")?;
            tags.extend(rows);
        }

        Ok(tags)
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn row_to_tag(row: &Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        kind: row.get(2)?,
    })
}

fn row_to_entry(row: &Row) -> rusqlite::Result<BoostEntry> {
    let ngram_json: String = row.get(2)?;
    let ngram: Vec<String> = serde_json::from_str(&ngram_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(BoostEntry {
        id: Some(row.get(0)?),
        match_token: row.get(1)?,
        ngram,
        name: row.get(3)?,
        tag: Tag {
            id: Some(row.get(4)?),
            name: row.get(5)?,
            kind: row.get(6)?,
        },
    })
}
