//! Seed vocabulary for a fresh database
//!
//! Swedish parties with their names and the party leaders of the 2014
//! elections as boost terms.

use anyhow::{Context, Result};
use tracing::info;

use super::database::BoostDatabase;
use super::entry::BoostMapping;
use super::registrar::BoostRegistrar;
use super::tokenizer::Tokenizer;

/// Seed tag definition
pub struct SeedTag {
    pub name: &'static str,
    pub kind: &'static str,
    /// Extra boost terms; the tag name itself is always registered
    pub terms: &'static [&'static str],
}

pub const SEED_TAGS: &[SeedTag] = &[
    // === Riksdagspartier ===
    SeedTag {
        name: "Socialdemokraterna",
        kind: "party",
        terms: &["Stefan Löfven"],
    },
    SeedTag {
        name: "Moderaterna",
        kind: "party",
        terms: &["Fredrik Reinfeldt"],
    },
    SeedTag {
        name: "Miljöpartiet",
        kind: "party",
        terms: &["Gustav Fridolin", "Åsa Romson"],
    },
    SeedTag {
        name: "Folkpartiet",
        kind: "party",
        terms: &["Jan Björklund"],
    },
    SeedTag {
        name: "Centerpartiet",
        kind: "party",
        terms: &["Annie Lööf"],
    },
    SeedTag {
        name: "Sverigedemokraterna",
        kind: "party",
        terms: &["Jimmie Åkesson"],
    },
    SeedTag {
        name: "Vänsterpartiet",
        kind: "party",
        terms: &["Jonas Sjöstedt"],
    },
    SeedTag {
        name: "Kristdemokraterna",
        kind: "party",
        terms: &["Göran Hägglund"],
    },
    // === Andra stora partier ===
    SeedTag {
        name: "Piratpartiet",
        kind: "party",
        terms: &[],
    },
    SeedTag {
        name: "Junilistan",
        kind: "party",
        terms: &[],
    },
    SeedTag {
        name: "Feministiskt initiativ",
        kind: "party",
        terms: &["Gudrun Schyman"],
    },
];

/// Add seed tags missing from the database and register their boost terms.
///
/// Tags that already have boost terms are left alone, so seeding twice adds nothing.
/// Tags that exist without any boost terms, e.g. after an interrupted seed,
/// get their terms registered again. Returns the number of tags seeded.
pub fn seed_database(db: &BoostDatabase, tokenizer: Tokenizer) -> Result<usize> {
    let mut mappings = Vec::new();
    let mut count = 0;

    for seed in SEED_TAGS {
        let tag = db.ensure_tag(seed.name, Some(seed.kind))?;
        let tag_id = tag
            .id
            .with_context(|| format!("Seed tag '{}' has no id", seed.name))?;
        if db.tag_boost_count(tag_id)? > 0 {
            continue;
        }

        mappings.push(BoostMapping::new(None, seed.name));
        for term in seed.terms {
            mappings.push(BoostMapping::new(Some(*term), seed.name));
        }

        count += 1;
    }

    if !mappings.is_empty() {
        BoostRegistrar::new(db, db, tokenizer)
            .register_boosts(&mappings)
            .context("Failed to register seed boost terms")?;
    }

    info!("Seeded {} tags ({} boost terms)", count, mappings.len());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boost::matcher::BoostMatcher;

    #[test]
    fn test_seed_unique_names() {
        let mut names: Vec<_> = SEED_TAGS.iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SEED_TAGS.len(), "Tag names should be unique");
    }

    #[test]
    fn test_seed_terms_tokenize() {
        let tokenizer = Tokenizer::swedish();
        for seed in SEED_TAGS {
            assert!(!tokenizer.tokenize(seed.name).is_empty());
            for term in seed.terms {
                assert!(!tokenizer.tokenize(term).is_empty(), "{} has no tokens", term);
            }
        }
    }

    #[test]
    fn test_seed_twice_adds_nothing() {
        let db = BoostDatabase::open_in_memory().unwrap();
        let added = seed_database(&db, Tokenizer::swedish()).unwrap();
        assert_eq!(added, SEED_TAGS.len());
        let boosts = db.boost_count().unwrap();

        assert_eq!(seed_database(&db, Tokenizer::swedish()).unwrap(), 0);
        assert_eq!(db.tag_count().unwrap() as usize, SEED_TAGS.len());
        assert_eq!(db.boost_count().unwrap(), boosts);
    }

    #[test]
    fn test_seed_registers_terms_for_bare_tags() {
        let db = BoostDatabase::open_in_memory().unwrap();
        let tag_id = db.add_tag("Moderaterna", Some("party")).unwrap();
        assert_eq!(db.tag_boost_count(tag_id).unwrap(), 0);

        let seeded = seed_database(&db, Tokenizer::swedish()).unwrap();
        assert_eq!(seeded, SEED_TAGS.len());
        assert_eq!(db.tag_count().unwrap() as usize, SEED_TAGS.len());
        assert!(db.tag_boost_count(tag_id).unwrap() > 0);

        let matcher = BoostMatcher::new(&db, Tokenizer::swedish());
        let tags = matcher.boost_tags("Fredrik Reinfeldt svarade").unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag.name, "Moderaterna");
    }

    #[test]
    fn test_seeded_vocabulary_boosts_leaders() {
        let db = BoostDatabase::open_in_memory().unwrap();
        seed_database(&db, Tokenizer::swedish()).unwrap();

        let matcher = BoostMatcher::new(&db, Tokenizer::swedish());
        let tags = matcher
            .boost_tags("Annie Lööf och Jimmie Åkesson debatterade i kväll")
            .unwrap();
        let mut names: Vec<_> = tags.iter().map(|t| t.tag.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Centerpartiet", "Sverigedemokraterna"]);
    }
}
