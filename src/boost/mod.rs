//! Tag boosting engine
//!
//! Recognises known entities (party names, politicians) in article text and
//! turns them into relevance tags that can be merged with classifier output.
//!
//! # Components
//!
//! - `tokenizer`: word extraction and Snowball stemming
//! - `entry`: tags, boost entries, relevance tags, registration payloads
//! - `store`: vocabulary and tag store traits
//! - `database`: SQLite implementation of both stores
//! - `matcher`: token / n-gram matching against the vocabulary
//! - `merge`: combining two relevance tag sets
//! - `registrar`: registering term to tag mappings
//! - `seeds`: initial party vocabulary

pub mod database;
pub mod entry;
pub mod matcher;
pub mod merge;
pub mod registrar;
pub mod seeds;
pub mod store;
pub mod tokenizer;

pub use database::BoostDatabase;
pub use entry::{BoostEntry, BoostMapping, BoostRequest, RelevanceTag, Tag};
pub use matcher::{BoostMatcher, BOOST_RELEVANCE};
pub use merge::combine_relevance_tags;
pub use registrar::BoostRegistrar;
pub use seeds::{seed_database, SEED_TAGS};
pub use store::{BoostStore, TagStore};
pub use tokenizer::{StemLanguage, Tokenizer};
