//! tagbooster: boosts known entity tags in news text
//!
//! Text is tokenized and stemmed, matched against a registered vocabulary of
//! single tokens and n-grams, and the resulting relevance tags are merged with
//! tags from an external classifier.

pub mod boost;
pub mod core;
#[cfg(feature = "mcp")]
pub mod mcp;

pub use boost::{
    combine_relevance_tags, BoostDatabase, BoostEntry, BoostMapping, BoostMatcher,
    BoostRegistrar, BoostRequest, RelevanceTag, Tag, Tokenizer,
};
pub use crate::core::config::Config;
pub use crate::core::error::{BoostError, Result};
