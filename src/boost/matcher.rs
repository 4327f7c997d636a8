//! Boost matcher
//!
//! Finds registered boost terms in free text. The store narrows candidates
//! by leading token; the n-gram continuation is verified here against the
//! token sequence.

use tracing::debug;

use super::entry::RelevanceTag;
use super::merge::combine_relevance_tags;
use super::store::BoostStore;
use super::tokenizer::{unique_tokens, Tokenizer};
use crate::core::config::BoostConfig;
use crate::core::error::{BoostError, Result};

/// Default relevance for a boosted tag
pub const BOOST_RELEVANCE: f32 = 1.0;

/// Tag booster over a vocabulary store
pub struct BoostMatcher<S> {
    store: S,
    tokenizer: Tokenizer,
    relevance: f32,
}

impl<S: BoostStore> BoostMatcher<S> {
    pub fn new(store: S, tokenizer: Tokenizer) -> Self {
        Self {
            store,
            tokenizer,
            relevance: BOOST_RELEVANCE,
        }
    }

    pub fn from_config(store: S, config: &BoostConfig) -> Self {
        Self::new(store, Tokenizer::new(config.language)).with_relevance(config.relevance)
    }

    /// Set the relevance assigned to boosted tags
    pub fn with_relevance(mut self, relevance: f32) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Relevance tags for every boost entry found in `text`.
    ///
    /// One tag per matching entry; entries sharing a tag are not deduplicated
    /// here, see [`combine_relevance_tags`].
    pub fn boost_tags(&self, text: &str) -> Result<Vec<RelevanceTag>> {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let search_tokens = unique_tokens(&tokens);
        let candidates = self
            .store
            .find_by_match_tokens(&search_tokens)
            .map_err(BoostError::lookup)?;

        let boosted: Vec<RelevanceTag> = candidates
            .into_iter()
            .filter(|entry| entry.matches(&tokens))
            .map(|entry| RelevanceTag::new(entry.tag, self.relevance))
            .collect();

        debug!(
            "Boosted {} tags from {} tokens ({} distinct)",
            boosted.len(),
            tokens.len(),
            search_tokens.len()
        );

        Ok(boosted)
    }

    /// Boost `text` and merge the result with tags from another source.
    ///
    /// Boosted tags are the first side, so they win relevance ties.
    pub fn boost_and_combine(
        &self,
        text: &str,
        external: &[RelevanceTag],
    ) -> Result<Vec<RelevanceTag>> {
        let boosted = self.boost_tags(text)?;
        Ok(combine_relevance_tags(&boosted, external))
    }
}
