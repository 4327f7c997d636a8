//! Boost vocabulary registration
//!
//! Turns human-authored term to tag mappings into boost entries: validate,
//! resolve every tag, tokenize every term, then persist the whole batch.
//! Nothing is written unless every mapping is valid.

use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{info, warn};

use super::entry::{BoostEntry, BoostMapping, BoostRequest, Tag};
use super::store::{BoostStore, TagStore};
use super::tokenizer::Tokenizer;
use crate::core::error::{BoostError, Result};

/// Registers boost terms into a vocabulary store
pub struct BoostRegistrar<B, T> {
    boosts: B,
    tags: T,
    tokenizer: Tokenizer,
}

impl<B: BoostStore, T: TagStore> BoostRegistrar<B, T> {
    pub fn new(boosts: B, tags: T, tokenizer: Tokenizer) -> Self {
        Self {
            boosts,
            tags,
            tokenizer,
        }
    }

    /// Register a `{ "map": [...] }` payload
    pub fn register_request(&self, request: &BoostRequest) -> Result<()> {
        self.register_boosts(request.mappings()?)
    }

    /// Register all mappings as one batch.
    ///
    /// Fails with `Validation` for empty input or an untokenizable term,
    /// `MissingTags` listing every unknown tag name, `Lookup` when the tag
    /// store fails and `Persistence` when the batch cannot be saved.
    pub fn register_boosts(&self, mappings: &[BoostMapping]) -> Result<()> {
        let entries = self.build_entries(mappings)?;

        self.boosts.save_all(&entries).map_err(|e| {
            warn!("Saving {} boost entries failed: {:#}", entries.len(), e);
            BoostError::persistence(e)
        })?;

        info!("Registered {} boost entries", entries.len());
        Ok(())
    }

    /// Validate and tokenize mappings without writing anything
    pub fn build_entries(&self, mappings: &[BoostMapping]) -> Result<Vec<BoostEntry>> {
        if mappings.is_empty() {
            return Err(BoostError::validation("No boost mappings given"));
        }
        if let Some(position) = mappings.iter().position(|m| m.tag.trim().is_empty()) {
            return Err(BoostError::validation(format!(
                "Mapping {} has an empty tag name",
                position
            )));
        }

        let tags_by_name = self.resolve_tags(mappings)?;

        mappings
            .iter()
            .map(|mapping| {
                let tag = tags_by_name
                    .get(mapping.tag.as_str())
                    .cloned()
                    .ok_or_else(|| BoostError::MissingTags(vec![mapping.tag.clone()]))?;

                let tokens = self.tokenizer.tokenize(mapping.effective_term());
                BoostEntry::from_tokens(&tokens, tag, mapping.tag.as_str()).ok_or_else(|| {
                    BoostError::validation(format!("Error parsing tag \"{}\"", mapping.tag))
                })
            })
            .collect()
    }

    /// Look up every referenced tag, reporting all unknown names at once
    fn resolve_tags(&self, mappings: &[BoostMapping]) -> Result<HashMap<String, Tag>> {
        let mut seen = HashSet::new();
        let names: Vec<&str> = mappings
            .iter()
            .map(|m| m.tag.as_str())
            .filter(|name| seen.insert(*name))
            .collect();

        let lookup: BTreeSet<String> = names.iter().map(|n| n.to_string()).collect();
        let tags_by_name: HashMap<String, Tag> = self
            .tags
            .find_by_names(&lookup)
            .map_err(BoostError::lookup)?
            .into_iter()
            .map(|tag| (tag.name.clone(), tag))
            .collect();

        let missing: Vec<String> = names
            .iter()
            .filter(|name| !tags_by_name.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            warn!("Following tags are unknown: {}", missing.join(", "));
            return Err(BoostError::MissingTags(missing));
        }

        Ok(tags_by_name)
    }
}
