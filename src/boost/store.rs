//! Store seams for the boost engine
//!
//! The matcher and registrar only see these traits. Implementations report
//! failures through `anyhow`; the engine turns them into `BoostError`.

use anyhow::Result;
use std::collections::BTreeSet;

use super::entry::{BoostEntry, Tag};

/// Persisted boost vocabulary keyed by leading token
pub trait BoostStore {
    /// All entries whose `match_token` is in `tokens`, with their tag resolved.
    ///
    /// Entries whose leading token is not in the set must not be returned.
    fn find_by_match_tokens(&self, tokens: &BTreeSet<String>) -> Result<Vec<BoostEntry>>;

    /// Persist a batch; an error means the caller must treat the batch as failed
    fn save_all(&self, entries: &[BoostEntry]) -> Result<()>;
}

/// Tag lookup owned by the tagging subsystem
pub trait TagStore {
    fn find_by_names(&self, names: &BTreeSet<String>) -> Result<Vec<Tag>>;
}

impl<S: BoostStore + ?Sized> BoostStore for &S {
    fn find_by_match_tokens(&self, tokens: &BTreeSet<String>) -> Result<Vec<BoostEntry>> {
        (**self).find_by_match_tokens(tokens)
    }

    fn save_all(&self, entries: &[BoostEntry]) -> Result<()> {
        (**self).save_all(entries)
    }
}

impl<S: TagStore + ?Sized> TagStore for &S {
    fn find_by_names(&self, names: &BTreeSet<String>) -> Result<Vec<Tag>> {
        (**self).find_by_names(names)
    }
}
