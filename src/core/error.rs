//! Error taxonomy for the boost engine
//!
//! Store implementations report failures through `anyhow`; the matcher and
//! registrar fold those into [`BoostError`] with the full context chain so a
//! caller always gets the underlying reason.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoostError {
    /// Malformed or empty registration input, untokenizable term
    #[error("Validation error: {0}")]
    Validation(String),

    /// Tag names that do not resolve in the tag store (all of them, not just the first)
    #[error("Following tags are unknown: {}", .0.join(", "))]
    MissingTags(Vec<String>),

    #[error("Failed to persist boost entries: {0}")]
    Persistence(String),

    #[error("Boost lookup failed: {0}")]
    Lookup(String),
}

impl BoostError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap a store failure, keeping every context layer in the message
    pub fn lookup(err: anyhow::Error) -> Self {
        Self::Lookup(format!("{:#}", err))
    }

    pub fn persistence(err: anyhow::Error) -> Self {
        Self::Persistence(format!("{:#}", err))
    }

    /// True for errors caused by the caller's input rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingTags(_))
    }
}

pub type Result<T> = std::result::Result<T, BoostError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_missing_tags_lists_every_name() {
        let err = BoostError::MissingTags(vec!["Piratpartiet".to_string(), "Junilistan".to_string()]);
        assert_eq!(
            err.to_string(),
            "Following tags are unknown: Piratpartiet, Junilistan"
        );
    }

    #[test]
    fn test_store_errors_keep_context() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("disk I/O error"));
        let err = BoostError::persistence(inner.context("Failed to insert boost entry").unwrap_err());
        let message = err.to_string();
        assert!(message.contains("Failed to insert boost entry"));
        assert!(message.contains("disk I/O error"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(BoostError::validation("empty").is_client_error());
        assert!(BoostError::MissingTags(vec![]).is_client_error());
        assert!(!BoostError::Lookup("timeout".to_string()).is_client_error());
    }
}
