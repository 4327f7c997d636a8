//! Boost vocabulary data model

use serde::{Deserialize, Serialize};

use crate::core::error::{BoostError, Result};

/// A tag owned by the tagging subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Store row id; absent for tags supplied by an external classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Tag type, e.g. "party" or "person"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: None,
        }
    }
}

/// A registered term: leading token used as lookup key plus the trailing n-gram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub match_token: String,
    #[serde(default)]
    pub ngram: Vec<String>,
    pub tag: Tag,
    /// Tag name at registration time; merge deduplicates on it
    pub name: String,
}

impl BoostEntry {
    /// Build an entry from a tokenized term.
    ///
    /// Returns `None` when there is no non-empty leading token.
    pub fn from_tokens(tokens: &[String], tag: Tag, name: impl Into<String>) -> Option<Self> {
        let (first, rest) = tokens.split_first()?;
        if first.is_empty() {
            return None;
        }

        Some(Self {
            id: None,
            match_token: first.clone(),
            ngram: rest.to_vec(),
            tag,
            name: name.into(),
        })
    }

    /// Whether this entry matches the tokenized text.
    ///
    /// Single-token entries match unconditionally: the store only returns
    /// entries whose leading token occurs in the text. Multi-token entries
    /// need the leading token immediately followed by the whole n-gram.
    pub fn matches(&self, tokens: &[String]) -> bool {
        if self.ngram.is_empty() {
            return true;
        }

        let span = self.ngram.len() + 1;
        tokens
            .windows(span)
            .any(|window| window[0] == self.match_token && window[1..] == self.ngram[..])
    }

    /// The full token sequence this entry was registered with
    pub fn term_tokens(&self) -> Vec<&str> {
        std::iter::once(self.match_token.as_str())
            .chain(self.ngram.iter().map(String::as_str))
            .collect()
    }
}

/// A tag with a relevance weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceTag {
    pub relevance: f32,
    pub tag: Tag,
}

impl RelevanceTag {
    pub fn new(tag: Tag, relevance: f32) -> Self {
        Self { relevance, tag }
    }

    pub fn name(&self) -> &str {
        &self.tag.name
    }
}

/// One human-authored term to tag mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostMapping {
    #[serde(default)]
    pub term: Option<String>,
    pub tag: String,
}

impl BoostMapping {
    pub fn new(term: Option<&str>, tag: &str) -> Self {
        Self {
            term: term.map(String::from),
            tag: tag.to_string(),
        }
    }

    /// Explicit term, or the tag name when the term is absent or blank
    pub fn effective_term(&self) -> &str {
        match self.term.as_deref() {
            Some(term) if !term.trim().is_empty() => term,
            _ => &self.tag,
        }
    }
}

/// Registration payload: `{ "map": [ { "term": "...", "tag": "..." }, ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoostRequest {
    #[serde(default)]
    pub map: Option<Vec<BoostMapping>>,
}

impl BoostRequest {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| BoostError::validation(format!("Malformed boost request: {}", e)))
    }

    /// The mappings, or a validation error when `map` was not given
    pub fn mappings(&self) -> Result<&[BoostMapping]> {
        self.map
            .as_deref()
            .ok_or_else(|| BoostError::validation("Required parameter \"map\" was not specified."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn entry(words: &[&str]) -> BoostEntry {
        BoostEntry::from_tokens(&tokens(words), Tag::named("S"), "S").unwrap()
    }

    #[test]
    fn test_from_tokens_splits_leading_token() {
        let e = entry(&["röd", "grön"]);
        assert_eq!(e.match_token, "röd");
        assert_eq!(e.ngram, vec!["grön"]);
        assert_eq!(e.term_tokens(), vec!["röd", "grön"]);

        let single = entry(&["moderaterna"]);
        assert!(single.ngram.is_empty());
    }

    #[test]
    fn test_from_tokens_rejects_empty() {
        assert!(BoostEntry::from_tokens(&[], Tag::named("S"), "S").is_none());
        assert!(BoostEntry::from_tokens(&tokens(&[""]), Tag::named("S"), "S").is_none());
    }

    #[test]
    fn test_single_token_matches_unconditionally() {
        assert!(entry(&["moderaterna"]).matches(&tokens(&["valet"])));
    }

    #[test]
    fn test_ngram_match_requires_contiguous_sequence() {
        let e = entry(&["stefan", "löfv"]);
        assert!(e.matches(&tokens(&["igår", "stefan", "löfv", "tal"])));
        assert!(!e.matches(&tokens(&["stefan", "höll", "löfv"])));
        assert!(!e.matches(&tokens(&["löfv", "stefan"])));
    }

    #[test]
    fn test_ngram_match_later_occurrence() {
        let e = entry(&["stefan", "löfv"]);
        assert!(e.matches(&tokens(&["stefan", "höll", "tal", "stefan", "löfv"])));
    }

    #[test]
    fn test_ngram_longer_than_text_fails_closed() {
        let e = entry(&["a", "b", "c", "d"]);
        assert!(!e.matches(&tokens(&["a", "b"])));
        assert!(!e.matches(&tokens(&["a", "b", "c"])));
        assert!(!e.matches(&[]));
    }

    #[test]
    fn test_effective_term_defaults_to_tag() {
        assert_eq!(BoostMapping::new(None, "Vänsterpartiet").effective_term(), "Vänsterpartiet");
        assert_eq!(BoostMapping::new(Some("  "), "Vänsterpartiet").effective_term(), "Vänsterpartiet");
        assert_eq!(BoostMapping::new(Some("röd grön"), "Vänsterpartiet").effective_term(), "röd grön");
    }

    #[test]
    fn test_request_parsing() {
        let request =
            BoostRequest::from_json(r#"{"map": [{"term": "röd grön", "tag": "Vänsterpartiet"}, {"tag": "Moderaterna"}]}"#)
                .unwrap();
        let mappings = request.mappings().unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[1].term, None);

        let missing = BoostRequest::from_json("{}").unwrap();
        assert!(matches!(missing.mappings(), Err(BoostError::Validation(_))));

        assert!(matches!(
            BoostRequest::from_json("not json"),
            Err(BoostError::Validation(_))
        ));
    }

    #[test]
    fn test_relevance_tag_serializes_like_classifier_output() {
        let rt = RelevanceTag::new(Tag::named("Centerpartiet"), 1.0);
        let json = serde_json::to_value(&rt).unwrap();
        assert_eq!(json["relevance"], 1.0);
        assert_eq!(json["tag"]["name"], "Centerpartiet");
        assert!(json["tag"].get("id").is_none());
    }
}
