//! Parameter structures for MCP tools

use schemars::JsonSchema;
use serde::Deserialize;

use crate::boost::entry::{BoostMapping, RelevanceTag, Tag};

/// A tag with relevance from another source, e.g. the article classifier
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RelevanceTagParam {
    #[schemars(description = "Tag name")]
    pub name: String,
    #[schemars(description = "Relevance weight, typically 0.0-1.0")]
    pub relevance: f32,
    #[schemars(description = "Tag type, e.g. 'party' or 'person'")]
    #[serde(default)]
    pub kind: Option<String>,
}

impl From<RelevanceTagParam> for RelevanceTag {
    fn from(param: RelevanceTagParam) -> Self {
        RelevanceTag::new(
            Tag {
                id: None,
                name: param.name,
                kind: param.kind,
            },
            param.relevance,
        )
    }
}

/// Parameters for tags_boost tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BoostParams {
    /// Article or document body
    #[schemars(description = "Article text to search for known entities")]
    pub text: String,
    /// Classifier tags to merge with the boosted ones
    #[schemars(description = "Optional tags from another classifier to merge with boosted tags")]
    #[serde(default)]
    pub external: Vec<RelevanceTagParam>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MappingParam {
    #[schemars(description = "Term to recognise (defaults to the tag name), e.g. 'Stefan Löfven'")]
    #[serde(default)]
    pub term: Option<String>,
    #[schemars(description = "Name of an existing tag")]
    pub tag: String,
}

impl From<MappingParam> for BoostMapping {
    fn from(param: MappingParam) -> Self {
        BoostMapping {
            term: param.term,
            tag: param.tag,
        }
    }
}

/// Parameters for tags_register_boosts tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegisterParams {
    #[schemars(description = "Term to tag mappings to register as one batch")]
    pub map: Vec<MappingParam>,
}

/// Parameters for tags_combine tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CombineParams {
    #[schemars(description = "First tag set; wins relevance ties")]
    pub first: Vec<RelevanceTagParam>,
    #[schemars(description = "Second tag set")]
    pub second: Vec<RelevanceTagParam>,
}
