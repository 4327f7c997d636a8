//! Tag booster MCP Server implementation

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use super::params::{BoostParams, CombineParams, RegisterParams};
use crate::boost::database::BoostDatabase;
use crate::boost::entry::{BoostMapping, RelevanceTag};
use crate::boost::matcher::BoostMatcher;
use crate::boost::merge::combine_relevance_tags;
use crate::boost::registrar::BoostRegistrar;
use crate::boost::tokenizer::Tokenizer;
use crate::core::error::BoostError;
use crate::core::paths::AppPaths;

/// Registration result for JSON output
#[derive(Debug, Serialize)]
struct RegisterResultJson {
    status: &'static str,
    registered: usize,
}

/// Tag booster MCP Service
#[derive(Clone)]
pub struct BoostService {
    root: PathBuf,
    tool_router: ToolRouter<Self>,
}

impl BoostService {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            tool_router: Self::tool_router(),
        }
    }

    fn get_paths(&self) -> AppPaths {
        AppPaths::from_root(self.root.clone())
    }

    /// Fresh handle per call; requests share nothing in-process
    fn open_database(&self, paths: &AppPaths) -> Result<BoostDatabase, McpError> {
        if let Some(parent) = paths.database.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                McpError::internal_error(format!("Failed to create data directory: {}", e), None)
            })?;
        }

        BoostDatabase::open(&paths.database)
            .map_err(|e| McpError::internal_error(format!("{:#}", e), None))
    }
}

fn boost_error(err: BoostError) -> McpError {
    if err.is_client_error() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}

fn json_output<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let output = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(output)]))
}

#[tool_router]
impl BoostService {
    /// Boost known tags in a text
    #[tool(
        description = "Find known entities (parties, politicians) in article text and return relevance tags. Optional external classifier tags are merged in, keeping the highest relevance per tag name."
    )]
    async fn tags_boost(&self, params: Parameters<BoostParams>) -> Result<CallToolResult, McpError> {
        let paths = self.get_paths();
        let db = self.open_database(&paths)?;
        let matcher = BoostMatcher::from_config(&db, &paths.config.boost);

        let external: Vec<RelevanceTag> = params.0.external.into_iter().map(Into::into).collect();
        let tags = matcher
            .boost_and_combine(&params.0.text, &external)
            .map_err(boost_error)?;

        debug!("tags_boost returned {} tags", tags.len());
        json_output(&tags)
    }

    /// Register boost terms
    #[tool(
        description = "Register term to tag mappings in the boost vocabulary. Every tag must already exist; the term defaults to the tag name. The batch is saved all-or-nothing."
    )]
    async fn tags_register_boosts(
        &self,
        params: Parameters<RegisterParams>,
    ) -> Result<CallToolResult, McpError> {
        let paths = self.get_paths();
        let db = self.open_database(&paths)?;
        let registrar =
            BoostRegistrar::new(&db, &db, Tokenizer::new(paths.config.boost.language));

        let mappings: Vec<BoostMapping> = params.0.map.into_iter().map(Into::into).collect();
        registrar.register_boosts(&mappings).map_err(boost_error)?;

        info!("tags_register_boosts registered {} mappings", mappings.len());
        json_output(&RegisterResultJson {
            status: "success",
            registered: mappings.len(),
        })
    }

    /// Merge two relevance tag sets
    #[tool(
        description = "Combine two relevance tag sets into one with a single entry per tag name, keeping the highest relevance. Ties keep the first set's tag."
    )]
    async fn tags_combine(
        &self,
        params: Parameters<CombineParams>,
    ) -> Result<CallToolResult, McpError> {
        let CombineParams { first, second } = params.0;
        let first: Vec<RelevanceTag> = first.into_iter().map(Into::into).collect();
        let second: Vec<RelevanceTag> = second.into_iter().map(Into::into).collect();

        json_output(&combine_relevance_tags(&first, &second))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for BoostService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Tag booster MCP Server. Boosts party and politician tags in news text and merges relevance tag sets.".to_string()
            ),
            ..Default::default()
        }
    }
}

/// Run the MCP server
pub async fn run_mcp_server(root: PathBuf) -> Result<()> {
    use tokio::io::{stdin, stdout};

    info!("Starting MCP server in {}", root.display());
    let service = BoostService::new(root);
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_invalid_params() {
        let err = boost_error(BoostError::MissingTags(vec!["Junilistan".to_string()]));
        assert!(err.message.contains("Junilistan"));

        let err = boost_error(BoostError::Persistence("disk full".to_string()));
        assert!(err.message.contains("disk full"));
    }

    #[tokio::test]
    async fn test_boost_tool_end_to_end() {
        let dir = tempfile::TempDir::new().unwrap();
        let service = BoostService::new(dir.path().to_path_buf());

        {
            let paths = service.get_paths();
            let db = service.open_database(&paths).unwrap();
            crate::boost::seeds::seed_database(&db, Tokenizer::swedish()).unwrap();
        }

        let result = service
            .tags_boost(Parameters(BoostParams {
                text: "Stefan Löfven höll tal".to_string(),
                external: vec![],
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_combine_tool() {
        use super::super::params::RelevanceTagParam;

        let dir = tempfile::TempDir::new().unwrap();
        let service = BoostService::new(dir.path().to_path_buf());
        let param = |name: &str, relevance: f32| RelevanceTagParam {
            name: name.to_string(),
            relevance,
            kind: None,
        };

        let result = service
            .tags_combine(Parameters(CombineParams {
                first: vec![param("Socialdemokraterna", 1.0)],
                second: vec![param("Socialdemokraterna", 0.4), param("Moderaterna", 0.6)],
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_register_tool_reports_missing_tags() {
        let dir = tempfile::TempDir::new().unwrap();
        let service = BoostService::new(dir.path().to_path_buf());

        let err = service
            .tags_register_boosts(Parameters(RegisterParams {
                map: vec![super::super::params::MappingParam {
                    term: None,
                    tag: "Okänt parti".to_string(),
                }],
            }))
            .await
            .unwrap_err();
        assert!(err.message.contains("Okänt parti"));
    }
}
