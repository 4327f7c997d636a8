//! MCP server for the tag booster
//!
//! Exposes boosting, registration and merging as tools over stdio.

mod params;
mod server;

pub use server::{run_mcp_server, BoostService};
