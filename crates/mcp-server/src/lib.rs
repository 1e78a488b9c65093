//! Esptag MCP Server
//!
//! Resolves an XML element name, seen in a sample message, to the tag-registry occurrence it
//! most likely corresponds to, and generates the SQL scripts used to register specializations.
//!
//! ## Tools
//!
//! - `resolve_tag` - Rank registry occurrences of a tag against its path in an XML fragment
//! - `search_specializations` - Find specializations by description
//! - `link_script` - Script linking a specialization to one occurrence
//! - `new_specialization_script` - Script registering a new specialization
//! - `situation_script` - Script registering a message situation
//! - `help` - Output legend and tool inventory
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "esptag": {
//!       "command": "esptag-mcp",
//!       "args": ["--database", "/path/to/registry.db"]
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use esptag_registry::SqliteRegistry;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod config;
mod tools;

pub use config::{Args, ServerConfig};
pub use tools::EsptagService;

pub async fn main_entry() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = ServerConfig::from_args(args);
    let registry = SqliteRegistry::open(&config.database).with_context(|| {
        format!(
            "failed to open tag registry at {}",
            config.database.display()
        )
    })?;

    log::info!(
        "Starting esptag MCP server (registry={}, confidence_gap={})",
        config.database.display(),
        config.resolver.confidence_gap
    );

    let service = EsptagService::new(registry, config.resolver);
    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Esptag MCP server stopped");
    Ok(())
}
