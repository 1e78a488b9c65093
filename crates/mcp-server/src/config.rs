use clap::Parser;
use esptag_resolver::{ResolverConfig, DEFAULT_CONFIDENCE_GAP};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "esptag-mcp")]
#[command(about = "MCP server for XML tag resolution and registry scripts", long_about = None)]
#[command(version)]
pub struct Args {
    /// SQLite tag registry file
    #[arg(long, env = "ESPTAG_DATABASE")]
    pub database: PathBuf,

    /// Score lead the top candidate needs over the runner-up to count as the best match
    #[arg(long, env = "ESPTAG_CONFIDENCE_GAP", default_value_t = DEFAULT_CONFIDENCE_GAP)]
    pub confidence_gap: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database: PathBuf,
    pub resolver: ResolverConfig,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> Self {
        Self {
            database: args.database,
            resolver: ResolverConfig {
                confidence_gap: args.confidence_gap,
            },
        }
    }
}
