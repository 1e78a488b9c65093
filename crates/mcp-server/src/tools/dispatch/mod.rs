//! MCP tool dispatch for esptag.
//!
//! Every tool shares one registry handle and one resolver configuration. Registry access is
//! blocking (SQLite) and always runs on the blocking thread pool.

use super::catalog;
use esptag_registry::SqliteRegistry;
use esptag_resolver::ResolverConfig;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ErrorData as McpError, ServerHandler};

mod router;

/// Esptag MCP Service
#[derive(Clone)]
pub struct EsptagService {
    /// Tag registry (shared connection)
    registry: SqliteRegistry,
    /// Ranking tunables
    config: ResolverConfig,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl EsptagService {
    pub fn new(registry: SqliteRegistry, config: ResolverConfig) -> Self {
        Self {
            registry,
            config,
            tool_router: router::build_tool_router(),
        }
    }

    /// Run `f` against the registry on the blocking pool.
    ///
    /// A panicked or cancelled task becomes an `internal` tool error.
    pub(in crate::tools::dispatch) async fn with_registry<T, F>(
        &self,
        f: F,
    ) -> Result<T, CallToolResult>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteRegistry) -> T + Send + 'static,
    {
        let registry = self.registry.clone();
        tokio::task::spawn_blocking(move || f(&registry))
            .await
            .map_err(|err| {
                log::error!("registry task failed: {err}");
                router::error::internal_error(format!("registry task failed: {err}"))
            })
    }
}

#[tool_handler]
impl ServerHandler for EsptagService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
