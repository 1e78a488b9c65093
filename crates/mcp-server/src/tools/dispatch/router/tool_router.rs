use super::super::{CallToolResult, EsptagService, McpError};
use crate::tools::schemas::help::HelpRequest;
use crate::tools::schemas::link_script::LinkScriptRequest;
use crate::tools::schemas::new_specialization_script::NewSpecializationScriptRequest;
use crate::tools::schemas::resolve_tag::ResolveTagRequest;
use crate::tools::schemas::search_specializations::SearchSpecializationsRequest;
use crate::tools::schemas::situation_script::SituationScriptRequest;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<EsptagService> {
    EsptagService::tool_router()
}

#[tool_router]
impl EsptagService {
    /// Report legend and tool inventory.
    #[tool(
        description = "Explain the report legend (A/R/N/S), the scoring rules, and list the available tools."
    )]
    pub async fn help(
        &self,
        Parameters(request): Parameters<HelpRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::help::help(self, request).await
    }

    /// Resolve a tag seen in an XML fragment to ranked registry occurrences.
    #[tool(
        description = "Resolve an XML element name to the tag-registry occurrence it most likely corresponds to. Ranks every registry occurrence of the tag for the message type by parent match and ancestor-path correspondence, and prints link_script arguments per candidate."
    )]
    pub async fn resolve_tag(
        &self,
        Parameters(request): Parameters<ResolveTagRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::resolve_tag::resolve_tag(self, request).await
    }

    /// Search specializations by description.
    #[tool(description = "Find tag specializations whose description contains the given term.")]
    pub async fn search_specializations(
        &self,
        Parameters(request): Parameters<SearchSpecializationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::search_specializations::search_specializations(self, request).await
    }

    /// Link script for one occurrence.
    #[tool(
        description = "Generate an idempotent SQL script linking a specialization to one tag occurrence (use the arguments printed by resolve_tag)."
    )]
    pub async fn link_script(
        &self,
        Parameters(request): Parameters<LinkScriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::link_script::link_script(self, request).await
    }

    /// New specialization script.
    #[tool(
        description = "Generate an idempotent SQL script registering a new specialization. Uses the next free id unless a free id is given, and warns about similar descriptions."
    )]
    pub async fn new_specialization_script(
        &self,
        Parameters(request): Parameters<NewSpecializationScriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::new_specialization_script::new_specialization_script(self, request).await
    }

    /// Message situation script.
    #[tool(
        description = "Generate an idempotent SQL script registering a message issuer/receiver situation. Returns a notice instead when the situation already exists."
    )]
    pub async fn situation_script(
        &self,
        Parameters(request): Parameters<SituationScriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::situation_script::situation_script(self, request).await
    }
}
