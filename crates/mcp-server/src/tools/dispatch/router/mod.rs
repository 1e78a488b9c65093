// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod error;
pub(super) mod help;
pub(super) mod link_script;
pub(super) mod new_specialization_script;
pub(super) mod resolve_tag;
pub(super) mod search_specializations;
pub(super) mod situation_script;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::EsptagService>
{
    tool_router::build_tool_router()
}
