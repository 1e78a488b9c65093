use super::super::{CallToolResult, Content, EsptagService, McpError};
use super::error::resolve_error;
use crate::tools::render::render_resolution;
use crate::tools::schemas::resolve_tag::ResolveTagRequest;
use esptag_resolver::{resolve, ResolveRequest};

/// Rank registry occurrences of a tag against its path in the fragment
pub(in crate::tools::dispatch) async fn resolve_tag(
    service: &EsptagService,
    request: ResolveTagRequest,
) -> Result<CallToolResult, McpError> {
    let config = service.config;
    let request = ResolveRequest {
        xml_fragment: request.xml_fragment,
        tag: request.tag,
        message_type: request.message_type,
    };

    let outcome = match service
        .with_registry(move |registry| resolve(registry, &request, config))
        .await
    {
        Ok(outcome) => outcome,
        Err(result) => return Ok(result),
    };

    match outcome {
        Ok(resolution) => {
            log::debug!(
                "resolve_tag {} in {}: {} with {} candidates",
                resolution.tag,
                resolution.message_type,
                resolution.ranking.confidence.as_str(),
                resolution.ranking.candidates.len()
            );
            Ok(CallToolResult::success(vec![Content::text(
                render_resolution(&resolution, config.confidence_gap),
            )]))
        }
        Err(err) => Ok(resolve_error(&err)),
    }
}
