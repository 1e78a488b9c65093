use super::super::{CallToolResult, Content, EsptagService, McpError};
use super::error::{invalid_input, store_failure};
use crate::tools::render::render_specializations;
use crate::tools::schemas::search_specializations::SearchSpecializationsRequest;

pub(in crate::tools::dispatch) async fn search_specializations(
    service: &EsptagService,
    request: SearchSpecializationsRequest,
) -> Result<CallToolResult, McpError> {
    let term = request.term.trim().to_string();
    if term.is_empty() {
        return Ok(invalid_input("term must not be empty"));
    }

    let lookup_term = term.clone();
    let found = match service
        .with_registry(move |registry| registry.search_specializations(&lookup_term))
        .await
    {
        Ok(Ok(found)) => found,
        Ok(Err(err)) => return Ok(store_failure(&err)),
        Err(result) => return Ok(result),
    };

    Ok(CallToolResult::success(vec![Content::text(
        render_specializations(&term, &found),
    )]))
}
