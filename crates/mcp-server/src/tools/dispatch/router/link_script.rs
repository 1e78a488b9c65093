use super::super::{CallToolResult, Content, EsptagService, McpError};
use super::error::{script_error, store_failure};
use crate::tools::report::ReportBuilder;
use crate::tools::schemas::link_script::LinkScriptRequest;
use esptag_scripts::{link_script as render_link_script, LinkTarget};

/// Link a specialization to one occurrence.
///
/// An unknown specialization id still yields the script, preceded by a warning.
pub(in crate::tools::dispatch) async fn link_script(
    service: &EsptagService,
    request: LinkScriptRequest,
) -> Result<CallToolResult, McpError> {
    let target = LinkTarget {
        specialization_id: request.specialization_id,
        message_type: request.message_type.trim().to_string(),
        tag: request.tag.trim().to_string(),
        parent_tag: request
            .parent_tag
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        tag_seq: request.tag_seq,
        message_tag_seq: request.message_tag_seq,
    };
    if let Err(err) = target.validate() {
        return Ok(script_error(&err));
    }

    let id = target.specialization_id;
    let exists = match service
        .with_registry(move |registry| registry.specialization_exists(id))
        .await
    {
        Ok(Ok(exists)) => exists,
        Ok(Err(err)) => return Ok(store_failure(&err)),
        Err(result) => return Ok(result),
    };

    let script = match render_link_script(&target) {
        Ok(script) => script,
        Err(err) => return Ok(script_error(&err)),
    };

    let mut doc = ReportBuilder::new();
    doc.push_answer(&format!(
        "link_script: specialization {id} → {} in {} (tag_seq={}, message_tag_seq={})",
        target.tag, target.message_type, target.tag_seq, target.message_tag_seq
    ));
    if !exists {
        doc.push_note(&format!(
            "warning: specialization {id} is not registered; create it with new_specialization_script before running this script"
        ));
    }
    doc.push_script("link specialization to occurrence", &script);

    Ok(CallToolResult::success(vec![Content::text(doc.finish())]))
}
