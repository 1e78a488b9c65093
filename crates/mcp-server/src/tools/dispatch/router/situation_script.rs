use super::super::{CallToolResult, Content, EsptagService, McpError};
use super::error::{script_error, store_failure};
use crate::tools::report::ReportBuilder;
use crate::tools::schemas::situation_script::SituationScriptRequest;
use esptag_scripts::{situation_script as render_script, SituationInsert};

/// Register a message situation; existing composite keys get a notice instead of a script.
pub(in crate::tools::dispatch) async fn situation_script(
    service: &EsptagService,
    request: SituationScriptRequest,
) -> Result<CallToolResult, McpError> {
    let situation = SituationInsert {
        code: request.code.trim().to_string(),
        issuer_type_id: request.issuer_type_id,
        situation_id: request.situation_id,
        description: request.description.trim().to_string(),
        maintainer_user_code: request.maintainer_user_code.unwrap_or(0),
    };
    if let Err(err) = situation.validate() {
        return Ok(script_error(&err));
    }

    let key = (
        situation.code.clone(),
        situation.issuer_type_id,
        situation.situation_id,
    );
    let exists = match service
        .with_registry(move |registry| registry.situation_exists(&key.0, key.1, key.2))
        .await
    {
        Ok(Ok(exists)) => exists,
        Ok(Err(err)) => return Ok(store_failure(&err)),
        Err(result) => return Ok(result),
    };

    let mut doc = ReportBuilder::new();
    if exists {
        doc.push_answer("situation_script: situation already registered");
        doc.push_note(&format!(
            "code={} issuer_type_id={} situation_id={}; no script generated",
            situation.code, situation.issuer_type_id, situation.situation_id
        ));
        return Ok(CallToolResult::success(vec![Content::text(doc.finish())]));
    }

    let script = match render_script(&situation) {
        Ok(script) => script,
        Err(err) => return Ok(script_error(&err)),
    };
    doc.push_answer(&format!(
        "situation_script: {} (issuer_type_id={}, situation_id={})",
        situation.code, situation.issuer_type_id, situation.situation_id
    ));
    doc.push_script("register message situation", &script);

    Ok(CallToolResult::success(vec![Content::text(doc.finish())]))
}
