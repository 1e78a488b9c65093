use super::super::{CallToolResult, Content};
use crate::tools::report::ReportBuilder;
use esptag_protocol::{codes, ErrorEnvelope, ToolNextAction};
use esptag_registry::RegistryError;
use esptag_resolver::ResolveError;
use esptag_scripts::ScriptError;
use serde_json::json;

fn render_details_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(values) => format!("<array len={}>", values.len()),
        serde_json::Value::Object(values) => format!("<object keys={}>", values.len()),
        other => other.to_string(),
    }
}

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut doc = ReportBuilder::new();
    doc.push_answer(&format!("error: {}", error.code));
    doc.push_note(&error.message);
    if let Some(hint) = error.hint.as_deref() {
        if !hint.trim().is_empty() {
            doc.push_note(&format!("hint: {hint}"));
        }
    }
    if let Some(serde_json::Value::Object(map)) = error.details.as_ref() {
        for (key, value) in map {
            doc.push_note(&format!("details.{key}={}", render_details_value(value)));
        }
    }
    for action in &error.next_actions {
        doc.push_note(&format!("next: {} ({})", action.tool, action.reason));
    }

    let mut result = CallToolResult::error(vec![Content::text(doc.finish())]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn tool_error(
    code: &'static str,
    message: impl Into<String>,
) -> CallToolResult {
    tool_error_envelope(ErrorEnvelope::new(code, message))
}

pub(in crate::tools::dispatch) fn invalid_input(message: impl Into<String>) -> CallToolResult {
    tool_error(codes::INVALID_INPUT, message)
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    tool_error(codes::INTERNAL, message)
}

pub(in crate::tools::dispatch) fn store_failure(err: &RegistryError) -> CallToolResult {
    log::warn!("registry query failed: {err}");
    tool_error_envelope(
        ErrorEnvelope::new(codes::STORE_FAILURE, err.to_string())
            .with_hint("check that --database points at a readable tag registry"),
    )
}

pub(in crate::tools::dispatch) fn script_error(err: &ScriptError) -> CallToolResult {
    invalid_input(err.to_string())
}

pub(in crate::tools::dispatch) fn resolve_error(err: &ResolveError) -> CallToolResult {
    let envelope = match err {
        ResolveError::InvalidInput(_) => ErrorEnvelope::new(codes::INVALID_INPUT, err.to_string())
            .with_hint("xml_fragment, tag and message_type are all required"),
        ResolveError::MalformedInput { position, detail } => {
            ErrorEnvelope::new(codes::MALFORMED_INPUT, err.to_string())
                .with_details(json!({ "position": position, "detail": detail }))
                .with_hint("paste the XML exactly as it appears in the message")
        }
        ResolveError::NotFound(tag) => ErrorEnvelope::new(codes::NOT_FOUND, err.to_string())
            .with_details(json!({ "tag": tag }))
            .with_hint("the tag must appear as an element of the fragment; check its spelling"),
        ResolveError::StoreFailure(_) => {
            log::warn!("initial registry lookup failed: {err}");
            ErrorEnvelope::new(codes::STORE_FAILURE, err.to_string()).with_next_action(
                ToolNextAction {
                    tool: "help".to_string(),
                    args: json!({ "topic": "flow" }),
                    reason: "retry once the registry is reachable".to_string(),
                },
            )
        }
    };
    tool_error_envelope(envelope)
}
