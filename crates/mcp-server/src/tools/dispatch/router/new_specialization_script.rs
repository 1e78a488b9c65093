use super::super::{CallToolResult, Content, EsptagService, McpError};
use super::error::{script_error, store_failure};
use crate::tools::report::ReportBuilder;
use crate::tools::schemas::new_specialization_script::NewSpecializationScriptRequest;
use esptag_registry::{RegistryError, Specialization, SqliteRegistry};
use esptag_scripts::{new_specialization_script as render_script, ScriptError};

struct IdAllocation {
    similar: Vec<Specialization>,
    next_free: i64,
    requested_taken: bool,
}

fn allocate(
    registry: &SqliteRegistry,
    description: &str,
    requested: Option<i64>,
) -> Result<IdAllocation, RegistryError> {
    let similar = registry.search_specializations(description)?;
    let next_free = registry.next_specialization_id()?;
    let requested_taken = match requested {
        Some(id) => registry.specialization_exists(id)?,
        None => false,
    };
    Ok(IdAllocation {
        similar,
        next_free,
        requested_taken,
    })
}

pub(in crate::tools::dispatch) async fn new_specialization_script(
    service: &EsptagService,
    request: NewSpecializationScriptRequest,
) -> Result<CallToolResult, McpError> {
    let description = request.description.trim().to_string();
    if description.is_empty() {
        return Ok(script_error(&ScriptError::EmptyField {
            field: "description",
        }));
    }
    if let Some(id) = request.id.filter(|id| *id <= 0) {
        return Ok(script_error(&ScriptError::NotPositive { field: "id", value: id }));
    }

    let requested = request.id;
    let lookup_description = description.clone();
    let allocation = match service
        .with_registry(move |registry| allocate(registry, &lookup_description, requested))
        .await
    {
        Ok(Ok(allocation)) => allocation,
        Ok(Err(err)) => return Ok(store_failure(&err)),
        Err(result) => return Ok(result),
    };

    let mut warnings = Vec::new();
    let id = match requested {
        Some(id) if !allocation.requested_taken => id,
        Some(id) => {
            warnings.push(format!(
                "warning: id {id} is already taken; using next free id {}",
                allocation.next_free
            ));
            allocation.next_free
        }
        None => allocation.next_free,
    };

    let script = match render_script(&description, id) {
        Ok(script) => script,
        Err(err) => return Ok(script_error(&err)),
    };

    let mut doc = ReportBuilder::new();
    doc.push_answer(&format!("new_specialization_script: id {id} '{description}'"));
    for warning in &warnings {
        doc.push_note(warning);
    }
    if !allocation.similar.is_empty() {
        doc.push_note("warning: specializations with a similar description already exist:");
        for existing in &allocation.similar {
            doc.push_note(&format!("- {}: {}", existing.id, existing.description));
        }
    }
    doc.push_script("register specialization", &script);

    Ok(CallToolResult::success(vec![Content::text(doc.finish())]))
}
