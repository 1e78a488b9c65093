use super::super::{CallToolResult, Content, EsptagService, McpError};
use crate::tools::catalog::TOOL_CATALOG;
use crate::tools::report::ReportBuilder;
use crate::tools::schemas::help::HelpRequest;
use esptag_resolver::{BASE_SCORE, MAX_ANCESTOR_HOPS, PARENT_MATCH_BONUS};

const HELP_TOPICS: &[&str] = &["legend", "tools", "flow", "scoring", "topics"];

const LEGEND: &str = "[LEGEND]\n\
A: answer line (tool-level summary)\n\
R: ranked candidate header (#rank score=N tag (parent=...))\n\
N: note (paths, score contributions, identifiers, next steps)\n\
S: SQL script follows verbatim until the end of the report\n\
Lines of a script that start with a marker are prefixed with one space.\n";

/// Legend, tool inventory, and the scoring rules.
pub(in crate::tools::dispatch) async fn help(
    service: &EsptagService,
    request: HelpRequest,
) -> Result<CallToolResult, McpError> {
    let topic = request
        .topic
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let all = topic.is_empty();

    let mut doc = ReportBuilder::new();
    doc.push_answer("help: report legend and tools");

    if all || topic == "tools" {
        doc.push_blank();
        doc.push_note("Tool inventory:");
        for tool in TOOL_CATALOG {
            doc.push_note(&format!("- {}: {}", tool.name, tool.summary));
        }
    }

    if all || topic == "flow" {
        doc.push_blank();
        doc.push_note("Typical flow:");
        doc.push_note("1. resolve_tag with the sample XML, the tag, and the message type.");
        doc.push_note("2. search_specializations for an existing specialization,");
        doc.push_note("   or new_specialization_script to register one.");
        doc.push_note("3. link_script with a candidate's arguments plus specialization_id.");
    }

    if all || topic == "scoring" {
        doc.push_blank();
        doc.push_note(&format!("Every candidate starts at {BASE_SCORE} points."));
        doc.push_note(&format!(
            "+{PARENT_MATCH_BONUS} when its registered parent equals the parent seen in the XML."
        ));
        doc.push_note("+2*(n-i) for each position i, counted from the tag upward,");
        doc.push_note("where the observed and registry paths agree; n is the shorter path length.");
        doc.push_note(&format!(
            "Registry paths are rebuilt from parent links, up to {MAX_ANCESTOR_HOPS} hops above the parent."
        ));
        doc.push_note(&format!(
            "best_match when #1 leads #2 by more than {} points; otherwise ambiguous.",
            service.config.confidence_gap
        ));
    }

    if all || topic == "topics" {
        doc.push_blank();
        doc.push_note(&format!("Available topics: {}", HELP_TOPICS.join(", ")));
    }

    if !all && !HELP_TOPICS.contains(&topic.as_str()) {
        doc.push_blank();
        doc.push_note(&format!(
            "Unknown topic={topic}; available topics: {}",
            HELP_TOPICS.join(", ")
        ));
    }

    let mut text = String::new();
    if all || topic == "legend" {
        text.push_str(LEGEND);
    }
    text.push_str(&doc.finish());
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
