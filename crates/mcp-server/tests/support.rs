#![allow(dead_code)]

use anyhow::{Context, Result};
use esptag_registry::{MessageSituation, Specialization, SqliteRegistry};
use esptag_resolver::TagOccurrence;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RunningService, Service, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_esptag_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_esptag-mcp") {
        return Ok(PathBuf::from(path));
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/esptag-mcp", "target/release/esptag-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate esptag-mcp binary; build with: cargo build -p esptag-mcp")
}

fn occurrence(tag: &str, parent: &str, tag_seq: i64, message_tag_seq: i64) -> TagOccurrence {
    TagOccurrence {
        message_type: "pacs.002".into(),
        message_subtype: "spi".into(),
        tag: tag.into(),
        parent_tag: parent.into(),
        tag_seq,
        message_tag_seq,
    }
}

/// pacs.002 registry where `TxSts` occurs under both `OrgnlGrpInfAndSts` and `TxInfAndSts`.
pub fn seed_registry(path: &Path) -> Result<()> {
    let registry = SqliteRegistry::open(path).context("open registry")?;
    for row in [
        occurrence("Document", "", 1, 0),
        occurrence("FIToFIPmtStsRpt", "Document", 2, 1),
        occurrence("GrpHdr", "FIToFIPmtStsRpt", 3, 2),
        occurrence("OrgnlGrpInfAndSts", "FIToFIPmtStsRpt", 4, 2),
        occurrence("TxInfAndSts", "FIToFIPmtStsRpt", 5, 2),
        occurrence("GrpSts", "OrgnlGrpInfAndSts", 6, 4),
        occurrence("TxSts", "OrgnlGrpInfAndSts", 7, 4),
        occurrence("TxSts", "TxInfAndSts", 8, 5),
    ] {
        registry.insert_occurrence(&row).context("insert occurrence")?;
    }
    for (id, description) in [(1, "Status da transacao"), (2, "Status do grupo")] {
        registry
            .insert_specialization(&Specialization {
                id,
                description: description.into(),
            })
            .context("insert specialization")?;
    }
    registry
        .insert_situation(&MessageSituation {
            code: "RJCT".into(),
            issuer_type_id: 1,
            situation_id: 4,
            description: "Rejeitada".into(),
            maintainer_user_code: 0,
        })
        .context("insert situation")?;
    Ok(())
}

pub async fn start_mcp_server(
    database: &Path,
) -> Result<RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>> {
    let bin = locate_esptag_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.arg("--database").arg(database);
    cmd.env_remove("ESPTAG_CONFIDENCE_GAP");
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

pub async fn call_tool(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")
}

pub fn text_of(result: &CallToolResult) -> Result<String> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .context("tool did not return text content")
}

pub async fn call_tool_text(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<String> {
    let result = call_tool(service, name, args).await?;
    assert_ne!(result.is_error, Some(true), "{name} returned error");
    text_of(&result)
}

pub async fn call_tool_error(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<String> {
    let result = call_tool(service, name, args).await?;
    assert_eq!(result.is_error, Some(true), "{name} should return an error");
    text_of(&result)
}
