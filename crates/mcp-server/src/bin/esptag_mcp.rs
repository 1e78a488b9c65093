use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    esptag_mcp::main_entry().await
}
