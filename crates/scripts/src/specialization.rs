use crate::{escape_literal, require_positive, require_text, Result};
use std::fmt::Write;

/// Script registering a new specialization `id` in `spi_especializacao_tag`.
///
/// `id` is normally `max(id_esp_tag) + 1` from the registry at the time the script is generated.
pub fn new_specialization_script(description: &str, id: i64) -> Result<String> {
    require_text("description", description)?;
    require_positive("id", id)?;

    let escaped = escape_literal(description);
    let mut script = String::new();
    let _ = writeln!(script, "-- Register new specialization");
    let _ = writeln!(script, "-- Id: {id}");
    let _ = writeln!(script, "-- Description: {description}");
    script.push('\n');
    let _ = writeln!(
        script,
        "IF NOT EXISTS (SELECT 1 FROM spi_especializacao_tag WHERE id_esp_tag = {id})"
    );
    script.push_str("BEGIN\n");
    script.push_str("  INSERT INTO spi_especializacao_tag (id_esp_tag, dsc_esp_tag)\n");
    let _ = writeln!(script, "  VALUES ({id}, '{escaped}')");
    script.push_str("END");
    Ok(script)
}
