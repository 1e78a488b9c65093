//! SQL script generation for registry administration.
//!
//! Every script is idempotent (`IF NOT EXISTS … BEGIN … END`) and meant to be reviewed and run
//! by an operator; nothing here touches a database.

mod link;
mod situation;
mod specialization;

pub use link::{link_script, LinkTarget};
pub use situation::{situation_script, SituationInsert};
pub use specialization::new_specialization_script;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, ScriptError>;

/// Escape a value for use inside a single-quoted SQL literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScriptError::EmptyField { field });
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(ScriptError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_literal("D'Avila"), "D''Avila");
        assert_eq!(escape_literal("''"), "''''");
        assert_eq!(escape_literal("plain"), "plain");
    }
}
