//! Creature roster parsing.
//!
//! The roster is entered as a single comma-delimited line of `id_name`
//! tokens (e.g. `25_Pikachu, 26_Raichu`). Malformed tokens are skipped with
//! a warning rather than failing the run.

use log::warn;

use crate::slug::sanitize_name;
use crate::style::ToolStyle;

/// One creature taken from the roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl CreatureEntry {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: sanitize_name(name),
        }
    }

    /// Directory fragment shared by the resolver, texture, and spawn paths.
    pub fn dir_fragment(&self) -> String {
        format!("{}_{}", self.id, self.slug)
    }
}

/// Parse a comma-delimited roster line into creature entries.
///
/// Each token splits on its FIRST underscore into `(id, name)`, both
/// trimmed. Tokens with no underscore are dropped with a warning; input
/// order of the surviving entries is preserved. An empty result is not an
/// error.
pub fn parse_roster(raw: &str) -> Vec<CreatureEntry> {
    let mut entries = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        // An empty token (trailing comma, blank line) counts as malformed
        // and gets the same warning as any other token without '_'.
        match token.split_once('_') {
            Some((id, name)) => entries.push(CreatureEntry::new(id.trim(), name.trim())),
            None => {
                warn!("skipping malformed roster token '{token}'");
                println!(
                    "{}",
                    format!("Warning: Skipping invalid entry '{token}'. Format should be 'id_name'.")
                        .warning_style()
                );
            },
        }
    }
    entries
}
