//! The user-facing rule table and its on-disk form.
//!
//! A [`Settings`] value is what a host persists between sessions: the ordered
//! pattern list and the whole-line flag. The engine itself never touches the
//! filesystem; hosts that want the stock behaviour load a TOML file with
//! [`Settings::load`] and hand the result to
//! [`Highlighter::from_settings`](crate::Highlighter::from_settings).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unwritable settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One highlight rule: a regular expression paired with colour
/// specifications. An empty expression leaves the rule inactive; an empty
/// foreground means "derive one from the background"; an empty background
/// means the rule tints no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub foreground: String,
    #[serde(default)]
    pub background: String,
}

impl Pattern {
    /// Create a pattern from its three specification strings
    pub fn new(expression: &str, foreground: &str, background: &str) -> Self {
        Self {
            expression: expression.to_string(),
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }
}

/// The persisted highlight configuration: an ordered pattern table and the
/// whole-line flag. Table order is significant, the first rule to match on a
/// line claims its background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "stock_patterns")]
    pub patterns: Vec<Pattern>,
    #[serde(default = "stock_entire_line")]
    pub highlight_entire_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            patterns: stock_patterns(),
            highlight_entire_line: stock_entire_line(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. A missing file is not an error, it
    /// just means the stock table.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write settings out as TOML
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// The stock five-rule table shipped with the product
fn stock_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("FIX", "#5C4033", "#F8B4B4"),
        Pattern::new("TODO", "#5C4033", "#FEF3C7"),
        Pattern::new("WARN", "#5C4033", "#FED7AA"),
        Pattern::new("OBS", "#1E3A5F", "#BFDBFE"),
        Pattern::new("QUESTION", "#4C1D95", "#DDD6FE"),
    ]
}

fn stock_entire_line() -> bool {
    true
}
