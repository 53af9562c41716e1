//! Output formatting for the CLI.

use crate::error::Result;
use chanmon_domain::EventLog;
use colored::*;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render the log as per-day text blocks, or the "No logs" marker.
    pub fn format_log(&self, log: &EventLog) -> String {
        let blocks = log.render();
        if blocks.is_empty() {
            return self.muted("No logs");
        }

        blocks
            .iter()
            .map(|block| self.highlight_header(block))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the raw log as pretty-printed JSON.
    pub fn format_log_json(&self, log: &EventLog) -> Result<String> {
        Ok(serde_json::to_string_pretty(log)?)
    }

    /// Styling for progress/informational lines.
    pub fn info(&self, text: &str) -> String {
        if self.color_enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styling for completion lines.
    pub fn success(&self, text: &str) -> String {
        if self.color_enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styling for recoverable errors shown inline.
    pub fn error(&self, text: &str) -> String {
        if self.color_enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color_enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    // The first line of each block is the *YYYY-MM-DD* header.
    fn highlight_header(&self, block: &str) -> String {
        if !self.color_enabled {
            return block.to_string();
        }
        match block.split_once('\n') {
            Some((header, rest)) => format!("{}\n{}", header.bold(), rest),
            None => block.bold().to_string(),
        }
    }
}
