//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use attrib_domain::Attribution;
use attrib_gatekeeper::ValidationResult;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a gatekeeper verdict.
    pub fn format_verdict(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "status": if result.is_accepted() { "accepted" } else { "rejected" },
                    "count": result.count,
                    "reason": result.reason.as_ref().map(|r| r.to_string()),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(match &result.reason {
                None => self.success(&format!(
                    "Accepted: {} attribution(s)",
                    result.count
                )),
                Some(reason) => self.error(&format!("Rejected: {}", reason)),
            }),
            OutputFormat::Quiet => Ok(if result.is_accepted() {
                "accepted".to_string()
            } else {
                "rejected".to_string()
            }),
        }
    }

    /// Format a package's attributions.
    pub fn format_attributions(&self, attributions: Option<&[Attribution]>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&attributions)?),
            OutputFormat::Table => {
                Ok(self.format_attributions_table(attributions.unwrap_or_default()))
            }
            OutputFormat::Quiet => Ok(attributions
                .unwrap_or_default()
                .iter()
                .map(|a| a.tag())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format attributions as a table.
    fn format_attributions_table(&self, attributions: &[Attribution]) -> String {
        if attributions.is_empty() {
            return self.colorize("No attributions found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Tag", "Label", "Inherits From"]);

        for attribution in attributions {
            builder.push_record([
                attribution.tag().to_string(),
                format!("{:#010x}", attribution.label().id()),
                attribution.inherit_from().join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
