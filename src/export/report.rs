//! Configuration report export.
//!
//! Every configured component appends one block of tag/value pairs; the
//! assembled report is serialized to JSON as a record of the parameter set
//! a simulation ran with.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

/// One component's parameters as an ordered list of tag/value pairs
#[derive(Debug, Clone, Serialize)]
pub struct ParameterBlock {
    /// Name of the component the parameters belong to
    pub component: String,
    /// Tag/value pairs, in the order they were pushed
    pub parameters: Vec<ParameterEntry>,
}

/// A single named parameter value
#[derive(Debug, Clone, Serialize)]
pub struct ParameterEntry {
    pub tag: String,
    pub value: f64,
}

impl ParameterBlock {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            parameters: Vec::new(),
        }
    }

    pub fn push(&mut self, tag: &str, value: f64) {
        self.parameters.push(ParameterEntry {
            tag: tag.to_string(),
            value,
        });
    }
}

/// Assembled configuration report
#[derive(Debug, Clone, Serialize)]
pub struct ParameterReport {
    /// Creation timestamp
    pub created_at: String,
    /// Report format version for compatibility
    pub version: &'static str,
    /// Component blocks, in the order they were appended
    pub blocks: Vec<ParameterBlock>,
}

impl ParameterReport {
    pub fn new() -> Self {
        Self {
            created_at: Local::now().to_rfc3339(),
            version: "1.0.0",
            blocks: Vec::new(),
        }
    }

    pub fn push_block(&mut self, block: ParameterBlock) {
        self.blocks.push(block);
    }

    /// Serialize the report to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, self)?;
        log::info!("Parameter report exported: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ParameterReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut report = ParameterReport::new();
        let mut first = ParameterBlock::new("First");
        first.push("A", 1.0);
        let mut second = ParameterBlock::new("Second");
        second.push("B", 2.0);
        report.push_block(first);
        report.push_block(second);

        assert_eq!(report.blocks[0].component, "First");
        assert_eq!(report.blocks[1].component, "Second");
    }

    #[test]
    fn test_json_contains_tags_and_values() {
        let mut report = ParameterReport::new();
        let mut block = ParameterBlock::new("Demo");
        block.push("LineTensionParameter", 0.12);
        report.push_block(block);

        let json = report.to_json().unwrap();
        assert!(json.contains("LineTensionParameter"));
        assert!(json.contains("0.12"));
    }
}
