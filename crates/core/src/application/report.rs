// Structured facade output
use serde::Serialize;

/// Separator placed between subsystem outputs
pub const LINE_SEPARATOR: &str = "\n";

/// Output of a single subsystem invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub subsystem: String,
    pub output: String,
}

/// Per-subsystem outputs, in invocation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub(crate) fn push(&mut self, subsystem: impl Into<String>, output: String) {
        self.entries.push(ReportEntry {
            subsystem: subsystem.into(),
            output,
        });
    }

    /// Join all outputs with [`LINE_SEPARATOR`] (no trailing separator)
    pub fn joined(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.output.as_str())
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }

    /// Subsystem names in invocation order
    pub fn subsystems(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.subsystem.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_has_no_trailing_separator() {
        let mut report = RunReport::default();
        report.push("x", "first".to_string());
        report.push("y", "second".to_string());

        assert_eq!(report.joined(), "first\nsecond");
        assert_eq!(report.subsystems().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_empty_report_joins_to_empty_string() {
        assert_eq!(RunReport::default().joined(), "");
    }

    #[test]
    fn test_report_serializes_entries() {
        let mut report = RunReport::default();
        report.push("a", "A module running".to_string());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["entries"][0]["subsystem"], "a");
        assert_eq!(value["entries"][0]["output"], "A module running");
    }
}
