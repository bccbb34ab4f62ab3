use crate::scan_workflow::domain::VulnerabilityRecord;
use crate::shared::Result;

/// The flattened vulnerability report produced by one run
///
/// Records keep the order the server returned the findings in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerabilityReport {
    records: Vec<VulnerabilityRecord>,
}

impl VulnerabilityReport {
    pub fn new(records: Vec<VulnerabilityRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VulnerabilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the records as a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Record count per severity, in the order each severity first appears
    pub fn severity_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for record in &self.records {
            let severity = record.severity.as_str();
            match counts.iter().position(|(seen, _)| *seen == severity) {
                Some(idx) => counts[idx].1 += 1,
                None => counts.push((severity, 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cve: &str, severity: &str, name: &str, version: &str) -> VulnerabilityRecord {
        VulnerabilityRecord {
            cve: Some(cve.to_string()),
            severity: severity.to_string(),
            name: Some(name.to_string()),
            version: Some(version.to_string()),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = VulnerabilityReport::default();
        assert!(report.is_empty());
        assert_eq!(report.to_json().unwrap(), "[]");
        assert!(report.severity_counts().is_empty());
    }

    #[test]
    fn test_to_json_pretty() {
        let report = VulnerabilityReport::new(vec![record("CVE-2024-1", "HIGH", "libfoo", "1.2")]);
        let json = report.to_json().unwrap();
        assert!(json.starts_with("[\n  {\n    \"cve\": \"CVE-2024-1\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["severity"], "HIGH");
        assert_eq!(parsed[0]["name"], "libfoo");
        assert_eq!(parsed[0]["version"], "1.2");
    }

    #[test]
    fn test_severity_counts_first_seen_order() {
        let report = VulnerabilityReport::new(vec![
            record("CVE-1", "LOW", "a", "1"),
            record("CVE-2", "CRITICAL", "b", "1"),
            record("CVE-3", "LOW", "c", "1"),
        ]);
        assert_eq!(report.severity_counts(), vec![("LOW", 2), ("CRITICAL", 1)]);
    }
}
