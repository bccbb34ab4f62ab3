use serde::Serialize;

/// Severity written when the server reports none for a finding
pub const UNKNOWN_SEVERITY: &str = "UNKNOWN";

/// A component the server lists as affected by a finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedComponent {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl AffectedComponent {
    pub fn new(name: Option<String>, version: Option<String>) -> Self {
        Self { name, version }
    }
}

/// One vulnerability as reported for a project, with all its affected components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub vuln_id: Option<String>,
    pub severity: Option<String>,
    pub components: Vec<AffectedComponent>,
}

impl Finding {
    pub fn new(
        vuln_id: Option<String>,
        severity: Option<String>,
        components: Vec<AffectedComponent>,
    ) -> Self {
        Self {
            vuln_id,
            severity,
            components,
        }
    }

    pub fn severity_or_unknown(&self) -> &str {
        self.severity.as_deref().unwrap_or(UNKNOWN_SEVERITY)
    }
}

/// One row of the flattened report: a (finding, component) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityRecord {
    pub cve: Option<String>,
    pub severity: String,
    pub name: Option<String>,
    pub version: Option<String>,
}
