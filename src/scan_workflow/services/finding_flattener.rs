use crate::scan_workflow::domain::{Finding, VulnerabilityRecord, VulnerabilityReport};

/// FindingFlattener turns nested findings into one record per affected component
///
/// Identifier and severity are copied onto every component row of a
/// finding. Findings without components produce no rows. Nothing is
/// deduplicated or reordered.
pub struct FindingFlattener;

impl FindingFlattener {
    pub fn flatten(findings: Vec<Finding>) -> VulnerabilityReport {
        let mut records = Vec::with_capacity(findings.iter().map(|f| f.components.len()).sum());

        for finding in findings {
            let severity = finding.severity_or_unknown().to_string();
            for component in finding.components {
                records.push(VulnerabilityRecord {
                    cve: finding.vuln_id.clone(),
                    severity: severity.clone(),
                    name: component.name,
                    version: component.version,
                });
            }
        }

        VulnerabilityReport::new(records)
    }
}
