use crate::scan_workflow::domain::{ProjectId, ProjectIdentity, ProjectSummary};
use crate::shared::error::ScanError;
use crate::shared::Result;

/// ProjectResolver picks the single project matching an identity
///
/// Exactly one candidate must match. None is `ProjectNotFound`, more
/// than one is `AmbiguousProject`.
pub struct ProjectResolver;

impl ProjectResolver {
    pub fn resolve(identity: &ProjectIdentity, candidates: &[ProjectSummary]) -> Result<ProjectId> {
        let mut matches = candidates.iter().filter(|p| p.matches(identity));

        let first = matches.next().ok_or_else(|| ScanError::ProjectNotFound {
            name: identity.name().to_string(),
            version: identity.version().to_string(),
        })?;

        let extra = matches.count();
        if extra > 0 {
            return Err(ScanError::AmbiguousProject {
                name: identity.name().to_string(),
                version: identity.version().to_string(),
                matches: extra + 1,
            }
            .into());
        }

        Ok(first.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("SBOM Scan", "1.0").unwrap()
    }

    fn summary(id: &str, name: &str, version: &str) -> ProjectSummary {
        ProjectSummary::new(
            ProjectId::new(id).unwrap(),
            Some(name.to_string()),
            Some(version.to_string()),
        )
    }

    #[test]
    fn test_resolve_single_match() {
        let candidates = vec![summary("U1", "SBOM Scan", "1.0")];
        let id = ProjectResolver::resolve(&identity(), &candidates).unwrap();
        assert_eq!(id.as_str(), "U1");
    }

    #[test]
    fn test_resolve_ignores_inexact_matches() {
        let candidates = vec![
            summary("U1", "SBOM Scan", "1.0.1"),
            summary("U2", "SBOM Scan", "1.0"),
            summary("U3", "SBOM Scanner", "1.0"),
        ];
        let id = ProjectResolver::resolve(&identity(), &candidates).unwrap();
        assert_eq!(id.as_str(), "U2");
    }

    #[test]
    fn test_resolve_no_candidates() {
        let err = ProjectResolver::resolve(&identity(), &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::ProjectNotFound { name, version }) if name == "SBOM Scan" && version == "1.0"
        ));
    }

    #[test]
    fn test_resolve_only_inexact_candidates() {
        let candidates = vec![summary("U1", "SBOM Scan", "2.0")];
        let err = ProjectResolver::resolve(&identity(), &candidates).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::ProjectNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_duplicates() {
        let candidates = vec![
            summary("U1", "SBOM Scan", "1.0"),
            summary("U2", "SBOM Scan", "1.0"),
        ];
        let err = ProjectResolver::resolve(&identity(), &candidates).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::AmbiguousProject { matches: 2, .. })
        ));
    }
}
