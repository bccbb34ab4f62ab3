use crate::shared::error::ScanError;
use crate::shared::Result;
use std::fmt;

/// Maximum length for project names and versions (security limit)
const MAX_IDENTITY_FIELD_LENGTH: usize = 255;

/// Name/version pair the SBOM is uploaded under
///
/// Known before the run starts and used twice: as the upload target
/// and as the lookup key when resolving the project's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    name: String,
    version: String,
}

impl ProjectIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = version.into();

        validate_field(&name, "Project name")?;
        validate_field(&version, "Project version")?;

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

fn validate_field(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::Validation {
            message: format!("{} cannot be empty", field),
        }
        .into());
    }

    if value.len() > MAX_IDENTITY_FIELD_LENGTH {
        return Err(ScanError::Validation {
            message: format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                field,
                value.len(),
                MAX_IDENTITY_FIELD_LENGTH
            ),
        }
        .into());
    }

    Ok(())
}

/// Identifier the server assigns to a project
///
/// Opaque: no format is assumed beyond being a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ScanError::Validation {
                message: "Project identifier cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project as returned by the server's lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ProjectSummary {
    pub fn new(id: ProjectId, name: Option<String>, version: Option<String>) -> Self {
        Self {
            id,
            name,
            version,
        }
    }

    /// Whether this entry is an exact match for `identity`
    ///
    /// A missing name or version is not held against the entry, since
    /// the server already filtered on both.
    pub fn matches(&self, identity: &ProjectIdentity) -> bool {
        let name_matches = self.name.as_deref().is_none_or(|n| n == identity.name());
        let version_matches = self
            .version
            .as_deref()
            .is_none_or(|v| v == identity.version());
        name_matches && version_matches
    }
}
