pub mod finding_flattener;
pub mod project_resolver;

pub use finding_flattener::FindingFlattener;
pub use project_resolver::ProjectResolver;
