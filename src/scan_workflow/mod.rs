/// Scan workflow domain - pure logic with no I/O
///
/// Holds the value types exchanged with the analysis server, the polling
/// retry policy and the services that turn raw server data into a report.
pub mod domain;
pub mod policies;
pub mod services;
