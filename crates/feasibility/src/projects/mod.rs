//! Project records and the HTTP surface that serves their feasibility scores.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{NewProject, ProjectId, ProjectRecord, ProjectView};
pub use repository::{ProjectRepository, RepositoryError};
pub use router::project_router;
pub use service::{sample_project_submissions, ProjectService, ProjectServiceError};
