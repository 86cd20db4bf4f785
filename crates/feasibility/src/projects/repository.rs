use super::domain::{ProjectId, ProjectRecord};

/// Storage abstraction so the service can run against any backing store.
pub trait ProjectRepository: Send + Sync {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError>;
    fn fetch(&self, id: ProjectId) -> Result<Option<ProjectRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<ProjectRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("project already exists")]
    Conflict,
    #[error("project not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
