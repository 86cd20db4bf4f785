use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{NewProject, ProjectId, ProjectRecord};
use super::repository::{ProjectRepository, RepositoryError};
use crate::scoring::{ScoreSet, SAMPLE_PROJECT_NAMES};

/// Creates and reads projects, attaching computed feasibility scores.
pub struct ProjectService<R> {
    repository: Arc<R>,
    sequence: AtomicI64,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicI64::new(1),
        }
    }

    /// Validate and store a new project under the next sequential id.
    pub fn create(&self, submission: NewProject) -> Result<ProjectRecord, ProjectServiceError> {
        let name = submission.name.trim();
        if name.is_empty() {
            return Err(ProjectServiceError::Validation(
                "project name must not be blank".to_string(),
            ));
        }
        if submission.unit_count == Some(0) {
            return Err(ProjectServiceError::Validation(
                "unit count must be positive when provided".to_string(),
            ));
        }

        let id = ProjectId(self.sequence.fetch_add(1, Ordering::Relaxed));
        let record = ProjectRecord {
            id,
            name: name.to_string(),
            address: submission
                .address
                .map(|address| address.trim().to_string())
                .filter(|address| !address.is_empty()),
            unit_count: submission.unit_count,
            overall_score: submission.overall_score,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(project_id = %stored.id, name = %stored.name, "project created");
        Ok(stored)
    }

    pub fn get(&self, id: ProjectId) -> Result<ProjectRecord, ProjectServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<ProjectRecord>, ProjectServiceError> {
        let mut records = self.repository.list()?;
        records.sort_by_key(|record| record.id);
        Ok(records)
    }

    /// Scores for a stored project, using its stored overall score if any.
    pub fn scores(&self, id: ProjectId) -> Result<ScoreSet, ProjectServiceError> {
        let record = self.get(id)?;
        let scores = record.scores();
        debug!(project_id = %id, overall = %scores.overall, "computed feasibility scores");
        Ok(scores)
    }

    /// Create one project per curated sample name.
    pub fn seed_samples(&self) -> Result<Vec<ProjectRecord>, ProjectServiceError> {
        sample_project_submissions()
            .into_iter()
            .map(|submission| self.create(submission))
            .collect()
    }
}

/// Submissions for the curated sample projects, without stored scores.
pub fn sample_project_submissions() -> Vec<NewProject> {
    SAMPLE_PROJECT_NAMES
        .iter()
        .map(|name| NewProject {
            name: (*name).to_string(),
            address: None,
            unit_count: None,
            overall_score: None,
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    #[error("invalid project: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
