use axum::response::Response;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::projects::domain::{NewProject, ProjectId, ProjectRecord};
use crate::projects::repository::{ProjectRepository, RepositoryError};
use crate::projects::router::project_router;
use crate::projects::service::ProjectService;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<ProjectId, ProjectRecord>>>,
}

impl ProjectRepository for MemoryRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl ProjectRepository for ConflictRepository {
    fn insert(&self, _record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ProjectRepository for UnavailableRepository {
    fn insert(&self, _record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ProjectService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ProjectService::new(repository.clone());
    (service, repository)
}

pub(super) fn project_router_with_service(
    service: ProjectService<MemoryRepository>,
) -> axum::Router {
    project_router(Arc::new(service))
}

pub(super) fn submission(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        address: Some("1200 Grand Ave, Des Moines, IA".to_string()),
        unit_count: Some(48),
        overall_score: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
