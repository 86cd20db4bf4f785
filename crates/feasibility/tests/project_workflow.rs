use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use feasibility::projects::{
    sample_project_submissions, NewProject, ProjectId, ProjectRecord, ProjectRepository,
    ProjectService, RepositoryError,
};
use feasibility::scoring::ScoreSource;

#[derive(Default)]
struct HashRepository {
    records: Mutex<HashMap<ProjectId, ProjectRecord>>,
}

impl ProjectRepository for HashRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("repository mutex poisoned")
            .get(&id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("repository mutex poisoned")
            .values()
            .cloned()
            .collect())
    }
}

#[test]
fn stored_projects_keep_stable_scores_across_reads() {
    let service = ProjectService::new(Arc::new(HashRepository::default()));
    let record = service
        .create(NewProject {
            name: "Riverside Modular Flats".to_string(),
            address: Some("400 River Rd".to_string()),
            unit_count: Some(72),
            overall_score: None,
        })
        .expect("project created");

    let first = service.scores(record.id).expect("scores");
    let second = service.scores(record.id).expect("scores");

    assert_eq!(first, second);
    assert_eq!(first.overall, "4.6");
    assert_eq!(record.view().score_source, ScoreSource::Generated);
}

#[test]
fn sample_submissions_cover_the_allow_list() {
    let service = ProjectService::new(Arc::new(HashRepository::default()));
    let names: Vec<String> = sample_project_submissions()
        .into_iter()
        .map(|submission| submission.name)
        .collect();
    assert_eq!(names.len(), 4);

    for record in service.seed_samples().expect("seeded") {
        let view = record.view();
        assert_eq!(view.score_source, ScoreSource::Sample);
        assert_eq!(view.scores.overall, "4.0");
    }

    // list() is sorted by id regardless of storage order.
    let ids: Vec<i64> = service
        .list()
        .expect("listed")
        .into_iter()
        .map(|record| record.id.0)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
