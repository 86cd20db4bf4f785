use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::{compute_scores, ScoreSet, ScoreSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload submitted when a developer creates a prospective building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub unit_count: Option<u32>,
    /// Overall score recorded elsewhere, shown as-is for sample projects.
    #[serde(default)]
    pub overall_score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub address: Option<String>,
    pub unit_count: Option<u32>,
    pub overall_score: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn scores(&self) -> ScoreSet {
        compute_scores(self.id.0, &self.name, self.overall_score.as_deref())
    }

    pub fn view(&self) -> ProjectView {
        ProjectView {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            unit_count: self.unit_count,
            created_at: self.created_at,
            score_source: ScoreSource::for_project_name(&self.name),
            scores: self.scores(),
        }
    }
}

/// Record plus computed scores, as returned by the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: ProjectId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub score_source: ScoreSource,
    pub scores: ScoreSet,
}
