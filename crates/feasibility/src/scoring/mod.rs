//! Deterministic feasibility scores for projects without a scoring pipeline.
//!
//! A project's id seeds a Mulberry32 stream that yields six plausible category
//! scores; the weighted overall score is derived from the rounded categories.
//! The four curated sample projects bypass the stream and show fixed reference
//! scores instead.

mod random;
mod rounding;
mod samples;

pub use random::{derive_seed, Mulberry32};
pub use rounding::{format_tenths, round_tenths};
pub use samples::{is_sample_project, REFERENCE_SCORE, SAMPLE_PROJECT_NAMES};

use rounding::tenths_value;
use serde::{Deserialize, Serialize};

const SCORE_FLOOR: f64 = 4.4;
const SCORE_SPAN: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    Zoning,
    Massing,
    Sustainability,
    Cost,
    Logistics,
    BuildTime,
}

impl ScoreCategory {
    /// Draw order of the score stream.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Zoning,
            Self::Massing,
            Self::Sustainability,
            Self::Cost,
            Self::Logistics,
            Self::BuildTime,
        ]
    }

    /// Contribution to the overall score. The weights sum to 1.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Zoning => 0.20,
            Self::Massing => 0.15,
            Self::Sustainability => 0.20,
            Self::Cost => 0.20,
            Self::Logistics => 0.15,
            Self::BuildTime => 0.10,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Zoning => "zoning",
            Self::Massing => "massing",
            Self::Sustainability => "sustainability",
            Self::Cost => "cost",
            Self::Logistics => "logistics",
            Self::BuildTime => "buildTime",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Zoning => "Zoning",
            Self::Massing => "Massing",
            Self::Sustainability => "Sustainability",
            Self::Cost => "Cost",
            Self::Logistics => "Logistics",
            Self::BuildTime => "Build Time",
        }
    }
}

/// One-decimal score string per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub zoning: String,
    pub massing: String,
    pub sustainability: String,
    pub cost: String,
    pub logistics: String,
    pub build_time: String,
}

impl CategoryScores {
    fn uniform(score: &str) -> Self {
        Self {
            zoning: score.to_string(),
            massing: score.to_string(),
            sustainability: score.to_string(),
            cost: score.to_string(),
            logistics: score.to_string(),
            build_time: score.to_string(),
        }
    }

    pub fn get(&self, category: ScoreCategory) -> &str {
        match category {
            ScoreCategory::Zoning => &self.zoning,
            ScoreCategory::Massing => &self.massing,
            ScoreCategory::Sustainability => &self.sustainability,
            ScoreCategory::Cost => &self.cost,
            ScoreCategory::Logistics => &self.logistics,
            ScoreCategory::BuildTime => &self.build_time,
        }
    }

    fn slot_mut(&mut self, category: ScoreCategory) -> &mut String {
        match category {
            ScoreCategory::Zoning => &mut self.zoning,
            ScoreCategory::Massing => &mut self.massing,
            ScoreCategory::Sustainability => &mut self.sustainability,
            ScoreCategory::Cost => &mut self.cost,
            ScoreCategory::Logistics => &mut self.logistics,
            ScoreCategory::BuildTime => &mut self.build_time,
        }
    }

    /// Scores in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, &str)> + '_ {
        ScoreCategory::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Where a score set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Sample,
    Generated,
}

impl ScoreSource {
    pub fn for_project_name(project_name: &str) -> Self {
        if is_sample_project(project_name) {
            Self::Sample
        } else {
            Self::Generated
        }
    }
}

/// Overall plus per-category feasibility scores for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub overall: String,
    pub individual: CategoryScores,
}

/// Scores for a project, stable for a given `(project_id, project_name)`.
///
/// Sample projects report `stored_overall` (or [`REFERENCE_SCORE`] when it is
/// missing or empty) with every category at the reference score. Everything
/// else draws six values from the project's stream, maps each into
/// `[4.4, 5.0)` and rounds to one decimal; the overall score is the weighted
/// sum of those rounded values, rounded again.
pub fn compute_scores(
    project_id: i64,
    project_name: &str,
    stored_overall: Option<&str>,
) -> ScoreSet {
    if is_sample_project(project_name) {
        let overall = stored_overall
            .filter(|score| !score.is_empty())
            .unwrap_or(REFERENCE_SCORE);
        return ScoreSet {
            overall: overall.to_string(),
            individual: CategoryScores::uniform(REFERENCE_SCORE),
        };
    }

    let mut stream = Mulberry32::for_project(project_id);
    let mut individual = CategoryScores::uniform("");
    let mut weighted = 0.0;

    for category in ScoreCategory::ordered() {
        let draw = stream.next_unit();
        let tenths = round_tenths(draw * SCORE_SPAN + SCORE_FLOOR);
        weighted += tenths_value(tenths) * category.weight();
        *individual.slot_mut(category) = format_tenths(tenths);
    }

    ScoreSet {
        overall: format_tenths(round_tenths(weighted)),
        individual,
    }
}
