use clap::Args;
use feasibility::error::AppError;
use feasibility::scoring::{
    compute_scores, derive_seed, ScoreSet, ScoreSource, SAMPLE_PROJECT_NAMES,
};
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct ScoresArgs {
    /// Project identifier used to seed the score stream
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) project_id: i64,
    /// Project name; sample project names show reference scores
    #[arg(long)]
    pub(crate) name: String,
    /// Overall score already stored for the project
    #[arg(long)]
    pub(crate) stored_overall: Option<String>,
    /// Emit JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    project_id: i64,
    project_name: &'a str,
    source: ScoreSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u32>,
    scores: ScoreSet,
}

impl<'a> ScoreReport<'a> {
    fn build(project_id: i64, project_name: &'a str, stored_overall: Option<&str>) -> Self {
        let source = ScoreSource::for_project_name(project_name);
        let seed = match source {
            ScoreSource::Generated => Some(derive_seed(project_id)),
            ScoreSource::Sample => None,
        };
        Self {
            project_id,
            project_name,
            source,
            seed,
            scores: compute_scores(project_id, project_name, stored_overall),
        }
    }

    fn render_text(&self) -> String {
        let mut lines = vec![format!(
            "Feasibility scores for \"{}\" (project {})",
            self.project_name, self.project_id
        )];

        match (self.source, self.seed) {
            (ScoreSource::Generated, Some(seed)) => {
                lines.push(format!("Source: generated from seed {seed}"));
            }
            _ => lines.push("Source: sample project reference scores".to_string()),
        }

        lines.push(format!("Overall: {}", self.scores.overall));
        lines.push(String::new());
        for (category, score) in self.scores.individual.iter() {
            lines.push(format!(
                "- {:<15} {score} (weight {:.0}%)",
                category.label(),
                category.weight() * 100.0
            ));
        }

        lines.join("\n")
    }
}

pub(crate) fn run_scores(args: ScoresArgs) -> Result<(), AppError> {
    let ScoresArgs {
        project_id,
        name,
        stored_overall,
        json,
    } = args;

    let report = ScoreReport::build(project_id, &name, stored_overall.as_deref());
    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        println!("{}", report.render_text());
    }

    Ok(())
}

pub(crate) fn run_samples() {
    println!("Sample projects (always show reference scores)");
    for name in SAMPLE_PROJECT_NAMES {
        println!("- {name}");
    }
}
