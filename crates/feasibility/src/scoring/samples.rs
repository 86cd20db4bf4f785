/// Curated demo projects that always display their hand-set reference scores.
pub const SAMPLE_PROJECT_NAMES: [&str; 4] = [
    "Serenity Village",
    "Mountain View Apartments",
    "University Housing Complex",
    "Workforce Commons",
];

/// Score shown for every category of a sample project, and for its overall
/// score when nothing was stored.
pub const REFERENCE_SCORE: &str = "4.0";

/// Exact, case-sensitive match against [`SAMPLE_PROJECT_NAMES`].
pub fn is_sample_project(name: &str) -> bool {
    SAMPLE_PROJECT_NAMES.contains(&name)
}
