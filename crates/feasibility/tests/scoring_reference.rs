use feasibility::scoring::{
    compute_scores, derive_seed, ScoreCategory, ScoreSet, REFERENCE_SCORE, SAMPLE_PROJECT_NAMES,
};

fn categories(scores: &ScoreSet) -> Vec<&str> {
    scores.individual.iter().map(|(_, score)| score).collect()
}

fn tenths(score: &str) -> i64 {
    let value: f64 = score.parse().expect("score parses as a decimal");
    (value * 10.0).round() as i64
}

#[test]
fn reference_vector_for_project_one() {
    assert_eq!(derive_seed(1), 31_415_927);

    let scores = compute_scores(1, "Harbor Lofts", None);

    assert_eq!(categories(&scores), ["4.5", "4.5", "4.9", "4.5", "4.5", "4.9"]);
    assert_eq!(scores.overall, "4.6");
}

#[test]
fn reference_vector_for_project_two() {
    let scores = compute_scores(2, "Harbor Lofts", None);

    assert_eq!(categories(&scores), ["4.8", "4.8", "4.8", "4.5", "4.6", "4.5"]);
    assert_eq!(scores.overall, "4.7");
}

#[test]
fn overall_rounding_follows_the_exact_weighted_sum() {
    // The weighted sum for id 34 is the double just below 4.85.
    let scores = compute_scores(34, "Harbor Lofts", None);

    assert_eq!(categories(&scores), ["4.8", "4.6", "4.9", "4.9", "5.0", "4.9"]);
    assert_eq!(scores.overall, "4.8");

    let scores = compute_scores(73, "Harbor Lofts", None);
    assert_eq!(categories(&scores), ["4.5", "4.6", "4.5", "4.5", "4.8", "4.4"]);
    assert_eq!(scores.overall, "4.5");
}

#[test]
fn repeated_calls_are_identical() {
    for id in [-5_000, -1, 0, 1, 17, 4_096, i64::MAX, i64::MIN] {
        for name in ["", "Harbor Lofts", "Serenity Village", "serenity village"] {
            let first = compute_scores(id, name, Some("3.9"));
            let second = compute_scores(id, name, Some("3.9"));
            assert_eq!(first, second, "id {id} name {name:?}");
            assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }
    }
}

#[test]
fn sample_projects_use_reference_scores() {
    let scores = compute_scores(1, "Serenity Village", Some("3.7"));
    assert_eq!(scores.overall, "3.7");
    assert!(categories(&scores).iter().all(|score| *score == "4.0"));

    let scores = compute_scores(1, "Serenity Village", None);
    assert_eq!(scores.overall, REFERENCE_SCORE);

    for name in SAMPLE_PROJECT_NAMES {
        let scores = compute_scores(99, name, None);
        assert_eq!(scores.overall, "4.0");
        assert!(categories(&scores).iter().all(|score| *score == "4.0"));
    }
}

#[test]
fn sample_match_is_case_sensitive() {
    let scores = compute_scores(1, "SERENITY VILLAGE", Some("3.7"));
    assert_eq!(scores, compute_scores(1, "Harbor Lofts", None));
}

#[test]
fn generated_categories_stay_within_bounds() {
    for id in (-2_000..2_000).chain([i64::MAX, i64::MIN, 1 << 53]) {
        let scores = compute_scores(id, "Harbor Lofts", None);
        for (category, score) in scores.individual.iter() {
            let value = tenths(score);
            assert!(
                (44..=50).contains(&value),
                "{} score {score} out of range for id {id}",
                category.label()
            );
            assert_eq!(score.len(), 3, "one decimal digit expected, got {score}");
        }
    }
}

#[test]
fn overall_is_the_rounded_weighted_sum_of_categories() {
    for id in 0..2_000 {
        let scores = compute_scores(id, "Harbor Lofts", None);
        let weighted: f64 = ScoreCategory::ordered()
            .into_iter()
            .map(|category| {
                let value: f64 = scores.individual.get(category).parse().unwrap();
                value * category.weight()
            })
            .fold(0.0, |total, part| total + part);

        let diff = (tenths(&scores.overall) as f64 / 10.0 - weighted).abs();
        assert!(
            diff <= 0.05 + 1e-9,
            "overall {} drifted from weighted {weighted} for id {id}",
            scores.overall
        );
    }
}

#[test]
fn adjacent_ids_produce_different_scores() {
    let first = compute_scores(1, "X", None);
    let second = compute_scores(2, "X", None);
    assert_ne!(first.individual, second.individual);
}

#[test]
fn id_sign_does_not_change_scores() {
    assert_eq!(
        compute_scores(-1, "Harbor Lofts", None),
        compute_scores(1, "Harbor Lofts", None)
    );
    // i64::MIN reduces to the same seed as 2.
    assert_eq!(
        compute_scores(i64::MIN, "Harbor Lofts", None),
        compute_scores(2, "Harbor Lofts", None)
    );
}

#[test]
fn empty_name_is_scored_like_any_other_project() {
    let scores = compute_scores(1, "", None);
    assert_eq!(scores.overall, "4.6");
}
